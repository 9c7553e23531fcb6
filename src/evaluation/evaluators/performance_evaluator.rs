use crate::classifiers::{ClassDistribution, Classifier, ClassifierError};
use crate::core::instances::Instance;
use crate::core::table::LabeledTable;
use crate::evaluation::Measurement;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Accumulates predictions against ground truth.
///
/// A `PerformanceEvaluator` consumes labeled instances and the class
/// distribution a model produced for them, and exposes aggregated metrics
/// via [`performance`](PerformanceEvaluator::performance).
pub trait PerformanceEvaluator {
    /// Clears accumulated results.
    fn reset(&mut self);

    /// Feeds one labeled instance and the distribution predicted for it.
    ///
    /// Instances without a class value are skipped.
    fn add_result(&mut self, instance: &dyn Instance, votes: &ClassDistribution);

    fn performance(&self) -> Vec<Measurement>;
}

pub trait PerformanceEvaluatorExt {
    /// Returns `(name, value)` for each requested metric, preserving order.
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>;

    fn metric(&self, name: &str) -> Option<f64> {
        self.metrics([name]).into_iter().next().and_then(|(_, v)| v)
    }
}

impl<T: PerformanceEvaluator + ?Sized> PerformanceEvaluatorExt for T {
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let map: HashMap<_, _> = self
            .performance()
            .into_iter()
            .map(|m| (m.name, m.value))
            .collect();
        names
            .into_iter()
            .map(|n| (n.to_string(), map.get(n).copied()))
            .collect()
    }
}

/// Scores `classifier` on every row of `table`.
///
/// The table must share the classifier's class domain. Any inference
/// failure aborts the evaluation.
#[instrument(skip_all, fields(rows = table.len()))]
pub fn evaluate<C, E>(
    classifier: &C,
    table: &LabeledTable,
    evaluator: &mut E,
) -> Result<Vec<Measurement>, ClassifierError>
where
    C: Classifier + ?Sized,
    E: PerformanceEvaluator + ?Sized,
{
    let expected = classifier.header().number_of_classes();
    let got = table.header().number_of_classes();
    if expected != got {
        return Err(ClassifierError::ClassCountMismatch { expected, got });
    }

    for instance in table.instances() {
        let votes = classifier.votes_for_instance(&instance)?;
        evaluator.add_result(&instance, &votes);
    }

    let measurements = evaluator.performance();
    debug!(
        measurements = %measurements
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" "),
        "evaluation finished"
    );
    Ok(measurements)
}
