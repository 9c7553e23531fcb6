use crate::classifiers::classifier::{Classifier, check_instance_header};
use crate::classifiers::decision_tree::DecisionTree;
use crate::classifiers::distribution::ClassDistribution;
use crate::classifiers::random_forest::params::TieBreak;
use crate::classifiers::ClassifierError;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use crate::utils::math::max_indices;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// A fitted ensemble of decision trees sharing one header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forest {
    header: Arc<InstanceHeader>,
    trees: Vec<DecisionTree>,
    n_classes: usize,
    tie_break: TieBreak,
}

impl Forest {
    pub fn new(trees: Vec<DecisionTree>, tie_break: TieBreak) -> Result<Self, ClassifierError> {
        let Some(first) = trees.first() else {
            return Err(ClassifierError::InvalidParameter(
                "a forest needs at least one tree".into(),
            ));
        };
        let header = Arc::clone(first.header());
        let n_classes = header.number_of_classes();
        for tree in &trees {
            if tree.number_of_classes() != n_classes {
                return Err(ClassifierError::ClassCountMismatch {
                    expected: n_classes,
                    got: tree.number_of_classes(),
                });
            }
            if !Arc::ptr_eq(tree.header(), &header) && **tree.header() != *header {
                return Err(ClassifierError::HeaderMismatch {
                    expected: header.relation_name().to_string(),
                    got: tree.header().relation_name().to_string(),
                });
            }
        }
        Ok(Self {
            header,
            trees,
            n_classes,
            tie_break,
        })
    }

    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }

    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Mean of the per-tree distributions, every tree weighted equally.
    pub fn predict_proba(&self, instance: &dyn Instance) -> Result<ClassDistribution, ClassifierError> {
        check_instance_header(&self.header, instance)?;
        let mut pred = vec![0.0; self.n_classes];
        for tree in &self.trees {
            let votes = tree.votes_for_instance(instance)?;
            if votes.num_classes() != self.n_classes {
                return Err(ClassifierError::ClassCountMismatch {
                    expected: self.n_classes,
                    got: votes.num_classes(),
                });
            }
            for (p, v) in pred.iter_mut().zip(votes.probs()) {
                *p += v;
            }
        }
        let n = self.trees.len() as f64;
        pred.iter_mut().for_each(|p| *p /= n);
        Ok(ClassDistribution::from_probs(pred))
    }

    /// One row per instance: averaged class probabilities when `output_probs`
    /// is set, otherwise a one-hot vector of the winning class.
    pub fn predict<I, R>(
        &self,
        rows: &[I],
        output_probs: bool,
        rng: &mut R,
    ) -> Result<Vec<Vec<f64>>, ClassifierError>
    where
        I: Instance,
        R: Rng + ?Sized,
    {
        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let probs = self.predict_proba(row)?.into_probs();
            if output_probs {
                out.push(probs);
            } else {
                out.push(self.one_hot(&probs, rng));
            }
        }
        debug!(rows = rows.len(), output_probs, "forest prediction");
        Ok(out)
    }

    /// Winning class of a single instance under the configured tie break.
    pub fn predict_class<R: Rng + ?Sized>(
        &self,
        instance: &dyn Instance,
        rng: &mut R,
    ) -> Result<Option<usize>, ClassifierError> {
        let probs = self.predict_proba(instance)?;
        Ok(self.pick_class(probs.probs(), rng))
    }

    fn pick_class<R: Rng + ?Sized>(&self, probs: &[f64], rng: &mut R) -> Option<usize> {
        let winners = max_indices(probs);
        match self.tie_break {
            TieBreak::LowestIndex => winners.first().copied(),
            TieBreak::Random => winners.choose(rng).copied(),
        }
    }

    fn one_hot<R: Rng + ?Sized>(&self, probs: &[f64], rng: &mut R) -> Vec<f64> {
        let mut hot = vec![0.0; probs.len()];
        if let Some(class) = self.pick_class(probs, rng) {
            hot[class] = 1.0;
        }
        hot
    }

    pub fn to_json(&self) -> Result<String, ClassifierError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ClassifierError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ClassifierError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}

impl Classifier for Forest {
    fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    fn votes_for_instance(&self, instance: &dyn Instance) -> Result<ClassDistribution, ClassifierError> {
        self.predict_proba(instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::decision_tree::DecisionTreeParams;
    use crate::core::instances::DenseInstance;
    use crate::core::table::LabeledTable;
    use crate::testing::dummies::{table_play_by_weather, table_weather};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn tree_on(table: &LabeledTable, rows: &[usize]) -> DecisionTree {
        let params = DecisionTreeParams {
            unseen_value: crate::classifiers::decision_tree::UnseenValuePolicy::ParentDistribution,
            seed: Some(1),
            ..Default::default()
        };
        DecisionTree::fit(&table.select_rows(rows).unwrap(), &params).unwrap()
    }

    #[test]
    fn new_rejects_empty_and_mismatched_trees() {
        assert!(matches!(
            Forest::new(vec![], TieBreak::Random),
            Err(ClassifierError::InvalidParameter(_))
        ));

        let weather = table_weather();
        let records = [
            ["sunny", "false", "yes"],
            ["rainy", "true", "no"],
            ["overcast", "false", "maybe"],
        ];
        let three = LabeledTable::from_records("t", &["weather", "windy", "play"], &records, "play")
            .unwrap();
        let trees = vec![tree_on(&weather, &[0, 2]), tree_on(&three, &[0, 2])];
        assert!(matches!(
            Forest::new(trees, TieBreak::Random),
            Err(ClassifierError::ClassCountMismatch { expected: 2, got: 3 })
        ));
    }

    #[test]
    fn new_rejects_trees_grown_on_other_headers() {
        let weather = table_weather();
        let records = [["rainy", "false", "no"], ["sunny", "true", "yes"]];
        let reordered =
            LabeledTable::from_records("weather", &["weather", "windy", "play"], &records, "play")
                .unwrap();
        let trees = vec![tree_on(&weather, &[0, 2]), tree_on(&reordered, &[0, 1])];
        assert!(matches!(
            Forest::new(trees, TieBreak::Random),
            Err(ClassifierError::HeaderMismatch { .. })
        ));
    }

    #[test]
    fn averages_tree_distributions() {
        let table = table_play_by_weather();
        let yes_only = tree_on(&table, &[0, 1]);
        let split = tree_on(&table, &[0, 1, 2, 3]);
        let forest = Forest::new(vec![yes_only, split], TieBreak::LowestIndex).unwrap();

        let rainy = DenseInstance::from_labels(Arc::clone(table.header()), [("weather", "rainy")])
            .unwrap();
        let d = forest.predict_proba(&rainy).unwrap();
        assert_eq!(d.probs(), &[0.5, 0.5]);
    }

    #[test]
    fn probability_rows_sum_to_one() {
        let table = table_weather();
        let trees = vec![
            tree_on(&table, &[0, 1, 2, 3, 4, 5]),
            tree_on(&table, &[0, 2, 4]),
            tree_on(&table, &[1, 3, 5, 5]),
        ];
        let forest = Forest::new(trees, TieBreak::Random).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let preds = forest.predict(&table.instances(), true, &mut rng).unwrap();
        assert_eq!(preds.len(), table.len());
        for row in preds {
            let s: f64 = row.iter().sum();
            assert!((s - 1.0).abs() < 1e-9, "sum={s}");
        }
    }

    #[test]
    fn hard_labels_are_one_hot() {
        let table = table_weather();
        let forest = Forest::new(vec![tree_on(&table, &[0, 1, 2, 3, 4, 5])], TieBreak::Random)
            .unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let preds = forest.predict(&table.instances(), false, &mut rng).unwrap();
        for (row, label) in preds.iter().zip(table.class_labels()) {
            assert_eq!(row.iter().sum::<f64>(), 1.0);
            assert_eq!(row[label], 1.0);
        }
    }

    #[test]
    fn ties_break_randomly_or_deterministically() {
        let table = table_play_by_weather();
        let trees = vec![tree_on(&table, &[0, 1]), tree_on(&table, &[2, 3])];
        let rainy = DenseInstance::from_labels(Arc::clone(table.header()), [("weather", "rainy")])
            .unwrap();

        let forest = Forest::new(trees.clone(), TieBreak::LowestIndex).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            assert_eq!(forest.predict_class(&rainy, &mut rng).unwrap(), Some(0));
        }

        let forest = Forest::new(trees, TieBreak::Random).unwrap();
        let seen: HashSet<Option<usize>> = (0..200)
            .map(|_| forest.predict_class(&rainy, &mut rng).unwrap())
            .collect();
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let table = table_weather();
        let forest = Forest::new(
            vec![tree_on(&table, &[0, 1, 2, 3, 4, 5]), tree_on(&table, &[0, 2, 4])],
            TieBreak::LowestIndex,
        )
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("forest.json");
        forest.save(&path).unwrap();
        let loaded = Forest::load(&path).unwrap();
        assert_eq!(loaded.num_trees(), 2);
        assert_eq!(loaded.tie_break(), TieBreak::LowestIndex);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            forest.predict(&table.instances(), false, &mut rng).unwrap(),
            loaded.predict(&table.instances(), false, &mut rng).unwrap()
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Forest::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ClassifierError::Io(_)));
        assert!(matches!(Forest::from_json("{"), Err(ClassifierError::Json(_))));
    }
}
