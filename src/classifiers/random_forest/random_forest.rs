use crate::classifiers::ClassifierError;
use crate::classifiers::decision_tree::DecisionTree;
use crate::classifiers::random_forest::bootstrap::bootstrap_table;
use crate::classifiers::random_forest::forest::Forest;
use crate::classifiers::random_forest::params::RandomForestParams;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use crate::core::table::LabeledTable;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::iter::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Grows forests of gain-ratio trees on bootstrap samples.
#[derive(Debug)]
pub struct RandomForest {
    params: RandomForestParams,
    forest: Option<Forest>,
}

impl RandomForest {
    pub fn new(params: RandomForestParams) -> Result<Self, ClassifierError> {
        params.validate()?;
        Ok(Self {
            params,
            forest: None,
        })
    }

    pub fn params(&self) -> &RandomForestParams {
        &self.params
    }

    pub fn forest(&self) -> Option<&Forest> {
        self.forest.as_ref()
    }

    /// Trains `n_trees` independent trees and bundles them into a [`Forest`].
    ///
    /// Each tree gets its own random stream seeded from one master generator,
    /// so a fixed `seed` reproduces the same forest however rayon schedules
    /// the work.
    #[instrument(skip_all, fields(n_trees = n_trees, rows = table.len()))]
    pub fn grow(&self, table: &LabeledTable, n_trees: usize) -> Result<Forest, ClassifierError> {
        if n_trees == 0 {
            return Err(ClassifierError::InvalidParameter(
                "n_trees must be at least 1".into(),
            ));
        }
        if table.is_empty() {
            return Err(ClassifierError::EmptyDataset);
        }

        let num_attributes = table.header().input_attribute_indices().len();
        let tree_params = self.params.tree_params(num_attributes)?;
        let bootstrap = self.params.bootstrap;

        info!(
            n_trees,
            rows = table.len(),
            num_attributes,
            n_classes = table.header().number_of_classes(),
            max_candidate_attributes = ?tree_params.max_candidate_attributes,
            bootstrap,
            "growing random forest"
        );

        let mut master_rng = match self.params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let tree_seeds: Vec<u64> = (0..n_trees).map(|_| master_rng.random()).collect();

        let trees = tree_seeds
            .into_par_iter()
            .enumerate()
            .map(|(index, seed)| -> Result<DecisionTree, ClassifierError> {
                let mut rng = StdRng::seed_from_u64(seed);
                let tree = if bootstrap {
                    let sample = bootstrap_table(table, &mut rng)?;
                    DecisionTree::fit_with_rng(&sample, &tree_params, &mut rng)?
                } else {
                    DecisionTree::fit_with_rng(table, &tree_params, &mut rng)?
                };
                debug!(tree = index, depth = tree.metadata().depth, "tree grown");
                Ok(tree)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let forest = Forest::new(trees, self.params.tie_break)?;
        info!(n_trees = forest.num_trees(), "random forest ready");
        Ok(forest)
    }

    /// Grows `params.n_trees` trees on `table` and keeps the result.
    pub fn fit(&mut self, table: &LabeledTable) -> Result<(), ClassifierError> {
        self.forest = Some(self.grow(table, self.params.n_trees)?);
        Ok(())
    }

    /// [`RandomForest::fit`] on separate input rows and class labels.
    pub fn fit_xy(
        &mut self,
        header: Arc<InstanceHeader>,
        x: &[Vec<usize>],
        y: &[usize],
    ) -> Result<(), ClassifierError> {
        let table = LabeledTable::from_xy(header, x, y)?;
        self.fit(&table)
    }

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
        self.forest
            .as_ref()
            .ok_or(ClassifierError::NotFitted)?
            .predict(rows, output_probs, rng)
    }
}
