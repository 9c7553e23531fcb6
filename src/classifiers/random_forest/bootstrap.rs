//! With-replacement resampling used to diversify forest members.

use crate::classifiers::ClassifierError;
use crate::core::table::LabeledTable;
use rand::Rng;

/// `n` indices drawn uniformly from `0..n` with replacement.
pub fn bootstrap_indices<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    (0..n).map(|_| rng.random_range(0..n)).collect()
}

/// Resamples aligned inputs and labels, keeping each pair together.
pub fn bootstrap<X, Y, R>(x: &[X], y: &[Y], rng: &mut R) -> Result<(Vec<X>, Vec<Y>), ClassifierError>
where
    X: Clone,
    Y: Clone,
    R: Rng + ?Sized,
{
    if x.len() != y.len() {
        return Err(ClassifierError::LengthMismatch {
            inputs: x.len(),
            labels: y.len(),
        });
    }
    let lines = bootstrap_indices(x.len(), rng);
    let x_boot = lines.iter().map(|&i| x[i].clone()).collect();
    let y_boot = lines.iter().map(|&i| y[i].clone()).collect();
    Ok((x_boot, y_boot))
}

/// Resamples the rows of `table`; the header (and so every domain) is shared.
pub fn bootstrap_table<R: Rng + ?Sized>(
    table: &LabeledTable,
    rng: &mut R,
) -> Result<LabeledTable, ClassifierError> {
    table.select_rows(&bootstrap_indices(table.len(), rng))
}
