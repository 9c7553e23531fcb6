use crate::classifiers::ClassifierError;
use crate::core::table::TableView;

/// Shannon entropy (bits) of a count vector.
///
/// Zero entries contribute nothing and are never passed to `log2`.
pub fn entropy(counts: &[f64]) -> Result<f64, ClassifierError> {
    let total: f64 = counts.iter().sum();
    if total <= 0.0 {
        return Err(ClassifierError::EmptySubset);
    }
    let h = counts
        .iter()
        .filter(|&&c| c > 0.0)
        .map(|&c| {
            let p = c / total;
            -p * p.log2()
        })
        .sum::<f64>();
    Ok(h.max(0.0))
}

/// Entropy of the partition sizes themselves.
pub fn intrinsic_value(post_split_dists: &[Vec<f64>]) -> Result<f64, ClassifierError> {
    let sizes: Vec<f64> = post_split_dists.iter().map(|d| d.iter().sum()).collect();
    entropy(&sizes)
}

pub(crate) fn gain_from_counts(
    pre_split_distribution: &[f64],
    post_split_dists: &[Vec<f64>],
) -> Result<f64, ClassifierError> {
    let before = entropy(pre_split_distribution)?;
    let total: f64 = pre_split_distribution.iter().sum();
    let mut after = 0.0;
    for dist in post_split_dists {
        let weight: f64 = dist.iter().sum();
        if weight > 0.0 {
            after += weight / total * entropy(dist)?;
        }
    }
    Ok((before - after).max(0.0))
}

/// Drop in class entropy obtained by partitioning `view` on `attribute`.
pub fn information_gain(view: &TableView<'_>, attribute: usize) -> Result<f64, ClassifierError> {
    gain_from_counts(&view.class_counts(), &view.class_counts_by_value(attribute))
}

/// Information gain divided by the intrinsic value of `attribute`.
///
/// # Errors
///
/// [`ClassifierError::DegenerateSplit`] when `attribute` holds a single
/// value on `view`, since its intrinsic value is zero.
pub fn information_gain_ratio(
    view: &TableView<'_>,
    attribute: usize,
) -> Result<f64, ClassifierError> {
    let post = view.class_counts_by_value(attribute);
    let iv = intrinsic_value(&post)?;
    if iv <= 0.0 {
        return Err(ClassifierError::DegenerateSplit {
            attribute: view.header().attribute_name(attribute).to_string(),
        });
    }
    Ok(gain_from_counts(&view.class_counts(), &post)? / iv)
}
