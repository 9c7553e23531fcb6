/// Indices of every element equal to the maximum, in ascending order.
/// Non-finite entries are ignored.
pub fn max_indices(values: &[f64]) -> Vec<usize> {
    let mut best = f64::NEG_INFINITY;
    let mut indices = Vec::new();
    for (i, &x) in values.iter().enumerate() {
        if !x.is_finite() {
            continue;
        }
        if x > best {
            best = x;
            indices.clear();
            indices.push(i);
        } else if x == best {
            indices.push(i);
        }
    }
    indices
}

/// Scales `values` to sum to one. `None` when the sum is not positive.
pub fn normalize(values: &[f64]) -> Option<Vec<f64>> {
    let total: f64 = values.iter().sum();
    if total.is_nan() || total <= 0.0 {
        return None;
    }
    Some(values.iter().map(|v| v / total).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_indices_collects_ties() {
        assert_eq!(max_indices(&[1.0, 3.0, 3.0, 2.0]), vec![1, 2]);
        assert_eq!(max_indices(&[0.5]), vec![0]);
        assert!(max_indices(&[]).is_empty());
    }

    #[test]
    fn max_indices_skips_nan() {
        assert_eq!(max_indices(&[f64::NAN, 0.1, 0.1]), vec![1, 2]);
    }

    #[test]
    fn normalize_sums_to_one() {
        let p = normalize(&[1.0, 1.0, 2.0]).unwrap();
        assert_eq!(p, vec![0.25, 0.25, 0.5]);
        assert!(normalize(&[0.0, 0.0]).is_none());
    }
}
