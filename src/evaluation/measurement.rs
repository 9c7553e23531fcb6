use std::fmt;

/// Summarized scalar metric produced by a performance evaluator.
///
/// Typical examples: `"accuracy"`, `"kappa"`, `"error_rate"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
}

impl Measurement {
    #[inline]
    pub fn new<N: Into<String>>(name: N, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Looks up `name` in a list of measurements.
    pub fn find(measurements: &[Measurement], name: &str) -> Option<f64> {
        measurements.iter().find(|m| m.name == name).map(|m| m.value)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:.4}", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_rounds_to_four_places() {
        assert_eq!(Measurement::new("accuracy", 2.0 / 3.0).to_string(), "accuracy=0.6667");
    }

    #[test]
    fn find_by_name() {
        let ms = vec![Measurement::new("accuracy", 0.5), Measurement::new("kappa", 0.1)];
        assert_eq!(Measurement::find(&ms, "kappa"), Some(0.1));
        assert_eq!(Measurement::find(&ms, "f1"), None);
    }
}
