use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A categorical attribute with a finite, ordered value domain.
///
/// Value indices are positions in `values`; every model in the crate refers
/// to attribute values by index and only resolves labels at the edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NominalAttribute {
    pub name: String,
    pub values: Vec<String>,
    pub label_to_index: HashMap<String, usize>,
}

impl NominalAttribute {
    pub fn new(name: String) -> NominalAttribute {
        NominalAttribute {
            name,
            values: Vec::new(),
            label_to_index: HashMap::new(),
        }
    }

    pub fn with_values(name: String, values: Vec<String>) -> NominalAttribute {
        let label_to_index = values
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        NominalAttribute {
            name,
            values,
            label_to_index,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the index of `value`, registering it at the end of the domain
    /// when it has not been seen before.
    pub fn intern_value(&mut self, value: &str) -> usize {
        if let Some(&index) = self.label_to_index.get(value) {
            return index;
        }
        let index = self.values.len();
        self.values.push(value.to_string());
        self.label_to_index.insert(value.to_string(), index);
        index
    }

    pub fn index_of_value(&self, value: &str) -> Option<usize> {
        self.label_to_index.get(value).copied()
    }

    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn num_values(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_values_builds_index() {
        let att = NominalAttribute::with_values(
            "weather".into(),
            vec!["sunny".into(), "rainy".into()],
        );
        assert_eq!(att.index_of_value("sunny"), Some(0));
        assert_eq!(att.index_of_value("rainy"), Some(1));
        assert_eq!(att.index_of_value("snowy"), None);
        assert_eq!(att.value(1), Some("rainy"));
        assert_eq!(att.num_values(), 2);
    }

    #[test]
    fn intern_value_keeps_first_appearance_order() {
        let mut att = NominalAttribute::new("play".into());
        assert_eq!(att.intern_value("yes"), 0);
        assert_eq!(att.intern_value("no"), 1);
        assert_eq!(att.intern_value("yes"), 0);
        assert_eq!(att.values, vec!["yes".to_string(), "no".to_string()]);
    }
}
