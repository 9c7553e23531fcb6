use crate::classifiers::ClassifierError;
use crate::core::attributes::NominalAttribute;
use serde::{Deserialize, Serialize};

/// Schema shared by a table, its instances and every model fitted on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceHeader {
    pub relation_name: String,
    pub attributes: Vec<NominalAttribute>,
    pub class_index: usize,
}

impl InstanceHeader {
    pub fn new(
        relation_name: String,
        attributes: Vec<NominalAttribute>,
        class_index: usize,
    ) -> Result<InstanceHeader, ClassifierError> {
        if class_index >= attributes.len() {
            return Err(ClassifierError::InvalidParameter(format!(
                "class index {class_index} out of range for {} attributes",
                attributes.len()
            )));
        }
        Ok(InstanceHeader {
            relation_name,
            attributes,
            class_index,
        })
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&NominalAttribute> {
        self.attributes.get(index)
    }

    pub fn index_of_attribute(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|attr| attr.name() == name)
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn class_attribute(&self) -> &NominalAttribute {
        &self.attributes[self.class_index]
    }

    pub fn number_of_classes(&self) -> usize {
        self.class_attribute().num_values()
    }

    /// Indices of every attribute except the class, in header order.
    pub fn input_attribute_indices(&self) -> Vec<usize> {
        (0..self.attributes.len())
            .filter(|&i| i != self.class_index)
            .collect()
    }

    pub fn attribute_name(&self, index: usize) -> &str {
        self.attributes
            .get(index)
            .map(NominalAttribute::name)
            .unwrap_or("?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::header_weather;

    #[test]
    fn rejects_class_index_out_of_range() {
        let att = NominalAttribute::with_values("a".into(), vec!["x".into()]);
        let err = InstanceHeader::new("r".into(), vec![att], 1).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidParameter(_)));
    }

    #[test]
    fn input_attributes_skip_class() {
        let header = header_weather();
        assert_eq!(header.class_attribute().name(), "play");
        assert_eq!(header.number_of_classes(), 2);
        assert_eq!(header.input_attribute_indices(), vec![0, 1]);
        assert_eq!(header.index_of_attribute("windy"), Some(1));
        assert_eq!(header.index_of_attribute("humidity"), None);
    }
}
