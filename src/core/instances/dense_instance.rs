use crate::classifiers::ClassifierError;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::instance::Instance;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct DenseInstance {
    pub header: Arc<InstanceHeader>,
    pub values: Vec<Option<usize>>,
}

impl DenseInstance {
    pub fn new(
        header: Arc<InstanceHeader>,
        values: Vec<Option<usize>>,
    ) -> Result<DenseInstance, ClassifierError> {
        if values.len() != header.number_of_attributes() {
            return Err(ClassifierError::RowLengthMismatch {
                row: 0,
                expected: header.number_of_attributes(),
                got: values.len(),
            });
        }
        for (index, value) in values.iter().enumerate() {
            if let Some(v) = *value {
                let attribute = &header.attributes[index];
                if v >= attribute.num_values() {
                    return Err(ClassifierError::ValueOutOfDomain {
                        attribute: attribute.name.clone(),
                        index: v,
                        domain_size: attribute.num_values(),
                    });
                }
            }
        }
        Ok(DenseInstance { header, values })
    }

    /// Builds an instance from `attribute name -> value label` pairs.
    ///
    /// Attributes not mentioned stay unset, so the class may be omitted for
    /// rows that are only going to be predicted.
    pub fn from_labels<I, K, V>(header: Arc<InstanceHeader>, pairs: I) -> Result<Self, ClassifierError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut values = vec![None; header.number_of_attributes()];
        for (name, label) in pairs {
            let (name, label) = (name.as_ref(), label.as_ref());
            let index = header
                .index_of_attribute(name)
                .ok_or_else(|| ClassifierError::UnknownAttribute(name.to_string()))?;
            let value = header.attributes[index].index_of_value(label).ok_or_else(|| {
                ClassifierError::UnknownValue {
                    attribute: name.to_string(),
                    value: label.to_string(),
                }
            })?;
            values[index] = Some(value);
        }
        Ok(DenseInstance { header, values })
    }
}

impl Instance for DenseInstance {
    fn value_at_index(&self, index: usize) -> Option<usize> {
        self.values.get(index).copied().flatten()
    }

    fn header(&self) -> &InstanceHeader {
        &self.header
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::header_weather;

    #[test]
    fn from_labels_resolves_names_and_values() {
        let header = header_weather();
        let inst = DenseInstance::from_labels(
            Arc::clone(&header),
            [("weather", "rainy"), ("play", "no")],
        )
        .unwrap();
        assert_eq!(inst.value_at_index(0), Some(1));
        assert_eq!(inst.value_at_index(1), None);
        assert_eq!(inst.class_value(), Some(1));
        assert_eq!(inst.number_of_classes(), 2);
    }

    #[test]
    fn from_labels_rejects_unknown_names() {
        let header = header_weather();
        let err = DenseInstance::from_labels(Arc::clone(&header), [("humidity", "high")])
            .unwrap_err();
        assert!(matches!(err, ClassifierError::UnknownAttribute(ref n) if n == "humidity"));

        let err = DenseInstance::from_labels(header, [("weather", "foggy")]).unwrap_err();
        assert!(matches!(err, ClassifierError::UnknownValue { .. }));
    }

    #[test]
    fn new_checks_length_and_domain() {
        let header = header_weather();
        let err = DenseInstance::new(Arc::clone(&header), vec![Some(0)]).unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::RowLengthMismatch { expected: 3, got: 1, .. }
        ));

        let err = DenseInstance::new(header, vec![Some(7), None, None]).unwrap_err();
        assert!(matches!(err, ClassifierError::ValueOutOfDomain { index: 7, .. }));
    }
}
