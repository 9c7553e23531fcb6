use crate::classifiers::ClassifierError;
use crate::classifiers::distribution::ClassDistribution;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use std::sync::Arc;

/// A fitted model producing class distributions.
pub trait Classifier {
    /// Schema the model was trained on.
    fn header(&self) -> &Arc<InstanceHeader>;

    fn votes_for_instance(&self, instance: &dyn Instance) -> Result<ClassDistribution, ClassifierError>;

    /// Predicts from `attribute name -> value label` pairs.
    fn predict_one<I, K, V>(&self, values: I) -> Result<ClassDistribution, ClassifierError>
    where
        Self: Sized,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let instance = DenseInstance::from_labels(Arc::clone(self.header()), values)?;
        self.votes_for_instance(&instance)
    }
}

/// Rejects instances whose header is not the model's: value indices are
/// only meaningful against the domains they were interned with.
pub(crate) fn check_instance_header(
    header: &InstanceHeader,
    instance: &dyn Instance,
) -> Result<(), ClassifierError> {
    let other = instance.header();
    if std::ptr::eq(header, other) || header == other {
        return Ok(());
    }
    Err(ClassifierError::HeaderMismatch {
        expected: header.relation_name().to_string(),
        got: other.relation_name().to_string(),
    })
}
