use crate::core::instance_header::InstanceHeader;

/// A single row seen through its header.
///
/// Values are indices into the corresponding attribute's domain; `None`
/// means the value was not supplied (e.g. the class of an unlabeled row).
pub trait Instance {
    fn value_at_index(&self, index: usize) -> Option<usize>;

    fn class_index(&self) -> usize {
        self.header().class_index()
    }

    fn class_value(&self) -> Option<usize> {
        self.value_at_index(self.class_index())
    }

    fn number_of_attributes(&self) -> usize {
        self.header().number_of_attributes()
    }

    fn number_of_classes(&self) -> usize {
        self.header().number_of_classes()
    }

    fn header(&self) -> &InstanceHeader;
}
