use crate::classifiers::ClassifierError;
use crate::core::attributes::NominalAttribute;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use std::sync::Arc;

/// A fully populated categorical table with one designated class attribute.
///
/// Rows hold one value index per header attribute, class included.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledTable {
    header: Arc<InstanceHeader>,
    rows: Vec<Vec<usize>>,
}

impl LabeledTable {
    pub fn new(header: Arc<InstanceHeader>, rows: Vec<Vec<usize>>) -> Result<Self, ClassifierError> {
        let width = header.number_of_attributes();
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ClassifierError::RowLengthMismatch {
                    row: row_index,
                    expected: width,
                    got: row.len(),
                });
            }
            for (attribute, &value) in header.attributes.iter().zip(row) {
                if value >= attribute.num_values() {
                    return Err(ClassifierError::ValueOutOfDomain {
                        attribute: attribute.name.clone(),
                        index: value,
                        domain_size: attribute.num_values(),
                    });
                }
            }
        }
        Ok(Self { header, rows })
    }

    /// Builds a table from string records, deriving every attribute domain
    /// from the values observed in its column (first appearance first).
    pub fn from_records<S, R>(
        relation_name: &str,
        columns: &[S],
        records: &[R],
        target: &str,
    ) -> Result<Self, ClassifierError>
    where
        S: AsRef<str>,
        R: AsRef<[S]>,
    {
        if records.is_empty() {
            return Err(ClassifierError::EmptyDataset);
        }
        let mut attributes: Vec<NominalAttribute> = columns
            .iter()
            .map(|c| NominalAttribute::new(c.as_ref().to_string()))
            .collect();
        let class_index = attributes
            .iter()
            .position(|a| a.name() == target)
            .ok_or_else(|| ClassifierError::UnknownAttribute(target.to_string()))?;

        let mut rows = Vec::with_capacity(records.len());
        for (row_index, record) in records.iter().enumerate() {
            let record = record.as_ref();
            if record.len() != attributes.len() {
                return Err(ClassifierError::RowLengthMismatch {
                    row: row_index,
                    expected: attributes.len(),
                    got: record.len(),
                });
            }
            let row = attributes
                .iter_mut()
                .zip(record)
                .map(|(attribute, value)| attribute.intern_value(value.as_ref()))
                .collect();
            rows.push(row);
        }

        let header = InstanceHeader::new(relation_name.to_string(), attributes, class_index)?;
        Ok(Self {
            header: Arc::new(header),
            rows,
        })
    }

    /// Joins input rows `x` with labels `y`, placing each label at the
    /// header's class index.
    pub fn from_xy(
        header: Arc<InstanceHeader>,
        x: &[Vec<usize>],
        y: &[usize],
    ) -> Result<Self, ClassifierError> {
        if x.len() != y.len() {
            return Err(ClassifierError::LengthMismatch {
                inputs: x.len(),
                labels: y.len(),
            });
        }
        let class_index = header.class_index();
        let rows = x
            .iter()
            .zip(y)
            .map(|(inputs, &label)| {
                let mut row = Vec::with_capacity(inputs.len() + 1);
                row.extend_from_slice(&inputs[..class_index.min(inputs.len())]);
                row.push(label);
                row.extend_from_slice(&inputs[class_index.min(inputs.len())..]);
                row
            })
            .collect();
        Self::new(header, rows)
    }

    pub fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[usize]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn class_labels(&self) -> Vec<usize> {
        let class_index = self.header.class_index();
        self.rows.iter().map(|r| r[class_index]).collect()
    }

    pub fn instance(&self, index: usize) -> Option<DenseInstance> {
        self.rows.get(index).map(|row| DenseInstance {
            header: Arc::clone(&self.header),
            values: row.iter().copied().map(Some).collect(),
        })
    }

    pub fn instances(&self) -> Vec<DenseInstance> {
        (0..self.rows.len()).filter_map(|i| self.instance(i)).collect()
    }

    /// New table over the same header holding the rows at `indices`, in order.
    /// Indices may repeat.
    pub fn select_rows(&self, indices: &[usize]) -> Result<Self, ClassifierError> {
        let mut rows = Vec::with_capacity(indices.len());
        for &i in indices {
            let row = self.rows.get(i).ok_or_else(|| {
                ClassifierError::InvalidParameter(format!(
                    "row index {i} out of range for table of {} rows",
                    self.rows.len()
                ))
            })?;
            rows.push(row.clone());
        }
        Ok(Self {
            header: Arc::clone(&self.header),
            rows,
        })
    }

    /// View over every row and every non-class attribute.
    pub fn view(&self) -> TableView<'_> {
        TableView {
            table: self,
            rows: (0..self.rows.len()).collect(),
            attributes: self.header.input_attribute_indices(),
        }
    }
}

/// A row subset of a [`LabeledTable`] together with the attributes still
/// available for splitting.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    table: &'a LabeledTable,
    rows: Vec<usize>,
    attributes: Vec<usize>,
}

impl<'a> TableView<'a> {
    pub fn header(&self) -> &'a InstanceHeader {
        &self.table.header
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Candidate split attributes remaining in this view, in header order.
    pub fn attributes(&self) -> &[usize] {
        &self.attributes
    }

    pub fn column(&self, attribute: usize) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().map(move |&r| self.table.rows[r][attribute])
    }

    /// Raw occurrence count of each domain value of `attribute`.
    pub fn value_counts(&self, attribute: usize) -> Vec<f64> {
        let domain = self.header().attributes[attribute].num_values();
        let mut counts = vec![0.0; domain];
        for v in self.column(attribute) {
            counts[v] += 1.0;
        }
        counts
    }

    /// Relative frequency of each domain value of `attribute`.
    pub fn normalized_value_counts(&self, attribute: usize) -> Result<Vec<f64>, ClassifierError> {
        if self.is_empty() {
            return Err(ClassifierError::EmptySubset);
        }
        let total = self.len() as f64;
        Ok(self
            .value_counts(attribute)
            .into_iter()
            .map(|c| c / total)
            .collect())
    }

    pub fn class_counts(&self) -> Vec<f64> {
        self.value_counts(self.header().class_index())
    }

    /// Distinct values of `attribute` present in this view, in domain order.
    pub fn unique_values(&self, attribute: usize) -> Vec<usize> {
        self.value_counts(attribute)
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0.0)
            .map(|(v, _)| v)
            .collect()
    }

    pub fn is_pure(&self) -> bool {
        self.unique_values(self.header().class_index()).len() == 1
    }

    /// Class counts of the rows holding each domain value of `attribute`.
    /// Unobserved values get an all-zero row.
    pub fn class_counts_by_value(&self, attribute: usize) -> Vec<Vec<f64>> {
        let header = self.header();
        let class_index = header.class_index();
        let mut counts =
            vec![vec![0.0; header.number_of_classes()]; header.attributes[attribute].num_values()];
        for &r in &self.rows {
            let row = &self.table.rows[r];
            counts[row[attribute]][row[class_index]] += 1.0;
        }
        counts
    }

    /// Rows whose `attribute` equals `value`.
    pub fn filter_value(&self, attribute: usize, value: usize) -> TableView<'a> {
        TableView {
            table: self.table,
            rows: self
                .rows
                .iter()
                .copied()
                .filter(|&r| self.table.rows[r][attribute] == value)
                .collect(),
            attributes: self.attributes.clone(),
        }
    }

    pub fn drop_attribute(&self, attribute: usize) -> TableView<'a> {
        TableView {
            table: self.table,
            rows: self.rows.clone(),
            attributes: self
                .attributes
                .iter()
                .copied()
                .filter(|&a| a != attribute)
                .collect(),
        }
    }

    /// One sub-view per value of `attribute` observed here, with `attribute`
    /// removed from each so it cannot be split on again below.
    pub fn partition(&self, attribute: usize) -> Vec<(usize, TableView<'a>)> {
        let dropped = self.drop_attribute(attribute);
        self.unique_values(attribute)
            .into_iter()
            .map(|value| (value, dropped.filter_value(attribute, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::table_weather;

    #[test]
    fn from_records_derives_domains() {
        let table = table_weather();
        let header = table.header();
        assert_eq!(table.len(), 6);
        assert_eq!(header.class_index(), 2);
        assert_eq!(
            header.attributes[0].values,
            vec!["sunny".to_string(), "rainy".to_string(), "overcast".to_string()]
        );
        assert_eq!(table.row(1), Some(&[0, 1, 0][..]));
    }

    #[test]
    fn from_records_validates_input() {
        let empty: [[&str; 2]; 0] = [];
        let err = LabeledTable::from_records("r", &["a", "b"], &empty, "b").unwrap_err();
        assert!(matches!(err, ClassifierError::EmptyDataset));

        let err = LabeledTable::from_records("r", &["a", "b"], &[["x", "y"]], "c").unwrap_err();
        assert!(matches!(err, ClassifierError::UnknownAttribute(_)));

        let records = vec![vec!["x", "y"], vec!["x"]];
        let err = LabeledTable::from_records("r", &["a", "b"], &records, "b").unwrap_err();
        assert!(matches!(err, ClassifierError::RowLengthMismatch { row: 1, .. }));
    }

    #[test]
    fn new_rejects_values_outside_domain() {
        let table = table_weather();
        let err = LabeledTable::new(Arc::clone(table.header()), vec![vec![0, 0, 5]]).unwrap_err();
        assert!(matches!(err, ClassifierError::ValueOutOfDomain { index: 5, .. }));
    }

    #[test]
    fn view_counts_and_uniques() {
        let table = table_weather();
        let view = table.view();
        assert_eq!(view.attributes(), &[0, 1]);
        assert_eq!(view.class_counts(), vec![3.0, 3.0]);
        assert_eq!(view.value_counts(0), vec![2.0, 2.0, 2.0]);
        assert_eq!(view.unique_values(1), vec![0, 1]);
        let probs = view.normalized_value_counts(2).unwrap();
        assert!((probs[0] - 0.5).abs() < 1e-12);
        assert!(!view.is_pure());
    }

    #[test]
    fn partition_drops_attribute_and_keeps_rows() {
        let table = table_weather();
        let parts = table.view().partition(0);
        assert_eq!(parts.len(), 3);
        let total: usize = parts.iter().map(|(_, v)| v.len()).sum();
        assert_eq!(total, table.len());
        for (value, part) in &parts {
            assert_eq!(part.attributes(), &[1]);
            assert!(part.column(0).all(|v| v == *value));
        }
    }

    #[test]
    fn partition_only_yields_observed_values() {
        let table = table_weather();
        let sunny = table.view().filter_value(0, 0);
        let parts = sunny.partition(0);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].0, 0);
        assert_eq!(sunny.class_counts_by_value(1)[0], vec![1.0, 0.0]);
    }

    #[test]
    fn from_xy_inserts_labels_at_class_index() {
        let table = table_weather();
        let x = vec![vec![0, 1], vec![2, 0]];
        let rebuilt = LabeledTable::from_xy(Arc::clone(table.header()), &x, &[0, 1]).unwrap();
        assert_eq!(rebuilt.row(0), Some(&[0, 1, 0][..]));
        assert_eq!(rebuilt.class_labels(), vec![0, 1]);

        let err = LabeledTable::from_xy(Arc::clone(table.header()), &x, &[0]).unwrap_err();
        assert!(matches!(err, ClassifierError::LengthMismatch { inputs: 2, labels: 1 }));

        let short = vec![vec![0]];
        let err = LabeledTable::from_xy(Arc::clone(table.header()), &short, &[0]).unwrap_err();
        assert!(matches!(err, ClassifierError::RowLengthMismatch { .. }));
    }

    #[test]
    fn select_rows_allows_repeats() {
        let table = table_weather();
        let picked = table.select_rows(&[0, 0, 5]).unwrap();
        assert_eq!(picked.len(), 3);
        assert_eq!(picked.row(0), picked.row(1));
        assert!(table.select_rows(&[6]).is_err());
    }

    #[test]
    fn normalized_counts_on_empty_view_fail() {
        let table = table_weather();
        let view = table.view().filter_value(0, 0).filter_value(1, 1).filter_value(0, 1);
        assert!(view.is_empty());
        assert!(matches!(
            view.normalized_value_counts(2),
            Err(ClassifierError::EmptySubset)
        ));
    }
}
