pub mod attributes;
pub mod instance_header;
pub mod instances;
pub mod table;
