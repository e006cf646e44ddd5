//! Data model for parsed documentation records.

/// One `@param` entry, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: String,
    pub description: String,
}

/// The `@return` entry of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnValue {
    pub ty: String,
    pub description: String,
}

/// A single documented method, finalized by a record terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRecord {
    pub name: String,
    pub summary: String,
    pub parameters: Vec<Parameter>,
    pub return_value: Option<ReturnValue>,
    /// Display path of the file the record came from
    pub source_file: String,
}

impl MethodRecord {
    /// Whether the record renders a parameter/return table.
    pub fn has_table(&self) -> bool {
        !self.parameters.is_empty() || self.return_value.is_some()
    }
}

/// All records collected over one run, across every input file.
#[derive(Debug, Default)]
pub struct DocumentSet {
    records: Vec<MethodRecord>,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = MethodRecord>) {
        self.records.extend(records);
    }

    /// Sort by name, case-sensitive. Stable, so equal names keep parse order.
    pub fn sort_by_name(&mut self) {
        self.records.sort_by(|a, b| a.name.cmp(&b.name));
    }

    pub fn records(&self) -> &[MethodRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
