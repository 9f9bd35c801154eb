use serde::Serialize;

use super::state::FormValues;

/// Values captured at the moment of a submission. Owns its own copy, so later
/// edits to the form never reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubmissionRecord {
    values: FormValues,
}

impl SubmissionRecord {
    pub fn snapshot(values: &FormValues) -> Self {
        Self {
            values: values.clone(),
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.values.get(label).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Two-space indented JSON object, keys in entry order.
    pub fn to_pretty_string(&self) -> String {
        serde_json::to_string_pretty(&self.values).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Append-only list of records in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubmissionHistory {
    records: Vec<SubmissionRecord>,
}

impl SubmissionHistory {
    pub(crate) fn push(&mut self, record: SubmissionRecord) -> &SubmissionRecord {
        self.records.push(record);
        let last = self.records.len() - 1;
        &self.records[last]
    }

    pub fn records(&self) -> &[SubmissionRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&SubmissionRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubmissionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
