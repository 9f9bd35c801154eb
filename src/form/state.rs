use indexmap::IndexMap;

use crate::domain::FieldConfig;

use super::error::FormError;

/// Entered values keyed by field label, in the order they were first set.
pub type FormValues = IndexMap<String, String>;

#[derive(Debug, Clone, Default)]
pub struct FormState {
    selected_company: Option<String>,
    active_fields: Vec<FieldConfig>,
    values: FormValues,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_company(&self) -> Option<&str> {
        self.selected_company.as_deref()
    }

    pub fn active_fields(&self) -> &[FieldConfig] {
        &self.active_fields
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Current value for `label`, or the empty string when unset.
    pub fn value(&self, label: &str) -> &str {
        self.values.get(label).map(String::as_str).unwrap_or("")
    }

    pub fn has_field(&self, label: &str) -> bool {
        self.active_fields.iter().any(|field| field.label == label)
    }

    pub fn is_dirty(&self) -> bool {
        !self.values.is_empty()
    }

    /// Replace the active field set wholesale and drop every entered value.
    pub(crate) fn reset(&mut self, company: Option<String>, fields: Vec<FieldConfig>) {
        self.selected_company = company;
        self.active_fields = fields;
        self.values.clear();
    }

    /// Overwrite exactly one key. Labels outside the active field set are refused.
    pub(crate) fn set_value(
        &mut self,
        label: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        if !self.has_field(label) {
            return Err(FormError::UnknownField {
                label: label.to_string(),
            });
        }
        self.values.insert(label.to_string(), value.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(labels: &[&str]) -> FormState {
        let mut state = FormState::new();
        state.reset(
            Some("Acme".into()),
            labels
                .iter()
                .map(|label| FieldConfig::new(*label, "text"))
                .collect(),
        );
        state
    }

    #[test]
    fn set_value_touches_only_one_key() {
        let mut state = state_with(&["A", "B"]);
        state.set_value("A", "1").unwrap();
        state.set_value("B", "2").unwrap();
        state.set_value("A", "3").unwrap();
        assert_eq!(state.value("A"), "3");
        assert_eq!(state.value("B"), "2");
        assert_eq!(state.values().len(), 2);
    }

    #[test]
    fn unknown_labels_are_refused() {
        let mut state = state_with(&["A"]);
        let err = state.set_value("Z", "1").unwrap_err();
        assert_eq!(
            err,
            FormError::UnknownField {
                label: "Z".into()
            }
        );
        assert!(state.values().is_empty());
    }

    #[test]
    fn reset_clears_values() {
        let mut state = state_with(&["A"]);
        state.set_value("A", "1").unwrap();
        state.reset(Some("Other".into()), Vec::new());
        assert!(state.values().is_empty());
        assert_eq!(state.value("A"), "");
        assert_eq!(state.selected_company(), Some("Other"));
    }
}
