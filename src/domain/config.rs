use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::kind::FieldKind;

/// Errors raised while decoding a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to decode configuration document: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to parse {format} document: {message}")]
    Syntax { format: String, message: String },
    #[error("unsupported configuration format '{0}'")]
    UnsupportedFormat(String),
}

/// Root of a configuration document: `{ "companies": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    pub companies: Vec<CompanyConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyConfig {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

/// One field definition. `label` doubles as the display text and the key the
/// entered value is stored under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub label: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl FormConfig {
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(contents).map_err(ConfigError::Decode)
    }

    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(ConfigError::Decode)
    }

    pub fn company_names(&self) -> Vec<String> {
        self.companies
            .iter()
            .map(|company| company.name.clone())
            .collect()
    }

    /// First company whose name matches exactly. Duplicate names resolve to the
    /// earliest entry.
    pub fn find_company(&self, name: &str) -> Option<&CompanyConfig> {
        self.companies.iter().find(|company| company.name == name)
    }
}

impl FieldConfig {
    pub fn new(label: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            type_tag: type_tag.into(),
            required: false,
            options: Vec::new(),
            pattern: None,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn kind(&self) -> FieldKind {
        FieldKind::from_config(self)
    }

    /// Pattern constraint, only meaningful for single-line inputs.
    pub fn effective_pattern(&self) -> Option<&str> {
        match self.kind() {
            FieldKind::Text | FieldKind::Input { .. } => self.pattern.as_deref(),
            FieldKind::Textarea | FieldKind::Select { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_document_with_optional_keys_missing() {
        let config = FormConfig::from_value(json!({
            "companies": [{
                "name": "Acme",
                "fields": [
                    {"label": "Email", "type": "email", "required": true},
                    {"label": "Role", "type": "select", "options": ["Eng", "Sales"]}
                ]
            }]
        }))
        .expect("config");
        let acme = &config.companies[0];
        assert_eq!(acme.fields.len(), 2);
        assert!(acme.fields[0].required);
        assert!(acme.fields[0].options.is_empty());
        assert!(!acme.fields[1].required, "required defaults to false");
        assert_eq!(acme.fields[1].options, vec!["Eng", "Sales"]);
    }

    #[test]
    fn rejects_document_without_companies() {
        let err = FormConfig::from_json_str(r#"{"forms": []}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Decode(_)));
    }

    #[test]
    fn duplicate_names_resolve_to_first_entry() {
        let config = FormConfig::from_value(json!({
            "companies": [
                {"name": "Twin", "fields": [{"label": "A", "type": "text"}]},
                {"name": "Twin", "fields": [{"label": "B", "type": "text"}]}
            ]
        }))
        .expect("config");
        let found = config.find_company("Twin").expect("company");
        assert_eq!(found.fields[0].label, "A");
    }

    #[test]
    fn pattern_ignored_for_select_and_textarea() {
        let select = FieldConfig::new("Role", "select")
            .with_options(["Eng"])
            .with_pattern("E.*");
        let notes = FieldConfig::new("Notes", "textarea").with_pattern("x");
        let email = FieldConfig::new("Email", "email").with_pattern(".+@.+");
        assert_eq!(select.effective_pattern(), None);
        assert_eq!(notes.effective_pattern(), None);
        assert_eq!(email.effective_pattern(), Some(".+@.+"));
    }
}
