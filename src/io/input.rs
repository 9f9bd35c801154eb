use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use super::DocumentFormat;
use crate::domain::{ConfigError, FormConfig};

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value, ConfigError> {
    match format {
        DocumentFormat::Json => serde_json::from_str::<Value>(contents).map_err(|err| {
            ConfigError::Syntax {
                format: format.to_string(),
                message: err.to_string(),
            }
        }),
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => serde_yaml::from_str::<Value>(contents).map_err(|err| {
            ConfigError::Syntax {
                format: format.to_string(),
                message: err.to_string(),
            }
        }),
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => {
            let parsed = contents
                .parse::<toml::Table>()
                .map_err(|err| ConfigError::Syntax {
                    format: format.to_string(),
                    message: err.to_string(),
                })?;
            serde_json::to_value(parsed).map_err(ConfigError::Decode)
        }
    }
}

/// Decode a configuration document held in memory.
pub fn load_config_str(contents: &str, format: DocumentFormat) -> Result<FormConfig, ConfigError> {
    let value = parse_document_str(contents, format)?;
    let config = FormConfig::from_value(value)?;
    debug!(
        companies = config.companies.len(),
        %format,
        "decoded form configuration"
    );
    Ok(config)
}

/// Read and decode a configuration file. The format follows the file extension
/// and falls back to JSON.
pub fn load_config_path(path: impl AsRef<Path>) -> Result<FormConfig> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path).unwrap_or_default();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration {}", path.display()))?;
    load_config_str(&contents, format)
        .with_context(|| format!("invalid configuration {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    const ACME: &str = r#"{
        "companies": [{
            "name": "Acme",
            "fields": [{"label": "Email", "type": "email", "required": true}]
        }]
    }"#;

    #[test]
    fn loads_json_string() {
        let config = load_config_str(ACME, DocumentFormat::Json).expect("config");
        assert_eq!(config.company_names(), vec!["Acme".to_string()]);
    }

    #[test]
    fn malformed_json_is_a_syntax_error() {
        let err = load_config_str("{companies:", DocumentFormat::Json).unwrap_err();
        assert!(matches!(err, ConfigError::Syntax { .. }));
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!(
            "dynaform-config-{}.json",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        fs::write(&path, ACME).unwrap();
        let config = load_config_path(&path).expect("config");
        assert_eq!(config.companies[0].fields[0].label, "Email");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config_path("/definitely/not/here.json").unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn loads_yaml_string() {
        let yaml = "companies:\n  - name: Acme\n    fields:\n      - label: Notes\n        type: textarea\n";
        let config = load_config_str(yaml, DocumentFormat::Yaml).expect("config");
        assert_eq!(config.companies[0].fields[0].type_tag, "textarea");
    }
}
