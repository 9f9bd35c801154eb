mod config;
mod kind;

pub use config::{CompanyConfig, ConfigError, FieldConfig, FormConfig};
pub use kind::{FieldKind, KNOWN_INPUT_TYPES};
