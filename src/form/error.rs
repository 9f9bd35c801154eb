use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("configuration has already been loaded")]
    ConfigAlreadyLoaded,
    #[error("no company selected")]
    NoCompanySelected,
    #[error("field '{label}' is not part of the active form")]
    UnknownField { label: String },
}
