#![deny(rust_2018_idioms)]

mod app;
mod domain;
mod form;
mod io;
mod presentation;

pub use app::{DynamicForm, UiOptions};
pub use domain::{
    CompanyConfig, ConfigError, FieldConfig, FieldKind, FormConfig, KNOWN_INPUT_TYPES,
};
pub use form::{
    ComponentKind, Control, FieldComponent, FieldIssue, FormCommand, FormController, FormError,
    FormPhase, FormState, FormValues, SubmissionHistory, SubmissionRecord, check_control,
    check_controls, render_control, render_controls,
};
pub use io::{
    DocumentFormat, OutputDestination, OutputOptions, emit_history, load_config_path,
    load_config_str, parse_document_str,
};

pub mod prelude {
    pub use super::{DynamicForm, FormConfig, FormController, UiOptions};
}
