mod format;
mod input;
mod output;

pub use format::DocumentFormat;
pub use input::{load_config_path, load_config_str, parse_document_str};
pub use output::{OutputDestination, OutputOptions, emit_history};
