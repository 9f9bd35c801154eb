mod dynamic_form;
pub(crate) mod focus;
pub(crate) mod input;
pub(crate) mod keymap;
mod options;
mod popup;
mod runtime;
mod status;
mod terminal;

pub use dynamic_form::DynamicForm;
pub use options::UiOptions;
