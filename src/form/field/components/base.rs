use crossterm::event::KeyEvent;

use crate::form::field::Control;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    TextInput,
    Textarea,
    Select,
}

/// Per-variant behaviour of a bound control. Components are stateless: the
/// value lives in the form state and `handle_key` returns its replacement.
pub trait FieldComponent: std::fmt::Debug + Sync {
    fn kind(&self) -> ComponentKind;

    fn display_value(&self, control: &Control) -> String;

    /// New value for the control after `key`, or `None` when the key is not
    /// an edit for this component.
    fn handle_key(&self, control: &Control, key: &KeyEvent) -> Option<String> {
        let _ = (control, key);
        None
    }

    /// Whether Enter is an edit (newline) rather than an activation.
    fn consumes_enter(&self) -> bool {
        false
    }

    /// Choices offered in a popup, if the component is a picker.
    fn popup_options(&self, control: &Control) -> Option<Vec<String>> {
        let _ = control;
        None
    }
}
