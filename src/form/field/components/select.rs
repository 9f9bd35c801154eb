use crossterm::event::{KeyCode, KeyEvent};

use super::{ComponentKind, FieldComponent};
use crate::form::field::Control;

/// Choice constrained to the configured options. Nothing is selected until the
/// user picks a value.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectComponent;

impl FieldComponent for SelectComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Select
    }

    fn display_value(&self, control: &Control) -> String {
        if control.value.is_empty() {
            "<none>".to_string()
        } else {
            control.value.clone()
        }
    }

    fn handle_key(&self, control: &Control, key: &KeyEvent) -> Option<String> {
        let options = control.options();
        if options.is_empty() {
            return None;
        }
        let len = options.len();
        let next = match (key.code, control.selected_option()) {
            (KeyCode::Left, None) => len - 1,
            (KeyCode::Left, Some(0)) => len - 1,
            (KeyCode::Left, Some(idx)) => idx - 1,
            (KeyCode::Right, None) => 0,
            (KeyCode::Right, Some(idx)) => (idx + 1) % len,
            _ => return None,
        };
        Some(options[next].clone())
    }

    fn popup_options(&self, control: &Control) -> Option<Vec<String>> {
        let options = control.options();
        (!options.is_empty()).then(|| options.to_vec())
    }
}
