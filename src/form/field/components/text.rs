use crossterm::event::KeyEvent;

use super::helpers::handle_text_edit;
use super::{ComponentKind, FieldComponent};
use crate::form::field::Control;

/// Single-line input for `text` and every other HTML input type.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextInputComponent;

impl FieldComponent for TextInputComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::TextInput
    }

    fn display_value(&self, control: &Control) -> String {
        if control.kind.input_type() == "password" {
            "•".repeat(control.value.chars().count())
        } else {
            control.value.clone()
        }
    }

    fn handle_key(&self, control: &Control, key: &KeyEvent) -> Option<String> {
        handle_text_edit(&control.value, key, false)
    }
}
