use crossterm::event::KeyEvent;

use super::helpers::handle_text_edit;
use super::{ComponentKind, FieldComponent};
use crate::form::field::Control;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextareaComponent;

impl FieldComponent for TextareaComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Textarea
    }

    fn display_value(&self, control: &Control) -> String {
        control.value.clone()
    }

    fn handle_key(&self, control: &Control, key: &KeyEvent) -> Option<String> {
        handle_text_edit(&control.value, key, true)
    }

    fn consumes_enter(&self) -> bool {
        true
    }
}
