mod base;
mod helpers;
mod select;
mod text;
mod textarea;

pub use base::{ComponentKind, FieldComponent};
pub use select::SelectComponent;
pub use text::TextInputComponent;
pub use textarea::TextareaComponent;

use crate::domain::FieldKind;

static TEXT_INPUT: TextInputComponent = TextInputComponent;
static TEXTAREA: TextareaComponent = TextareaComponent;
static SELECT: SelectComponent = SelectComponent;

pub(crate) fn component_for(kind: &FieldKind) -> &'static dyn FieldComponent {
    match kind {
        FieldKind::Text | FieldKind::Input { .. } => &TEXT_INPUT,
        FieldKind::Textarea => &TEXTAREA,
        FieldKind::Select { .. } => &SELECT,
    }
}
