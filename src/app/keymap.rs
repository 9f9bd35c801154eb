use crate::form::ComponentKind;

use super::focus::FocusTarget;

const NAVIGATION: &str = "Tab/↓ next • Shift+Tab/↑ previous";
const GLOBAL: &str = "Ctrl+S submit • Ctrl+Q quit";

/// Key hints for whatever currently holds focus.
pub(crate) fn help_text(target: FocusTarget, component: Option<ComponentKind>) -> String {
    let local = match (target, component) {
        (FocusTarget::CompanySelector, _) => "Enter choose company",
        (FocusTarget::Submit, _) => "Enter submit",
        (FocusTarget::Field(_), Some(ComponentKind::Select)) => {
            "Enter open options • ←/→ cycle options"
        }
        (FocusTarget::Field(_), Some(ComponentKind::Textarea)) => {
            "type to edit • Enter newline • Del clear"
        }
        (FocusTarget::Field(_), _) => "type to edit • Backspace erase • Del clear",
    };
    format!("{local} • {NAVIGATION} • {GLOBAL}")
}
