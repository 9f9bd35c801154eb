pub mod components;

use crate::domain::{FieldConfig, FieldKind};

use self::components::{FieldComponent, component_for};
use super::state::FormValues;

/// A field definition bound to its current value, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub label: String,
    pub kind: FieldKind,
    pub value: String,
    pub required: bool,
    pub pattern: Option<String>,
}

impl Control {
    pub fn component(&self) -> &'static dyn FieldComponent {
        component_for(&self.kind)
    }

    pub fn options(&self) -> &[String] {
        match &self.kind {
            FieldKind::Select { options } => options,
            _ => &[],
        }
    }

    /// Position of the current value among the select options, if any.
    pub fn selected_option(&self) -> Option<usize> {
        self.options().iter().position(|option| *option == self.value)
    }

    pub fn is_recognized(&self) -> bool {
        self.kind.is_recognized()
    }

    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }
}

/// Bind one field definition to the entered values. Unset values read as "".
pub fn render_control(field: &FieldConfig, values: &FormValues) -> Control {
    Control {
        label: field.label.clone(),
        kind: field.kind(),
        value: values.get(&field.label).cloned().unwrap_or_default(),
        required: field.required,
        pattern: field.effective_pattern().map(str::to_string),
    }
}

pub fn render_controls(fields: &[FieldConfig], values: &FormValues) -> Vec<Control> {
    fields
        .iter()
        .map(|field| render_control(field, values))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_values_default_to_empty() {
        let field = FieldConfig::new("Notes", "textarea");
        let control = render_control(&field, &FormValues::new());
        assert_eq!(control.value, "");
        assert_eq!(control.kind, FieldKind::Textarea);
    }

    #[test]
    fn select_without_value_has_no_selection() {
        let field = FieldConfig::new("Role", "select").with_options(["Eng", "Sales"]);
        let mut values = FormValues::new();
        assert_eq!(render_control(&field, &values).selected_option(), None);
        values.insert("Role".into(), "Sales".into());
        assert_eq!(render_control(&field, &values).selected_option(), Some(1));
    }

    #[test]
    fn pattern_is_advertised_only_when_configured() {
        let values = FormValues::new();
        let plain = render_control(&FieldConfig::new("Name", "text"), &values);
        let phone = render_control(
            &FieldConfig::new("Phone", "tel").with_pattern("[0-9]+"),
            &values,
        );
        assert_eq!(plain.pattern, None);
        assert_eq!(phone.pattern.as_deref(), Some("[0-9]+"));
    }

    #[test]
    fn required_fields_are_starred() {
        let field = FieldConfig::new("Email", "email").required(true);
        let control = render_control(&field, &FormValues::new());
        assert_eq!(control.display_label(), "Email *");
    }
}
