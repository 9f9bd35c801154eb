use super::config::FieldConfig;

/// HTML input types a single-line control understands.
pub const KNOWN_INPUT_TYPES: &[&str] = &[
    "email",
    "number",
    "password",
    "tel",
    "url",
    "date",
    "time",
    "datetime-local",
    "month",
    "week",
    "search",
    "color",
    "range",
    "checkbox",
    "radio",
    "file",
    "hidden",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Textarea,
    Select { options: Vec<String> },
    /// Any other single-line input. `input_type` keeps the configured tag verbatim.
    Input { input_type: String },
}

impl FieldKind {
    pub fn from_config(field: &FieldConfig) -> Self {
        match field.type_tag.as_str() {
            "text" => FieldKind::Text,
            "textarea" => FieldKind::Textarea,
            "select" => FieldKind::Select {
                options: field.options.clone(),
            },
            other => FieldKind::Input {
                input_type: other.to_string(),
            },
        }
    }

    pub fn input_type(&self) -> &str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Textarea => "textarea",
            FieldKind::Select { .. } => "select",
            FieldKind::Input { input_type } => input_type,
        }
    }

    /// False only for `Input` variants whose tag is not a known HTML input type.
    pub fn is_recognized(&self) -> bool {
        match self {
            FieldKind::Input { input_type } => KNOWN_INPUT_TYPES.contains(&input_type.as_str()),
            _ => true,
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldKind::Textarea)
    }
}
