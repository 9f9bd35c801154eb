use regex::Regex;
use tracing::warn;

use super::field::Control;

/// A constraint the control's `required`/`pattern` attributes flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub label: String,
    pub message: String,
}

/// Check one control the way a browser checks `required` and `pattern`.
///
/// Patterns must match the whole value. Empty values skip the pattern check,
/// and a pattern that fails to compile is ignored.
pub fn check_control(control: &Control) -> Option<FieldIssue> {
    if control.value.is_empty() {
        return control.required.then(|| FieldIssue {
            label: control.label.clone(),
            message: format!("{} is required", control.label),
        });
    }
    let pattern = control.pattern.as_deref()?;
    let anchored = format!("^(?:{pattern})$");
    match Regex::new(&anchored) {
        Ok(regex) if regex.is_match(&control.value) => None,
        Ok(_) => Some(FieldIssue {
            label: control.label.clone(),
            message: format!("{} does not match the requested format", control.label),
        }),
        Err(err) => {
            warn!(label = %control.label, %pattern, error = %err, "ignoring invalid pattern");
            None
        }
    }
}

pub fn check_controls(controls: &[Control]) -> Vec<FieldIssue> {
    controls.iter().filter_map(check_control).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldKind;

    fn input(value: &str, required: bool, pattern: Option<&str>) -> Control {
        Control {
            label: "Phone".into(),
            kind: FieldKind::Input {
                input_type: "tel".into(),
            },
            value: value.into(),
            required,
            pattern: pattern.map(str::to_string),
        }
    }

    #[test]
    fn empty_required_value_is_reported() {
        let issue = check_control(&input("", true, None)).expect("issue");
        assert_eq!(issue.message, "Phone is required");
        assert!(check_control(&input("", false, Some("[0-9]+"))).is_none());
    }

    #[test]
    fn pattern_must_match_entire_value() {
        let pattern = Some("[0-9]{3}");
        assert!(check_control(&input("123", true, pattern)).is_none());
        assert!(check_control(&input("1234", true, pattern)).is_some());
        assert!(check_control(&input("x123", true, pattern)).is_some());
    }

    #[test]
    fn alternation_is_anchored_as_a_group() {
        let pattern = Some("a|b");
        assert!(check_control(&input("a", false, pattern)).is_none());
        assert!(check_control(&input("ab", false, pattern)).is_some());
    }

    #[test]
    fn invalid_pattern_is_ignored() {
        assert!(check_control(&input("anything", true, Some("(["))).is_none());
    }

    #[test]
    fn collects_issues_in_field_order() {
        let mut second = input("", true, None);
        second.label = "Email".into();
        let issues = check_controls(&[input("", true, None), second]);
        let labels = issues.iter().map(|i| i.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["Phone", "Email"]);
    }
}
