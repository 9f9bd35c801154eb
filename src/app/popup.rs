use crate::{form::Control, presentation::PopupRender};

/// What a confirmed popup choice is applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PopupTarget {
    Company,
    Field(String),
}

pub(crate) struct PopupState {
    target: PopupTarget,
    title: String,
    options: Vec<String>,
    selected: usize,
}

impl PopupState {
    pub(crate) fn for_companies(names: Vec<String>, current: Option<&str>) -> Option<Self> {
        if names.is_empty() {
            return None;
        }
        let selected = current
            .and_then(|name| names.iter().position(|item| item == name))
            .unwrap_or(0);
        Some(Self {
            target: PopupTarget::Company,
            title: "Choose a company".to_string(),
            options: names,
            selected,
        })
    }

    pub(crate) fn for_control(control: &Control) -> Option<Self> {
        let options = control.component().popup_options(control)?;
        Some(Self {
            target: PopupTarget::Field(control.label.clone()),
            title: control.label.clone(),
            selected: control.selected_option().unwrap_or(0),
            options,
        })
    }

    pub(crate) fn select_previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        if self.selected == 0 {
            self.selected = self.options.len().saturating_sub(1);
        } else {
            self.selected -= 1;
        }
    }

    pub(crate) fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.options.len();
    }

    /// Consume the popup, yielding its target and the highlighted option.
    pub(crate) fn confirm(self) -> Option<(PopupTarget, String)> {
        let choice = self.options.get(self.selected).cloned()?;
        Some((self.target, choice))
    }

    pub(crate) fn as_render(&self) -> PopupRender<'_> {
        PopupRender {
            title: &self.title,
            options: &self.options,
            selected: self.selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_popup_highlights_current_selection() {
        let names = vec!["Acme".to_string(), "Globex".to_string()];
        let mut popup = PopupState::for_companies(names, Some("Globex")).expect("popup");
        popup.select_next();
        let (target, choice) = popup.confirm().expect("choice");
        assert_eq!(target, PopupTarget::Company);
        assert_eq!(choice, "Acme");
    }

    #[test]
    fn no_popup_without_companies() {
        assert!(PopupState::for_companies(Vec::new(), None).is_none());
    }
}
