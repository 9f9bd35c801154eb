use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use tracing::{debug, warn};

use crate::{
    form::{Control, FieldIssue, FormController, FormPhase, SubmissionHistory, check_controls},
    presentation::{self, UiContext},
};

use super::{
    focus::{FocusRing, FocusTarget},
    input::{KeyCommand, classify},
    keymap,
    options::UiOptions,
    popup::{PopupState, PopupTarget},
    status::StatusLine,
    terminal::TerminalGuard,
};

const DEFAULT_TITLE: &str = "Dynamic Form";

pub(crate) struct App {
    controller: FormController,
    options: UiOptions,
    title: String,
    status: StatusLine,
    focus: FocusRing,
    popup: Option<PopupState>,
    issues: Vec<FieldIssue>,
    unsubmitted: bool,
    exit_armed: bool,
    should_quit: bool,
}

impl App {
    pub fn new(controller: FormController, title: Option<String>, options: UiOptions) -> Self {
        Self {
            controller,
            options,
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            status: StatusLine::new(),
            focus: FocusRing::default(),
            popup: None,
            issues: Vec::new(),
            unsubmitted: false,
            exit_armed: false,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key)?,
                Event::Resize(width, height) => {
                    terminal.resize(Rect::new(0, 0, width, height))?;
                }
                Event::Mouse(_) => {}
                Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }
        Ok(())
    }

    pub fn into_history(self) -> SubmissionHistory {
        self.controller.into_history()
    }

    fn form_visible(&self) -> bool {
        self.controller.phase() == FormPhase::CompanySelected
    }

    fn focus_target(&self, controls: &[Control]) -> FocusTarget {
        self.focus.current(controls.len(), self.form_visible())
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let controls = self.controller.controls();
        let focus = self.focus_target(&controls);
        let help = self.options.show_help.then(|| {
            let component = match focus {
                FocusTarget::Field(idx) => controls.get(idx).map(|c| c.component().kind()),
                _ => None,
            };
            keymap::help_text(focus, component)
        });
        let state = self.controller.state();

        presentation::draw(
            frame,
            UiContext {
                title: &self.title,
                selected_company: state.selected_company(),
                company_count: self.controller.company_names().len(),
                config_loaded: self.controller.is_loaded(),
                controls: &controls,
                focus,
                issues: &self.issues,
                history: self
                    .options
                    .show_history
                    .then(|| self.controller.history()),
                status_message: self.status.message(),
                unsubmitted: self.unsubmitted,
                help: help.as_deref(),
                popup: self.popup.as_ref().map(PopupState::as_render),
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if self.handle_popup_key(key) {
            return Ok(());
        }

        let command = classify(&key);
        if !matches!(command, KeyCommand::Quit) {
            self.exit_armed = false;
        }
        match command {
            KeyCommand::Submit => self.on_submit(),
            KeyCommand::Quit => self.on_exit(),
            KeyCommand::NextFocus => self.step_focus(1),
            KeyCommand::PrevFocus => self.step_focus(-1),
            KeyCommand::ResetStatus => self.status.ready(),
            KeyCommand::Activate => self.on_activate(key),
            KeyCommand::Edit(event) => self.edit_focused(&event),
            KeyCommand::None => {}
        }
        Ok(())
    }

    fn handle_popup_key(&mut self, key: KeyEvent) -> bool {
        let Some(popup) = self.popup.as_mut() else {
            return false;
        };
        match key.code {
            KeyCode::Esc => {
                self.popup = None;
                self.status.ready();
            }
            KeyCode::Up => popup.select_previous(),
            KeyCode::Down => popup.select_next(),
            KeyCode::Enter => {
                if let Some((target, choice)) = self.popup.take().and_then(PopupState::confirm) {
                    self.apply_choice(target, choice);
                }
            }
            _ => {}
        }
        true
    }

    fn step_focus(&mut self, delta: i32) {
        let fields = self.controller.state().active_fields().len();
        let visible = self.form_visible();
        self.focus.step(delta, fields, visible);
    }

    fn on_activate(&mut self, key: KeyEvent) {
        let controls = self.controller.controls();
        match self.focus_target(&controls) {
            FocusTarget::CompanySelector => {
                let current = self.controller.state().selected_company();
                match PopupState::for_companies(self.controller.company_names(), current) {
                    Some(popup) => {
                        self.status.set_raw("Use ↑/↓ and Enter to choose");
                        self.popup = Some(popup);
                    }
                    None => self.status.set_raw("No companies available"),
                }
            }
            FocusTarget::Field(idx) => {
                let Some(control) = controls.get(idx) else {
                    return;
                };
                if control.component().consumes_enter() {
                    self.edit_focused(&key);
                } else if let Some(popup) = PopupState::for_control(control) {
                    self.status.set_raw("Use ↑/↓ and Enter to choose");
                    self.popup = Some(popup);
                } else {
                    self.step_focus(1);
                }
            }
            FocusTarget::Submit => self.on_submit(),
        }
    }

    fn edit_focused(&mut self, key: &KeyEvent) {
        let controls = self.controller.controls();
        let FocusTarget::Field(idx) = self.focus_target(&controls) else {
            return;
        };
        let Some(control) = controls.get(idx) else {
            return;
        };
        if let Some(next) = control.component().handle_key(control, key) {
            self.update_value(&control.label, next);
        }
    }

    fn update_value(&mut self, label: &str, value: String) {
        match self.controller.set_value(label, value) {
            Ok(()) => {
                self.unsubmitted = true;
                self.issues.retain(|issue| issue.label != label);
                self.status.editing(label);
            }
            Err(err) => {
                warn!(%label, error = %err, "value update rejected");
                self.status.set_raw(err.to_string());
            }
        }
    }

    fn apply_choice(&mut self, target: PopupTarget, choice: String) {
        match target {
            PopupTarget::Company => {
                if self.controller.state().selected_company() == Some(choice.as_str()) {
                    self.status.ready();
                    return;
                }
                self.controller.select_company(&choice);
                self.issues.clear();
                self.unsubmitted = false;
                self.focus.focus_first_field();
                let fields = self.controller.state().active_fields().len();
                self.status.company_selected(&choice, fields);
            }
            PopupTarget::Field(label) => self.update_value(&label, choice),
        }
    }

    fn on_submit(&mut self) {
        if !self.form_visible() {
            self.status.set_raw("Pick a company before submitting");
            return;
        }
        if self.options.native_validation {
            let issues = check_controls(&self.controller.controls());
            if !issues.is_empty() {
                debug!(issues = issues.len(), "submission blocked by field constraints");
                self.status.issues_remaining(issues.len());
                self.issues = issues;
                return;
            }
        }
        match self.controller.submit() {
            Ok(_) => {
                self.issues.clear();
                self.unsubmitted = false;
                let total = self.controller.history().len();
                self.status.submitted(total);
            }
            Err(err) => self.status.set_raw(err.to_string()),
        }
    }

    fn on_exit(&mut self) {
        if self.options.confirm_exit && self.unsubmitted && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }

    #[cfg(test)]
    fn focused_component(&self) -> Option<crate::form::ComponentKind> {
        let controls = self.controller.controls();
        match self.focus_target(&controls) {
            FocusTarget::Field(idx) => controls.get(idx).map(|c| c.component().kind()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::FormConfig, form::ComponentKind};
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};
    use serde_json::json;

    fn config() -> FormConfig {
        FormConfig::from_value(json!({
            "companies": [
                {
                    "name": "Acme",
                    "fields": [
                        {"label": "Email", "type": "email", "required": true},
                        {"label": "Role", "type": "select", "required": true, "options": ["Eng", "Sales"]},
                        {"label": "Notes", "type": "textarea", "required": false}
                    ]
                },
                {
                    "name": "Globex",
                    "fields": [
                        {"label": "Phone", "type": "tel", "required": false, "pattern": "[0-9]{3}"}
                    ]
                }
            ]
        }))
        .expect("config")
    }

    fn app() -> App {
        App::new(
            FormController::with_config(config()),
            None,
            UiOptions::default(),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .expect("key");
    }

    fn ctrl(app: &mut App, ch: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
            .expect("key");
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn choose_company(app: &mut App, downs: usize) {
        press(app, KeyCode::Enter);
        for _ in 0..downs {
            press(app, KeyCode::Down);
        }
        press(app, KeyCode::Enter);
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("terminal");
        terminal.draw(|frame| app.draw(frame)).expect("draw");
        let buffer = terminal.backend().buffer().clone();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn keyboard_walkthrough_records_submission() {
        let mut app = app();
        choose_company(&mut app, 0);
        assert_eq!(app.controller.state().selected_company(), Some("Acme"));
        assert_eq!(app.focused_component(), Some(ComponentKind::TextInput));

        type_text(&mut app, "a@b.com");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_component(), Some(ComponentKind::Select));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        ctrl(&mut app, 's');

        let history = app.controller.history();
        assert_eq!(history.len(), 1);
        let record = &history.records()[0];
        assert_eq!(record.get("Email"), Some("a@b.com"));
        assert_eq!(record.get("Role"), Some("Eng"));
        assert_eq!(record.len(), 2);
        assert!(!app.unsubmitted);
    }

    #[test]
    fn missing_required_value_blocks_submit() {
        let mut app = app();
        choose_company(&mut app, 0);
        type_text(&mut app, "a@b.com");
        ctrl(&mut app, 's');
        assert!(app.controller.history().is_empty());
        assert_eq!(app.issues.len(), 1);
        assert_eq!(app.issues[0].label, "Role");
        assert_eq!(app.status.message(), "1 issue(s) block submission");
    }

    #[test]
    fn disabled_native_validation_submits_anyway() {
        let mut app = App::new(
            FormController::with_config(config()),
            None,
            UiOptions::default().with_native_validation(false),
        );
        choose_company(&mut app, 0);
        ctrl(&mut app, 's');
        assert_eq!(app.controller.history().len(), 1);
        assert!(app.controller.history().records()[0].is_empty());
    }

    #[test]
    fn pattern_mismatch_blocks_submit() {
        let mut app = app();
        choose_company(&mut app, 1);
        type_text(&mut app, "12a");
        ctrl(&mut app, 's');
        assert!(app.controller.history().is_empty());
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "3");
        assert!(app.issues.is_empty(), "editing clears the field's issue");
        ctrl(&mut app, 's');
        assert_eq!(app.controller.history().len(), 1);
    }

    #[test]
    fn textarea_enter_inserts_newline() {
        let mut app = app();
        choose_company(&mut app, 0);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_component(), Some(ComponentKind::Textarea));
        type_text(&mut app, "a");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "b");
        assert_eq!(app.controller.state().value("Notes"), "a\nb");
    }

    #[test]
    fn switching_company_clears_values() {
        let mut app = app();
        choose_company(&mut app, 0);
        type_text(&mut app, "x");
        press(&mut app, KeyCode::BackTab);
        choose_company(&mut app, 1);
        assert_eq!(app.controller.state().selected_company(), Some("Globex"));
        assert!(app.controller.state().values().is_empty());
        assert!(!app.unsubmitted);
    }

    #[test]
    fn quit_with_unsubmitted_values_needs_confirmation() {
        let mut app = app();
        choose_company(&mut app, 0);
        type_text(&mut app, "x");
        ctrl(&mut app, 'q');
        assert!(!app.should_quit);
        ctrl(&mut app, 'q');
        assert!(app.should_quit);
    }

    #[test]
    fn submit_without_company_is_refused() {
        let mut app = app();
        ctrl(&mut app, 's');
        assert!(app.controller.history().is_empty());
        assert_eq!(app.status.message(), "Pick a company before submitting");
    }

    #[test]
    fn latest_submission_stays_visible_in_history() {
        let mut app = App::new(
            FormController::with_config(config()),
            None,
            UiOptions::default().with_native_validation(false),
        );
        choose_company(&mut app, 0);
        for _ in 0..12 {
            type_text(&mut app, "x");
            ctrl(&mut app, 's');
        }
        assert_eq!(app.controller.history().len(), 12);

        let shown = screen(&mut app);
        assert!(shown.contains("Submitted data (12)"));
        assert!(shown.contains("#12"), "newest record is on screen");
        assert!(!shown.contains("#1 "), "oldest record scrolled away");
    }

    #[test]
    fn screen_shows_controls_and_history() {
        let mut app = app();
        let before = screen(&mut app);
        assert!(before.contains("Choose a company"));
        assert!(!before.contains("Submitted data"));

        choose_company(&mut app, 0);
        type_text(&mut app, "a@b.com");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        ctrl(&mut app, 's');

        let after = screen(&mut app);
        assert!(after.contains("Email *"));
        assert!(after.contains("Role *"));
        assert!(after.contains("Submit"));
        assert!(after.contains("Submitted data"));
        assert!(after.contains("\"Email\": \"a@b.com\""));
    }
}
