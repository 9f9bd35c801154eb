use tracing::{debug, info, warn};

use crate::domain::FormConfig;

use super::{
    actions::FormCommand,
    error::FormError,
    field::{Control, render_controls},
    history::{SubmissionHistory, SubmissionRecord},
    state::FormState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    NoCompanySelected,
    CompanySelected,
}

/// One-shot holder for the configuration document.
#[derive(Debug, Clone, Default)]
enum ConfigSlot {
    #[default]
    Pending,
    Loaded(FormConfig),
}

/// Owns the loaded configuration, the live form state and the submission
/// history, and applies user events to them.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    config: ConfigSlot,
    state: FormState,
    history: SubmissionHistory,
}

impl FormController {
    /// Controller whose configuration has not arrived yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FormConfig) -> Self {
        let mut controller = Self::new();
        controller.config = ConfigSlot::Loaded(config);
        controller
    }

    /// Install the configuration. Only the first call is accepted.
    ///
    /// A company picked while the configuration was pending gets its fields
    /// derived now, and any values are dropped.
    pub fn install_config(&mut self, config: FormConfig) -> Result<(), FormError> {
        if self.is_loaded() {
            warn!("ignoring second configuration load");
            return Err(FormError::ConfigAlreadyLoaded);
        }
        info!(companies = config.companies.len(), "configuration loaded");
        self.config = ConfigSlot::Loaded(config);
        if let Some(name) = self.state.selected_company().map(str::to_string) {
            self.apply_selection(name);
        }
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.config, ConfigSlot::Loaded(_))
    }

    pub fn config(&self) -> Option<&FormConfig> {
        match &self.config {
            ConfigSlot::Loaded(config) => Some(config),
            ConfigSlot::Pending => None,
        }
    }

    /// Names offered by the company selector, in configuration order.
    pub fn company_names(&self) -> Vec<String> {
        self.config()
            .map(FormConfig::company_names)
            .unwrap_or_default()
    }

    pub fn phase(&self) -> FormPhase {
        if self.state.selected_company().is_some() {
            FormPhase::CompanySelected
        } else {
            FormPhase::NoCompanySelected
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn history(&self) -> &SubmissionHistory {
        &self.history
    }

    pub fn into_history(self) -> SubmissionHistory {
        self.history
    }

    /// Bound controls for the active field set.
    pub fn controls(&self) -> Vec<Control> {
        render_controls(self.state.active_fields(), self.state.values())
    }

    /// Switch to `name`. Picking the company that is already selected keeps
    /// the entered values.
    pub fn select_company(&mut self, name: &str) {
        if self.state.selected_company() == Some(name) {
            return;
        }
        self.apply_selection(name.to_string());
    }

    pub fn set_value(&mut self, label: &str, value: impl Into<String>) -> Result<(), FormError> {
        if self.phase() == FormPhase::NoCompanySelected {
            return Err(FormError::NoCompanySelected);
        }
        self.state.set_value(label, value)
    }

    /// Append a snapshot of the current values to the history. Values and
    /// fields stay as they are.
    pub fn submit(&mut self) -> Result<&SubmissionRecord, FormError> {
        if self.phase() == FormPhase::NoCompanySelected {
            return Err(FormError::NoCompanySelected);
        }
        let record = SubmissionRecord::snapshot(self.state.values());
        info!(
            company = self.state.selected_company().unwrap_or_default(),
            data = %record.to_pretty_string(),
            "form submitted"
        );
        Ok(self.history.push(record))
    }

    pub fn dispatch(&mut self, command: FormCommand) -> Result<(), FormError> {
        match command {
            FormCommand::SelectCompany(name) => {
                self.select_company(&name);
                Ok(())
            }
            FormCommand::SetValue { label, value } => self.set_value(&label, value),
            FormCommand::Submit => self.submit().map(|_| ()),
        }
    }

    fn apply_selection(&mut self, name: String) {
        let fields = match self.config().and_then(|config| config.find_company(&name)) {
            Some(company) => company.fields.clone(),
            None => {
                debug!(company = %name, "no matching company; rendering empty form");
                Vec::new()
            }
        };
        for field in &fields {
            let kind = field.kind();
            if !kind.is_recognized() {
                warn!(
                    label = %field.label,
                    input_type = kind.input_type(),
                    "unrecognized field type; rendering as single-line input"
                );
            }
        }
        debug!(company = %name, fields = fields.len(), "company selected");
        self.state.reset(Some(name), fields);
    }
}
