use anyhow::Result;
use tracing::info;

use crate::{
    domain::FormConfig,
    form::{FormController, SubmissionHistory},
    io::{OutputOptions, emit_history},
};

use super::{options::UiOptions, runtime::App};

/// Entry point for running a configuration-driven form in the terminal.
#[derive(Debug)]
pub struct DynamicForm {
    controller: FormController,
    title: Option<String>,
    options: UiOptions,
    output: Option<OutputOptions>,
}

impl DynamicForm {
    pub fn new(config: FormConfig) -> Self {
        Self::from_controller(FormController::with_config(config))
    }

    pub fn from_controller(controller: FormController) -> Self {
        Self {
            controller,
            title: None,
            options: UiOptions::default(),
            output: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Write the submission history to these destinations once the UI exits.
    pub fn with_output(mut self, output: OutputOptions) -> Self {
        self.output = Some(output);
        self
    }

    pub fn run(self) -> Result<SubmissionHistory> {
        let DynamicForm {
            controller,
            title,
            options,
            output,
        } = self;

        let mut app = App::new(controller, title, options);
        app.run()?;
        let history = app.into_history();
        info!(submissions = history.len(), "form closed");

        if let Some(output) = output.as_ref() {
            emit_history(&history, output)?;
        }
        Ok(history)
    }
}
