use std::time::Duration;

/// Knobs for the terminal front end.
#[derive(Debug, Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    pub confirm_exit: bool,
    pub show_help: bool,
    /// Refuse to submit while `required`/`pattern` constraints are unmet.
    pub native_validation: bool,
    pub show_history: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            confirm_exit: true,
            show_help: true,
            native_validation: true,
            show_history: true,
        }
    }
}

impl UiOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_confirm_exit(mut self, confirm: bool) -> Self {
        self.confirm_exit = confirm;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_native_validation(mut self, enabled: bool) -> Self {
        self.native_validation = enabled;
        self
    }

    pub fn with_history(mut self, show: bool) -> Self {
        self.show_history = show;
        self
    }
}
