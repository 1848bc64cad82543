use crate::gateway::GatewayError;

use super::hooks::LifecycleHooks;

pub const READY_STATUS: &str = "Ready. Save to apply your changes.";

/// One-line human-readable account of the form's lifecycle, for views that
/// render a status bar. Field-level messages stay in the error store; this
/// only tracks the phase transitions.
#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_raw(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl LifecycleHooks for StatusLine {
    fn on_load_begin(&mut self) {
        self.message = "Loading settings...".to_string();
    }

    fn on_load_success(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    fn on_load_error(&mut self, error: &GatewayError) {
        self.message = format!("Unable to load settings: {error}");
    }

    fn on_save_begin(&mut self) {
        self.message = "Saving...".to_string();
    }

    fn on_save_success(&mut self) {
        self.message = "Changes saved".to_string();
    }

    fn on_save_error(&mut self, _error: &GatewayError) {
        self.message = "Unable to save. Please correct the errors below.".to_string();
    }
}
