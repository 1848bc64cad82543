use crate::gateway::GatewayError;

/// Lifecycle notifications for the surrounding view.
///
/// Every method defaults to a no-op, so an implementation picks only the
/// transitions it cares about. The session invokes a hook on each phase
/// change, which is the view's cue to re-render.
pub trait LifecycleHooks {
    fn on_load_begin(&mut self) {}
    fn on_load_success(&mut self) {}
    fn on_load_error(&mut self, _error: &GatewayError) {}
    fn on_save_begin(&mut self) {}
    fn on_save_success(&mut self) {}
    fn on_save_error(&mut self, _error: &GatewayError) {}
}

/// Hooks for callers that poll session state instead of listening.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl LifecycleHooks for NoHooks {}
