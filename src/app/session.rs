use serde_json::Value;

use crate::{
    domain::{ConfigPayload, FieldSchema, PluginEndpoint},
    form::{
        FormController, FormData, FormErrors, FormPhase, LoadOutcome, RequestToken, SaveOutcome,
    },
    gateway::{ConfigGateway, GatewayError},
};

use super::hooks::{LifecycleHooks, NoHooks};

/// Drives a [`FormController`] against a concrete gateway.
///
/// Construction performs the single initial load. Network calls complete on
/// the caller's loop; the session feeds each completion straight back into
/// the controller and fires the matching lifecycle hook, which is the
/// surrounding view's cue to re-render. Holds no state of its own beyond the
/// collaborators it owns.
pub struct SettingsSession<G, H = NoHooks> {
    gateway: G,
    endpoint: PluginEndpoint,
    hooks: H,
    controller: FormController,
}

impl<G: ConfigGateway> SettingsSession<G, NoHooks> {
    pub fn new(gateway: G, endpoint: PluginEndpoint) -> Self {
        Self::with_hooks(gateway, endpoint, NoHooks)
    }
}

impl<G: ConfigGateway, H: LifecycleHooks> SettingsSession<G, H> {
    pub fn with_hooks(gateway: G, endpoint: PluginEndpoint, hooks: H) -> Self {
        let (controller, token) = FormController::new();
        let mut session = Self {
            gateway,
            endpoint,
            hooks,
            controller,
        };
        session.hooks.on_load_begin();
        let result = session.gateway.fetch(&session.endpoint);
        session.apply_load(token, result);
        session
    }

    /// Discard edits and fetch the field list again. A no-op while a
    /// request is outstanding.
    pub fn reload(&mut self) {
        let Some(token) = self.controller.begin_load() else {
            return;
        };
        self.hooks.on_load_begin();
        let result = self.gateway.fetch(&self.endpoint);
        self.apply_load(token, result);
    }

    /// Forward one edit from the view. Returns whether it was applied.
    pub fn change_field(&mut self, name: &str, value: Value) -> bool {
        self.controller.change_field(name, value)
    }

    /// Submit the working values. A no-op unless the form is `Ready` with
    /// unsaved changes. Returns true when the server accepted the save.
    pub fn submit(&mut self) -> bool {
        let Some((token, body)) = self.controller.begin_save() else {
            return false;
        };
        self.hooks.on_save_begin();
        let result = self.gateway.save(&self.endpoint, &body);
        match self.controller.finish_save(token, result) {
            SaveOutcome::Saved => {
                self.hooks.on_save_success();
                true
            }
            SaveOutcome::Rejected(error) => {
                self.hooks.on_save_error(&error);
                false
            }
            SaveOutcome::Stale => false,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.controller.phase()
    }

    pub fn has_changes(&self) -> bool {
        self.controller.has_changes()
    }

    pub fn fields(&self) -> &[FieldSchema] {
        self.controller.fields()
    }

    pub fn form_data(&self) -> &FormData {
        self.controller.form_data()
    }

    pub fn errors(&self) -> &FormErrors {
        self.controller.errors()
    }

    pub fn endpoint(&self) -> &PluginEndpoint {
        &self.endpoint
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    fn apply_load(&mut self, token: RequestToken, result: Result<ConfigPayload, GatewayError>) {
        match self.controller.finish_load(token, result) {
            LoadOutcome::Loaded => self.hooks.on_load_success(),
            LoadOutcome::Failed(error) => self.hooks.on_load_error(&error),
            LoadOutcome::Stale => {}
        }
    }
}

#[cfg(test)]
impl<G: ConfigGateway, H: LifecycleHooks> SettingsSession<G, H> {
    pub(crate) fn gateway_mut_for_test(&mut self) -> &mut G {
        &mut self.gateway
    }
}
