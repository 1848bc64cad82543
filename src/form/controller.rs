use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    domain::{ConfigPayload, FieldSchema},
    gateway::GatewayError,
};

use super::{data::FormData, diff, errors::FormErrors};

/// Lifecycle phase of the settings form. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Loading,
    Ready,
    Saving,
}

/// Correlates a network completion with the request that produced it.
///
/// Tokens increase monotonically per controller. A completion carrying
/// anything other than the current in-flight token is discarded, so a slow
/// stale response can never overwrite fresher state; the same check retires
/// requests that were superseded before completing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug)]
pub enum LoadOutcome {
    /// Field list and values are in place; the form is editable.
    Loaded,
    /// The fetch failed. The error is handed back for the caller's
    /// load-error handling; existing form state is left alone.
    Failed(GatewayError),
    /// Completion for a request that is no longer in flight. Dropped.
    Stale,
}

#[derive(Debug)]
pub enum SaveOutcome {
    Saved,
    /// The server rejected the submission; its messages are now in the
    /// error store and the user's edits are untouched.
    Rejected(GatewayError),
    Stale,
}

/// Single source of truth for one plugin settings form: lifecycle phase,
/// field list, working values, baseline, and validation errors. All edits
/// and submissions go through here.
///
/// The controller performs no I/O itself. It hands out a [`RequestToken`]
/// when a network operation should start and consumes the result through the
/// matching `finish_*` call, delivered on the same event loop. At most one
/// request is in flight at a time.
#[derive(Debug)]
pub struct FormController {
    phase: FormPhase,
    fields: Vec<FieldSchema>,
    form_data: FormData,
    initial_data: FormData,
    errors: FormErrors,
    next_token: u64,
    in_flight: Option<RequestToken>,
}

impl FormController {
    /// Create a controller in `Loading` with the initial fetch already
    /// issued; the caller performs the fetch and reports back through
    /// [`FormController::finish_load`].
    pub fn new() -> (Self, RequestToken) {
        let mut controller = Self {
            phase: FormPhase::Loading,
            fields: Vec::new(),
            form_data: FormData::default(),
            initial_data: FormData::default(),
            errors: FormErrors::default(),
            next_token: 0,
            in_flight: None,
        };
        let token = controller.issue_token();
        (controller, token)
    }

    /// Start a (re)load. Refused while any request is outstanding.
    pub fn begin_load(&mut self) -> Option<RequestToken> {
        if self.in_flight.is_some() {
            debug!("load refused: a request is already in flight");
            return None;
        }
        self.phase = FormPhase::Loading;
        Some(self.issue_token())
    }

    pub fn finish_load(
        &mut self,
        token: RequestToken,
        result: Result<ConfigPayload, GatewayError>,
    ) -> LoadOutcome {
        if !self.settle(token) {
            return LoadOutcome::Stale;
        }
        match result {
            Ok(payload) => {
                self.fields = payload.config;
                self.form_data = FormData::from_config(&self.fields);
                self.initial_data = self.form_data.clone();
                self.errors.clear_all();
                self.phase = FormPhase::Ready;
                debug!(fields = self.fields.len(), "configuration loaded");
                LoadOutcome::Loaded
            }
            Err(error) => {
                // Do not hang in Loading; previous form state (if any) stays
                // behind and the caller routes the error to its handler.
                self.phase = FormPhase::Ready;
                debug!(%error, "configuration load failed");
                LoadOutcome::Failed(error)
            }
        }
    }

    /// Write one working value and drop that field's validation message.
    ///
    /// The message clears immediately, before any pending network round-trip
    /// resolves. A name outside the loaded schema is a caller bug: logged
    /// and ignored. Returns whether the edit was applied.
    pub fn change_field(&mut self, name: &str, value: Value) -> bool {
        if !self.form_data.contains(name) {
            warn!(field = name, "edit for a field outside the loaded schema");
            return false;
        }
        self.form_data.set(name, value);
        self.errors.clear(name);
        true
    }

    /// Whether the working values differ from the last confirmed baseline.
    pub fn has_changes(&self) -> bool {
        diff::has_changes(&self.initial_data, &self.form_data)
    }

    /// Start a submission. Permitted only in `Ready` with unsaved changes;
    /// otherwise a no-op. Returns the token plus the snapshot of working
    /// values to PUT.
    pub fn begin_save(&mut self) -> Option<(RequestToken, FormData)> {
        if self.phase != FormPhase::Ready || self.in_flight.is_some() {
            debug!(phase = ?self.phase, "save refused: not ready");
            return None;
        }
        if !self.has_changes() {
            debug!("save refused: no changes");
            return None;
        }
        self.phase = FormPhase::Saving;
        let token = self.issue_token();
        debug!(?token, "submitting configuration");
        Some((token, self.form_data.clone()))
    }

    pub fn finish_save(
        &mut self,
        token: RequestToken,
        result: Result<ConfigPayload, GatewayError>,
    ) -> SaveOutcome {
        if !self.settle(token) {
            return SaveOutcome::Stale;
        }
        self.phase = FormPhase::Ready;
        match result {
            Ok(payload) => {
                // Re-baseline on what the server confirmed, falling back to
                // field defaults where it omitted a value. The confirmed
                // field list supersedes the loaded one, keeping the key set
                // aligned with the schema.
                self.fields = payload.config;
                self.initial_data = FormData::from_config(&self.fields);
                self.form_data = self.initial_data.clone();
                self.errors.clear_all();
                debug!("configuration saved");
                SaveOutcome::Saved
            }
            Err(error) => {
                // Edits stay put; only the error store is replaced.
                self.errors.replace_all(error.validation_errors());
                debug!(%error, errors = self.errors.len(), "save rejected");
                SaveOutcome::Rejected(error)
            }
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FormPhase::Loading
    }

    pub fn is_saving(&self) -> bool {
        self.phase == FormPhase::Saving
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn form_data(&self) -> &FormData {
        &self.form_data
    }

    pub fn initial_data(&self) -> &FormData {
        &self.initial_data
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.form_data.get(name)
    }

    fn issue_token(&mut self) -> RequestToken {
        self.next_token += 1;
        let token = RequestToken(self.next_token);
        self.in_flight = Some(token);
        token
    }

    /// Retire the in-flight request if `token` matches it. A mismatch means
    /// the completion belongs to a superseded request.
    fn settle(&mut self, token: RequestToken) -> bool {
        if self.in_flight == Some(token) {
            self.in_flight = None;
            true
        } else {
            debug!(?token, "discarding stale completion");
            false
        }
    }
}
