mod controller;
mod data;
mod diff;
mod errors;

pub use controller::{FormController, FormPhase, LoadOutcome, RequestToken, SaveOutcome};
pub use data::FormData;
pub use diff::has_changes;
pub use errors::FormErrors;
