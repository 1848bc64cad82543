#![deny(rust_2018_idioms)]

mod app;
mod domain;
mod form;
mod gateway;

pub use app::{LifecycleHooks, NoHooks, READY_STATUS, SettingsSession, StatusLine};
pub use domain::{ConfigPayload, FieldKind, FieldSchema, PluginEndpoint};
pub use form::{
    FormController, FormData, FormErrors, FormPhase, LoadOutcome, RequestToken, SaveOutcome,
    has_changes,
};
pub use gateway::{ConfigGateway, GatewayError};

pub mod prelude {
    pub use super::{
        ConfigGateway, FormController, FormPhase, LifecycleHooks, PluginEndpoint, SettingsSession,
    };
}
