mod hooks;
mod session;
mod status;

pub use hooks::{LifecycleHooks, NoHooks};
pub use session::SettingsSession;
pub use status::{READY_STATUS, StatusLine};
