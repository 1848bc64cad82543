mod endpoint;
mod schema;

pub use endpoint::PluginEndpoint;
pub use schema::{ConfigPayload, FieldKind, FieldSchema};
