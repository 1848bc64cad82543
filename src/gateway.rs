use std::fmt;

use serde_json::Value;

use crate::{
    domain::{ConfigPayload, PluginEndpoint},
    form::{FormData, FormErrors},
};

/// Transport contract with the remote configuration endpoint.
///
/// `fetch` is a GET of the field list and current values; `save` PUTs the
/// working values and returns the confirmed field list on success.
/// Implementations own HTTP mechanics and authentication; any non-2xx
/// response surfaces as a [`GatewayError`] carrying the decoded body.
pub trait ConfigGateway {
    fn fetch(&mut self, endpoint: &PluginEndpoint) -> Result<ConfigPayload, GatewayError>;

    fn save(
        &mut self,
        endpoint: &PluginEndpoint,
        data: &FormData,
    ) -> Result<ConfigPayload, GatewayError>;
}

/// A failed fetch or save: transport breakage or a non-2xx response.
#[derive(Debug, Clone)]
pub struct GatewayError {
    status: Option<u16>,
    message: String,
    body: Option<Value>,
}

impl GatewayError {
    /// The request never produced a response.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
            body: None,
        }
    }

    /// A response arrived with a non-2xx status.
    pub fn http(status: u16, body: Option<Value>) -> Self {
        Self {
            status: Some(status),
            message: format!("request failed with status {status}"),
            body,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Validation messages from the response body's `errors` object. Empty
    /// when the body is missing or unstructured.
    pub fn validation_errors(&self) -> FormErrors {
        self.body
            .as_ref()
            .and_then(|body| body.get("errors"))
            .map(FormErrors::from_wire)
            .unwrap_or_default()
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for GatewayError {}
