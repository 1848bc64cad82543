use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Display hint for one configurable field. Rendering is the host view's
/// concern; unknown wire types fold into `Other` so a newer server cannot
/// break deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Textarea,
    Secret,
    Number,
    Bool,
    Choice,
    Url,
    Other,
}

impl FieldKind {
    fn from_wire(raw: &str) -> Self {
        match raw {
            "text" | "string" => FieldKind::Text,
            "textarea" => FieldKind::Textarea,
            "secret" => FieldKind::Secret,
            "number" => FieldKind::Number,
            "bool" | "boolean" => FieldKind::Bool,
            "choice" | "select" => FieldKind::Choice,
            "url" => FieldKind::Url,
            _ => FieldKind::Other,
        }
    }
}

impl<'de> serde::Deserialize<'de> for FieldKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(FieldKind::from_wire(&raw))
    }
}

/// Server-provided description of one configurable value.
///
/// Immutable once fetched for a given load cycle. `name` is the unique key
/// the working values and error messages are keyed by.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(rename = "defaultValue", default)]
    pub default: Option<Value>,
    #[serde(default)]
    pub value: Option<Value>,
    /// Remaining display metadata (placeholders, choice lists, ...) passed
    /// through untouched for the field renderer.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl FieldSchema {
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// The value the form starts editing from: `value` when the server sent
    /// one, else the field default, else JSON null. A JSON `null` counts as
    /// "not sent".
    pub fn working_value(&self) -> Value {
        for candidate in [&self.value, &self.default] {
            if let Some(value) = candidate {
                if !value.is_null() {
                    return value.clone();
                }
            }
        }
        Value::Null
    }
}

/// Body of a fetch response and of a successful save response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConfigPayload {
    pub config: Vec<FieldSchema>,
}

impl ConfigPayload {
    /// Decode a payload out of an already-parsed response body.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).context("failed to decode configuration payload")
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.config.iter().map(|field| field.name.as_str())
    }
}
