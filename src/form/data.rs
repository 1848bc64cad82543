use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::domain::FieldSchema;

/// Working values keyed by field name, in schema order.
///
/// After a successful load the key set is exactly the loaded schema's field
/// names. Serializes transparently as the object the save request PUTs.
/// Mutation goes through the controller only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormData {
    values: IndexMap<String, Value>,
}

impl FormData {
    /// Seed working values from a fetched field list, resolving each field's
    /// starting value (`value`, else default, else null).
    pub fn from_config(fields: &[FieldSchema]) -> Self {
        let values = fields
            .iter()
            .map(|field| (field.name.clone(), field.working_value()))
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub(crate) fn set(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
