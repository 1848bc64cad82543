use indexmap::IndexMap;
use serde_json::Value;

/// Wire key the server uses for a message not tied to any field.
const GLOBAL_KEY: &str = "__all__";

/// Current validation messages: one per offending field plus an optional
/// form-wide message.
///
/// The wire format mixes the form-wide message into the per-field map under
/// a reserved key; here the two are kept apart so the reserved name never
/// leaks into field lookups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    fields: IndexMap<String, String>,
    global: Option<String>,
}

impl FormErrors {
    /// Parse the `errors` object of a rejected save. Messages may be a
    /// single string or a list of strings; lists are joined.
    pub fn from_wire(errors: &Value) -> Self {
        let mut parsed = Self::default();
        if let Value::Object(map) = errors {
            for (key, raw) in map {
                let Some(message) = flatten_message(raw) else {
                    continue;
                };
                if key == GLOBAL_KEY {
                    parsed.global = Some(message);
                } else {
                    parsed.fields.insert(key.clone(), message);
                }
            }
        }
        parsed
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn global(&self) -> Option<&str> {
        self.global.as_deref()
    }

    /// Drop the message for one field. Happens synchronously with the edit
    /// that triggered it, never deferred to a network response.
    pub fn clear(&mut self, name: &str) -> bool {
        self.fields.shift_remove(name).is_some()
    }

    pub fn clear_all(&mut self) {
        self.fields.clear();
        self.global = None;
    }

    pub fn replace_all(&mut self, next: FormErrors) {
        *self = next;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, message)| (name.as_str(), message.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len() + usize::from(self.global.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.global.is_none()
    }
}

fn flatten_message(raw: &Value) -> Option<String> {
    match raw {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(message) => Some(message.clone()),
                    Value::Null => None,
                    other => Some(other.to_string()),
                })
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
        other => Some(other.to_string()),
    }
}
