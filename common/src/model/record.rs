//! Records consumed by the page populator.
//!
//! The populator deliberately does not validate what the endpoint sends back:
//! any JSON array is accepted and every entry becomes a `Record`. Only the
//! `name` member is looked at, and it is rendered the way a browser template
//! literal would stringify it.

use serde_json::Value;

/// Text rendered for a record that has no `name`.
pub const MISSING_NAME: &str = "undefined";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub name: Option<Value>,
}

impl Record {
    pub fn named(name: impl Into<String>) -> Self {
        Record {
            name: Some(Value::String(name.into())),
        }
    }

    /// Returns the text embedded in the rendered fragment.
    ///
    /// Strings are returned verbatim (no HTML escaping). A missing member
    /// yields `undefined`, `null` yields `null`, numbers and booleans their
    /// literal form, and arrays or objects their JSON text.
    pub fn display_name(&self) -> String {
        match &self.name {
            None => MISSING_NAME.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut map) => Record {
                name: map.remove("name"),
            },
            _ => Record::default(),
        }
    }
}
