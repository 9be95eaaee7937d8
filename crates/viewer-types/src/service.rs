//! Backend reply envelope.
//!
//! Every service answers with one of:
//!   `{"response": [...]}`
//!   `{"error": {"description": "..."}}`
//!   `{"response": {"noResults": true}}`

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decoded service envelope
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceReply {
    Response(Value),
    /// Application-level failure with the server's description, if any
    ApplicationError(Option<String>),
    NoResults,
    /// Neither `response` nor `error` present
    Empty,
}

impl ServiceReply {
    pub fn from_value(value: &Value) -> Self {
        let response = value.get("response").filter(|v| !v.is_null());
        let error = value.get("error").filter(|v| !v.is_null());

        match (response, error) {
            (_, Some(err)) => ServiceReply::ApplicationError(
                err.get("description")
                    .and_then(Value::as_str)
                    .filter(|d| !d.trim().is_empty())
                    .map(String::from),
            ),
            (Some(resp), None) => {
                let no_results = resp
                    .get("noResults")
                    .and_then(Value::as_bool)
                    .unwrap_or(false);
                if no_results {
                    ServiceReply::NoResults
                } else {
                    ServiceReply::Response(resp.clone())
                }
            }
            (None, None) => ServiceReply::Empty,
        }
    }
}

/// One row of the configuration service response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub description: Option<String>,
}

/// A stored configuration value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub value: String,
    pub description: String,
}

impl ConfigRecord {
    /// Convert into a keyed entry. Records without a usable name yield `None`.
    pub fn into_entry(self) -> Option<(String, ConfigEntry)> {
        let name = self.name.filter(|n| !n.trim().is_empty())?;
        let value = match self.value {
            Value::String(s) => s,
            Value::Null => String::new(),
            other => other.to_string(),
        };
        Some((
            name,
            ConfigEntry {
                value,
                description: self.description.unwrap_or_default(),
            },
        ))
    }
}
