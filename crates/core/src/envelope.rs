use serde::Serialize;
use serde_json::{Value, json};

/// Tagged success envelope: `{ "data": <payload> }`.
///
/// The envelope is an explicit type with a constructor/recognizer pair so
/// wrapping is statically unambiguous. Wrapping is idempotent: wrapping a
/// value that is already an envelope returns it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Envelope(Value);

impl Envelope {
    /// Wrap a payload, unless it already is a wrapped envelope.
    pub fn wrap(value: Value) -> Self {
        if Self::is_wrapped(&value) {
            Self(value)
        } else {
            Self(json!({ "data": value }))
        }
    }

    /// Recognizer: an envelope is an object with exactly the single key
    /// `"data"`.
    pub fn is_wrapped(value: &Value) -> bool {
        match value.as_object() {
            Some(map) => map.len() == 1 && map.contains_key("data"),
            None => false,
        }
    }

    /// The wrapped payload.
    pub fn data(&self) -> &Value {
        // wrap() only ever constructs the single-key object shape.
        &self.0["data"]
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Envelope> for Value {
    fn from(value: Envelope) -> Self {
        value.0
    }
}
