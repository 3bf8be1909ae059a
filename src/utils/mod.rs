pub mod table;
pub mod validation;

use serde::Serialize;

/// Compact JSON for debug logging of records.
pub fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| format!("<unserializable: {}>", err))
}
