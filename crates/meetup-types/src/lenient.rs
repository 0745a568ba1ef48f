//! Field-level lenient deserialization for Meetup API payloads.
//!
//! The events endpoint is not versioned against this tool, so a field whose
//! JSON type drifts should not throw away the whole record. Fields decorated
//! with [`or_default`] fall back to `T::default()` when the value does not fit
//! the Rust type, while every other field of the record is still populated.
//!
//! # Example
//!
//! ```ignore
//! #[derive(Default, Deserialize)]
//! #[serde(default)]
//! struct Record {
//!     #[serde(deserialize_with = "lenient::or_default")]
//!     count: i64,
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Deserialize `T`, or return `T::default()` if the value has the wrong shape.
///
/// Only a syntactically broken document can make this fail; type mismatches
/// never do.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }

    Ok(serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::debug!("Ignoring mistyped field: {}", e);
        T::default()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct TestData {
        #[serde(deserialize_with = "or_default")]
        name: String,
        #[serde(deserialize_with = "or_default")]
        value: i64,
    }

    #[test]
    fn test_well_typed_fields_pass_through() {
        let parsed: TestData = serde_json::from_str(r#"{"name":"test","value":42}"#).unwrap();
        assert_eq!(parsed.name, "test");
        assert_eq!(parsed.value, 42);
    }

    #[test]
    fn test_mistyped_field_falls_back_alone() {
        let parsed: TestData = serde_json::from_str(r#"{"name":"test","value":"42"}"#).unwrap();
        assert_eq!(parsed.name, "test");
        assert_eq!(parsed.value, 0);
    }

    #[test]
    fn test_null_and_missing_fields_default() {
        let parsed: TestData = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert_eq!(parsed, TestData::default());
    }
}
