use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Sentinel Terraform uses on the JSON boundary for values not known until apply.
pub const UNKNOWN_VALUE: &str = "74D93920-ED26-11E3-AC10-0800200C9A66";

/// An attribute value that keeps "not set" distinct from "empty".
///
/// `Null` is an attribute the configuration (or the remote) left out,
/// `Unknown` is a plan-time placeholder, and `Known` carries a concrete value,
/// which may itself be an empty string, `false` or an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<T> {
    Null,
    Unknown,
    Known(T),
}

pub type StringValue = Value<String>;
pub type BoolValue = Value<bool>;
pub type Int64Value = Value<i64>;
pub type ListValue<T> = Value<Vec<T>>;

impl<T> Default for Value<T> {
    fn default() -> Self {
        Value::Null
    }
}

impl<T> Value<T> {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Value::Known(_))
    }

    pub fn as_known(&self) -> Option<&T> {
        match self {
            Value::Known(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_known(self) -> Option<T> {
        match self {
            Value::Known(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Value<U> {
        match self {
            Value::Null => Value::Null,
            Value::Unknown => Value::Unknown,
            Value::Known(v) => Value::Known(f(v)),
        }
    }
}

impl Value<String> {
    pub fn as_str(&self) -> Option<&str> {
        self.as_known().map(String::as_str)
    }

    /// Empty string for anything that is not a known value.
    pub fn value_string(&self) -> &str {
        self.as_str().unwrap_or("")
    }
}

impl<T> From<Option<T>> for Value<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Value::Known(v),
            None => Value::Null,
        }
    }
}

impl From<&str> for Value<String> {
    fn from(value: &str) -> Self {
        Value::Known(value.to_string())
    }
}

impl<T: Serialize> Serialize for Value<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Unknown => serializer.serialize_str(UNKNOWN_VALUE),
            Value::Known(v) => v.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Value<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        match raw {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::String(ref s) if s == UNKNOWN_VALUE => Ok(Value::Unknown),
            other => serde_json::from_value(other)
                .map(Value::Known)
                .map_err(D::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    struct Sample {
        name: StringValue,
        enabled: BoolValue,
        tags: ListValue<String>,
    }

    #[test]
    fn test_missing_and_null_fields_are_null() {
        let sample: Sample = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert!(sample.name.is_null());
        assert!(sample.enabled.is_null());
        assert!(sample.tags.is_null());
    }

    #[test]
    fn test_empty_values_are_known() {
        let sample: Sample =
            serde_json::from_str(r#"{"name": "", "enabled": false, "tags": []}"#).unwrap();
        assert_eq!(sample.name, Value::Known(String::new()));
        assert_eq!(sample.enabled, Value::Known(false));
        assert_eq!(sample.tags, Value::Known(vec![]));
    }

    #[test]
    fn test_unknown_sentinel() {
        let json = format!(r#"{{"name": "{}"}}"#, UNKNOWN_VALUE);
        let sample: Sample = serde_json::from_str(&json).unwrap();
        assert!(sample.name.is_unknown());

        let out = serde_json::to_value(&sample).unwrap();
        assert_eq!(out["name"], UNKNOWN_VALUE);
        assert!(out["enabled"].is_null());
    }

    #[test]
    fn test_type_mismatch_is_rejected() {
        let result: Result<Sample, _> = serde_json::from_str(r#"{"enabled": "yes"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_value_string_defaults_to_empty() {
        assert_eq!(StringValue::Null.value_string(), "");
        assert_eq!(StringValue::Unknown.value_string(), "");
        assert_eq!(StringValue::from("abc").value_string(), "abc");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(Some(3i64)), Value::Known(3));
        assert_eq!(Value::<i64>::from(None), Value::Null);
    }
}
