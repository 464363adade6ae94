//! Shared helpers for the construct (model → request) and flatten
//! (response → model) directions.

use serde::Serialize;
use thiserror::Error;

use crate::graph::{Flags, GraphEnum};
use crate::terraform::{Int64Value, ListValue, StringValue, Value};

#[derive(Debug, Error, PartialEq)]
pub enum ConstructError {
    #[error("required attribute '{field}' is null or unknown")]
    MissingRequired { field: String },

    #[error("invalid value '{value}' for '{field}': expected one of [{allowed}]")]
    InvalidEnum {
        field: String,
        value: String,
        allowed: String,
    },

    #[error("value {value} for '{field}' is out of range")]
    OutOfRange { field: String, value: i64 },

    #[error("invalid value '{value}' for '{field}': write it as '{canonical}'")]
    NonCanonicalFlags {
        field: String,
        value: String,
        canonical: String,
    },
}

pub fn required<T: Clone>(field: &str, value: &Value<T>) -> Result<T, ConstructError> {
    value
        .as_known()
        .cloned()
        .ok_or_else(|| ConstructError::MissingRequired {
            field: field.to_string(),
        })
}

/// `None` for null and unknown values, so the member is left out of the body.
pub fn optional<T: Clone>(value: &Value<T>) -> Option<T> {
    value.as_known().cloned()
}

/// Narrows an optional Int64 attribute to Graph's Int32.
pub fn optional_i32(field: &str, value: &Int64Value) -> Result<Option<i32>, ConstructError> {
    value
        .as_known()
        .map(|&raw| {
            i32::try_from(raw).map_err(|_| ConstructError::OutOfRange {
                field: field.to_string(),
                value: raw,
            })
        })
        .transpose()
}

pub fn parse_enum<E: GraphEnum>(field: &str, raw: &str) -> Result<E, ConstructError> {
    raw.parse().map_err(|_| ConstructError::InvalidEnum {
        field: field.to_string(),
        value: raw.to_string(),
        allowed: E::VALUES.join(", "),
    })
}

pub fn required_enum<E: GraphEnum>(field: &str, value: &StringValue) -> Result<E, ConstructError> {
    let raw = required(field, value)?;
    parse_enum(field, &raw)
}

pub fn optional_enum<E: GraphEnum>(
    field: &str,
    value: &StringValue,
) -> Result<Option<E>, ConstructError> {
    value.as_str().map(|raw| parse_enum(field, raw)).transpose()
}

pub fn optional_enum_list<E: GraphEnum>(
    field: &str,
    value: &ListValue<String>,
) -> Result<Option<Vec<E>>, ConstructError> {
    value
        .as_known()
        .map(|items| items.iter().map(|raw| parse_enum(field, raw)).collect())
        .transpose()
}

pub fn optional_flags<E: GraphEnum>(
    field: &str,
    value: &StringValue,
) -> Result<Option<Flags<E>>, ConstructError> {
    let Some(raw) = value.as_str() else {
        return Ok(None);
    };
    let flags = raw
        .parse::<Flags<E>>()
        .map_err(|e| ConstructError::InvalidEnum {
            field: field.to_string(),
            value: e.value,
            allowed: E::VALUES.join(", "),
        })?;
    // Graph echoes the canonical spelling; anything else would never converge.
    let canonical = flags.to_string();
    if canonical != raw {
        return Err(ConstructError::NonCanonicalFlags {
            field: field.to_string(),
            value: raw.to_string(),
            canonical,
        });
    }
    Ok(Some(flags))
}

/// Maps a nested list element-wise, preserving order. A null list stays `None`.
pub fn optional_list<M, W, F>(
    value: &ListValue<M>,
    mut map: F,
) -> Result<Option<Vec<W>>, ConstructError>
where
    F: FnMut(&M) -> Result<W, ConstructError>,
{
    value
        .as_known()
        .map(|items| items.iter().map(&mut map).collect())
        .transpose()
}

/// Maps a nested single object when it is set.
pub fn optional_object<M, W, F>(value: &Value<M>, map: F) -> Result<Option<W>, ConstructError>
where
    F: FnOnce(&M) -> Result<W, ConstructError>,
{
    value.as_known().map(map).transpose()
}

pub fn flatten_string(remote: &Option<String>) -> StringValue {
    remote.clone().into()
}

pub fn flatten_enum<E: GraphEnum>(remote: &Option<E>) -> StringValue {
    remote.as_ref().map(|e| e.as_str().to_string()).into()
}

pub fn flatten_enum_list<E: GraphEnum>(remote: &Option<Vec<E>>) -> ListValue<String> {
    remote
        .as_ref()
        .map(|items| items.iter().map(|e| e.as_str().to_string()).collect())
        .into()
}

pub fn flatten_flags<E: GraphEnum>(remote: &Option<Flags<E>>) -> StringValue {
    remote.as_ref().map(|flags| flags.to_string()).into()
}

pub fn flatten_list<R, M, F>(remote: &Option<Vec<R>>, map: F) -> ListValue<M>
where
    F: FnMut(&R) -> M,
{
    remote.as_ref().map(|items| items.iter().map(map).collect()).into()
}

pub fn flatten_object<R, M, F>(remote: &Option<R>, map: F) -> Value<M>
where
    F: FnOnce(&R) -> M,
{
    remote.as_ref().map(map).into()
}

/// Logs the constructed request body at debug level; never fails the caller.
pub fn log_request_body<B: Serialize>(resource_type: &str, body: &B) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    match serde_json::to_string_pretty(body) {
        Ok(json) => tracing::debug!(resource_type, body = %json, "constructed request body"),
        Err(e) => tracing::warn!(resource_type, error = %e, "could not serialize request body"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::enums::graph_enum;

    graph_enum! {
        enum Level {
            Low => "low",
            High => "high",
        }
    }

    #[test]
    fn test_required_rejects_null_and_unknown() {
        let err = required("display_name", &StringValue::Null).unwrap_err();
        assert_eq!(err.to_string(), "required attribute 'display_name' is null or unknown");
        assert!(required("display_name", &StringValue::Unknown).is_err());
        assert_eq!(required("display_name", &StringValue::from("")).unwrap(), "");
    }

    #[test]
    fn test_optional_skips_null_keeps_empty() {
        assert_eq!(optional(&StringValue::Null), None);
        assert_eq!(optional(&StringValue::Unknown), None);
        assert_eq!(optional(&Value::Known(false)), Some(false));
    }

    #[test]
    fn test_invalid_enum_names_field_and_value() {
        let err = optional_enum::<Level>("state", &"medium".into()).unwrap_err();
        assert_eq!(
            err,
            ConstructError::InvalidEnum {
                field: "state".to_string(),
                value: "medium".to_string(),
                allowed: "low, high".to_string(),
            }
        );
        let message = err.to_string();
        assert!(message.contains("'state'"));
        assert!(message.contains("'medium'"));
    }

    #[test]
    fn test_enum_list_preserves_order() {
        let raw = Value::Known(vec!["high".to_string(), "low".to_string()]);
        let parsed = optional_enum_list::<Level>("levels", &raw).unwrap();
        assert_eq!(parsed, Some(vec![Level::High, Level::Low]));
        assert_eq!(flatten_enum_list(&parsed), raw);
    }

    #[test]
    fn test_enum_list_null_and_empty() {
        assert_eq!(optional_enum_list::<Level>("levels", &Value::Null).unwrap(), None);
        assert_eq!(
            optional_enum_list::<Level>("levels", &Value::Known(vec![])).unwrap(),
            Some(vec![])
        );
    }

    #[test]
    fn test_flags_error_reports_offending_member() {
        let err = optional_flags::<Level>("kinds", &"low,extreme".into()).unwrap_err();
        assert!(matches!(err, ConstructError::InvalidEnum { ref value, .. } if value == "extreme"));
    }

    #[test]
    fn test_flags_must_be_canonical() {
        let err = optional_flags::<Level>("kinds", &"high, low".into()).unwrap_err();
        assert_eq!(
            err,
            ConstructError::NonCanonicalFlags {
                field: "kinds".to_string(),
                value: "high, low".to_string(),
                canonical: "high,low".to_string(),
            }
        );
        assert!(optional_flags::<Level>("kinds", &"low,,high".into()).is_err());
        assert!(optional_flags::<Level>("kinds", &"low,".into()).is_err());
    }

    #[test]
    fn test_canonical_flags_survive_flatten() {
        let raw: StringValue = "high,low".into();
        let parsed = optional_flags::<Level>("kinds", &raw).unwrap();
        assert_eq!(flatten_flags(&parsed), raw);
        assert_eq!(optional_flags::<Level>("kinds", &Value::Null).unwrap(), None);
    }

    #[test]
    fn test_flatten_absent_is_null() {
        assert!(flatten_string(&None).is_null());
        assert!(flatten_enum::<Level>(&None).is_null());
        assert!(flatten_list::<String, String, _>(&None, Clone::clone).is_null());
        assert_eq!(flatten_list(&Some(Vec::<String>::new()), Clone::clone), Value::Known(vec![]));
    }

    #[test]
    fn test_optional_i32_range() {
        assert_eq!(optional_i32("value", &Value::Known(12)).unwrap(), Some(12));
        assert_eq!(optional_i32("value", &Value::Null).unwrap(), None);
        let err = optional_i32("value", &Value::Known(i64::from(i32::MAX) + 1)).unwrap_err();
        assert!(matches!(err, ConstructError::OutOfRange { .. }));
    }

    #[test]
    fn test_optional_list_propagates_first_error() {
        let raw = Value::Known(vec!["low".to_string(), "bad".to_string()]);
        let result = optional_list(&raw, |s| parse_enum::<Level>("items.level", s));
        assert!(result.is_err());
    }
}
