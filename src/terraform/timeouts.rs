use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::value::{StringValue, Value};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error, PartialEq)]
pub enum TimeoutError {
    #[error("invalid {operation} timeout '{value}': {reason}")]
    Invalid {
        operation: &'static str,
        value: String,
        reason: String,
    },
}

/// The `timeouts` block shared by every resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timeouts {
    pub create: StringValue,
    pub read: StringValue,
    pub update: StringValue,
    pub delete: StringValue,
}

impl Value<Timeouts> {
    pub fn create(&self, default: Duration) -> Result<Duration, TimeoutError> {
        self.resolve("create", |t| &t.create, default)
    }

    pub fn read(&self, default: Duration) -> Result<Duration, TimeoutError> {
        self.resolve("read", |t| &t.read, default)
    }

    pub fn update(&self, default: Duration) -> Result<Duration, TimeoutError> {
        self.resolve("update", |t| &t.update, default)
    }

    pub fn delete(&self, default: Duration) -> Result<Duration, TimeoutError> {
        self.resolve("delete", |t| &t.delete, default)
    }

    fn resolve(
        &self,
        operation: &'static str,
        field: impl Fn(&Timeouts) -> &StringValue,
        default: Duration,
    ) -> Result<Duration, TimeoutError> {
        let Some(raw) = self.as_known().and_then(|t| field(t).as_str()) else {
            return Ok(default);
        };
        parse_duration(raw).map_err(|reason| TimeoutError::Invalid {
            operation,
            value: raw.to_string(),
            reason,
        })
    }
}

/// Parses Go duration syntax: `30s`, `5m`, `1h30m`, `1.5h`, `250ms`.
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("empty duration".to_string());
    }
    if input == "0" {
        return Ok(Duration::ZERO);
    }

    let mut total_nanos = 0f64;
    let mut rest = input;

    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if number_len == 0 {
            return Err(format!("expected a number at '{}'", rest));
        }
        let number: f64 = rest[..number_len]
            .parse()
            .map_err(|_| format!("invalid number '{}'", &rest[..number_len]))?;
        rest = &rest[number_len..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let nanos_per_unit = match &rest[..unit_len] {
            "ns" => 1.0,
            "us" | "µs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            "" => return Err("missing unit".to_string()),
            other => return Err(format!("unknown unit '{}'", other)),
        };
        rest = &rest[unit_len..];

        total_nanos += number * nanos_per_unit;
    }

    Ok(Duration::from_nanos(total_nanos.round() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_simple_units() {
        assert_eq!(parse_duration("30s").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_duration("5m").unwrap(), Duration::from_secs(300));
        assert_eq!(parse_duration("2h").unwrap(), Duration::from_secs(7200));
        assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
    }

    #[test]
    fn test_parse_duration_compound() {
        assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5400));
        assert_eq!(parse_duration("1m30s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::from_secs(5400));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("30").is_err());
        assert!(parse_duration("thirty seconds").is_err());
        assert!(parse_duration("10d").is_err());
    }

    #[test]
    fn test_timeouts_default_when_unset() {
        let timeouts: Value<Timeouts> = Value::Null;
        assert_eq!(timeouts.create(DEFAULT_TIMEOUT).unwrap(), DEFAULT_TIMEOUT);

        let partial = Value::Known(Timeouts {
            read: "2m".into(),
            ..Default::default()
        });
        assert_eq!(partial.read(DEFAULT_TIMEOUT).unwrap(), Duration::from_secs(120));
        assert_eq!(partial.delete(DEFAULT_TIMEOUT).unwrap(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_timeouts_invalid_value_names_operation() {
        let timeouts = Value::Known(Timeouts {
            update: "soon".into(),
            ..Default::default()
        });
        let err = timeouts.update(DEFAULT_TIMEOUT).unwrap_err();
        assert!(err.to_string().contains("invalid update timeout 'soon'"));
    }
}
