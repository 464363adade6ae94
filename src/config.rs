use std::fmt;

use thiserror::Error;

use crate::graph::Cloud;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("tenant id '{0}' is not a GUID")]
    InvalidTenantId(String),

    #[error("no access token provided. Set M365_ACCESS_TOKEN or use --access-token")]
    MissingAccessToken,
}

/// Provider settings, resolved once before any resource operation runs.
#[derive(Clone, Default)]
pub struct ProviderConfig {
    pub cloud: Cloud,
    pub tenant_id: Option<String>,
    pub access_token: Option<String>,
    pub debug_mode: bool,
}

impl ProviderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(tenant_id) = &self.tenant_id {
            if !is_guid(tenant_id) {
                return Err(ConfigError::InvalidTenantId(tenant_id.clone()));
            }
        }
        match &self.access_token {
            Some(token) if !token.trim().is_empty() => Ok(()),
            _ => Err(ConfigError::MissingAccessToken),
        }
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("cloud", &self.cloud)
            .field("tenant_id", &self.tenant_id)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("debug_mode", &self.debug_mode)
            .finish()
    }
}

/// `8-4-4-4-12` hex groups, e.g. `00000000-0000-0000-0000-000000000000`.
pub fn is_guid(input: &str) -> bool {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];
    let parts: Vec<&str> = input.split('-').collect();
    parts.len() == GROUPS.len()
        && parts
            .iter()
            .zip(GROUPS)
            .all(|(part, len)| part.len() == len && part.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProviderConfig {
        ProviderConfig {
            access_token: Some("token".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_is_guid_valid() {
        assert!(is_guid("00000000-0000-0000-0000-000000000000"));
        assert!(is_guid("62E90394-69F5-4237-9190-012177145e10"));
    }

    #[test]
    fn test_is_guid_invalid() {
        assert!(!is_guid("contoso.onmicrosoft.com"));
        assert!(!is_guid("62e90394-69f5-4237-9190"));
        assert!(!is_guid("62e90394-69f5-4237-9190-012177145e1g"));
        assert!(!is_guid("62e9039469f5423791900121-77145e10"));
        assert!(!is_guid(""));
    }

    #[test]
    fn test_validate_accepts_missing_tenant() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_tenant() {
        let cfg = ProviderConfig {
            tenant_id: Some("contoso".to_string()),
            ..config()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidTenantId("contoso".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_blank_token() {
        let cfg = ProviderConfig {
            access_token: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::MissingAccessToken));
        assert_eq!(ProviderConfig::default().validate(), Err(ConfigError::MissingAccessToken));
    }

    #[test]
    fn test_debug_does_not_expose_token() {
        let cfg = ProviderConfig {
            access_token: Some("super_secret_token_12345".to_string()),
            ..Default::default()
        };
        let debug_output = format!("{:?}", cfg);
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_token_12345"));
    }
}
