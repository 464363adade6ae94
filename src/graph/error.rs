use std::time::Duration;

use thiserror::Error;

/// OData error codes Graph uses for missing entities alongside (or instead of) a 404.
const NOT_FOUND_CODES: &[&str] = &[
    "ResourceNotFound",
    "Request_ResourceNotFound",
    "ItemNotFound",
    "NotFound",
];

/// Errors returned by the Graph client.
///
/// SECURITY: Error messages must NEVER contain the bearer token.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Token rejected (401)
    #[error("authentication failed: {message}")]
    Auth { message: String },

    /// Entity does not exist (or is no longer visible) at the requested path
    #[error("resource not found at '{path}': {message}")]
    NotFound { path: String, message: String },

    /// Any other non-success response
    #[error("Graph API error ({status}) {code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// Network-level error (connection failed, TLS, etc.)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Success response whose body does not match the expected model
    #[error("failed to decode Graph response: {0}")]
    Decode(String),

    /// The per-operation timeout elapsed before the call completed
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

impl GraphError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, GraphError::NotFound { .. })
    }

    pub(crate) fn from_status(path: &str, status: u16, code: String, message: String) -> Self {
        if status == 404 || NOT_FOUND_CODES.contains(&code.as_str()) {
            return GraphError::NotFound {
                path: path.to_string(),
                message,
            };
        }
        if status == 401 {
            return GraphError::Auth { message };
        }
        GraphError::Api {
            status,
            code,
            message,
        }
    }
}
