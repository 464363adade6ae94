use thiserror::Error;

use crate::config::ConfigError;
use crate::graph::GraphError;
use crate::resources::ResourceError;
use crate::terraform::StateError;

#[derive(Debug, Error)]
pub enum M365Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error("state error: {0}")]
    State(#[from] StateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no instance {resource_type}.{name} in state")]
    MissingInstance { resource_type: String, name: String },
}
