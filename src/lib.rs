//! m365-provider - Microsoft 365 resources managed through Microsoft Graph
//!
//! Each resource maps a typed attribute model onto a Graph entity and runs the
//! shared create, read, update, delete and import lifecycle against it.

pub mod cli;
pub mod config;
pub mod graph;
pub mod mapping;
pub mod output;
pub mod provider;
pub mod resource;
pub mod resources;
pub mod terraform;

mod error;

pub use config::{ConfigError, ProviderConfig};
pub use error::M365Error;
pub use graph::{ApiVersion, Cloud, GraphClient, GraphClients, GraphError};
pub use provider::{M365Provider, PROVIDER_TYPE_NAME};
pub use resource::{GraphResource, Lifecycle, Resource, ResourceResponse};
pub use resources::{ResourceDescriptor, ResourceError};
pub use terraform::{Diagnostics, Severity, StateFile};
