mod client;
pub mod cloud;
pub mod enums;
mod error;

pub use client::{ApiVersion, GraphClient, GraphClients, ODataError, with_timeout};
pub use cloud::{Cloud, CloudEndpoints};
pub use enums::{Flags, GraphEnum, UnknownEnumValue};
pub use error::GraphError;
