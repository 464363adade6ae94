pub mod diagnostics;
pub mod schema;
pub mod state;
pub mod timeouts;
pub mod value;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use schema::{Attribute, AttributeType, Mode, Schema};
pub use state::{ResourceInstance, StateError, StateFile};
pub use timeouts::{DEFAULT_TIMEOUT, TimeoutError, Timeouts};
pub use value::{BoolValue, Int64Value, ListValue, StringValue, UNKNOWN_VALUE, Value};
