//! Domain models for the gateway client.

pub mod command;
pub mod credentials;
pub mod subscriber;
pub mod transaction;

pub use command::{CommandId, OperationRequest};
pub use credentials::Credentials;
pub use subscriber::{SubscriberDetails, SubscriberExtendedData};
pub use transaction::{Amount, TransactionRequest, ValidTransaction};

/// Returns true when an optional string input counts as missing.
pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
