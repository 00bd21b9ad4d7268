//! # Momo Types
//!
//! Domain types and port traits for the mobile-money gateway client.
//! This crate has ZERO IO dependencies - only data structures, wire-shape
//! rules, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Credentials, operation inputs and command identifiers
//! - `http/` - Transport traffic described as plain data
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - Gateway and transport error types
//! - `legacy/` - Flattened `{statusCode, content}` / `{error}` result shape

pub mod domain;
pub mod error;
pub mod http;
pub mod legacy;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Amount, CommandId, Credentials, OperationRequest, SubscriberDetails, SubscriberExtendedData,
    TransactionRequest, ValidTransaction,
};
pub use error::{ErrorKind, GatewayError, TransportError};
pub use http::{Content, GatewayResponse, HttpMethod, HttpRequest, HttpResponse, OperationResult};
pub use ports::{Clock, FixedClock, GatewayLogger, HttpTransport, NoopLogger, SystemClock};
