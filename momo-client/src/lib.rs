//! # Momo Client
//!
//! Client for a mobile-money payment gateway.
//!
//! ## Architecture
//!
//! - `client` - `MobileMoneyClient`, one method per gateway operation
//! - `executor` - performs a call and classifies the response status
//! - `auth` - Basic-Auth header construction
//! - `transport` - `reqwest` adapter for the `HttpTransport` port
//! - `logger` - `tracing` adapter for the `GatewayLogger` port
//!
//! The client is generic over `T: HttpTransport`, so tests inject a scripted
//! transport and never touch the network.

pub mod auth;
pub mod client;
pub mod executor;
pub mod logger;
pub mod transport;

#[cfg(test)]
mod client_tests;

pub use client::MobileMoneyClient;
pub use executor::RequestExecutor;
pub use logger::TracingLogger;
pub use transport::ReqwestTransport;
