//! Port traits (interfaces for adapters).
//!
//! The client depends on these traits, not on concrete implementations:
//! the HTTP transport, the log sink and the clock are all injected.

mod clock;
mod logger;
mod transport;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logger::{GatewayLogger, NoopLogger};
pub use transport::HttpTransport;
