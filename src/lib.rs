//! Order intake core: the [`Order`] entity, the shared [`OrderHistory`]
//! service, and the logging capability the history reports through.
//!
//! The HTTP layer that feeds this core is an external collaborator: it parses
//! the delimited request body into typed values, calls [`OrderHistory`], and
//! renders the returned orders as JSON.

pub mod domain;
pub mod error;
pub mod history;
pub mod logging;
pub mod telemetry;


pub use domain::Order;
pub use error::OrderError;
pub use history::OrderHistory;
pub use logging::{LogSink, MemoryLog, NullLog, TracingLog};
