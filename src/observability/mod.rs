//! Observability for rosterdb
//!
//! Structured, synchronous JSON logging.

mod logger;

pub use logger::{Logger, Severity};
