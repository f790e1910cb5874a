//! rosterdb - a minimal file-backed person record HTTP service
//!
//! Create/read/update/delete over a single flat collection of person
//! records, persisted as a whole-file JSON snapshot after every mutation.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod query;
pub mod service;
pub mod store;
pub mod validator;
