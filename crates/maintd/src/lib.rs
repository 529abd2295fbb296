//! maintd - Maintenance status daemon
//!
//! Serves synchronized maintenance-window progress over HTTP. All state is
//! one start timestamp; every response is re-derived from elapsed time.

pub mod config;
pub mod routes;
pub mod server;
pub mod state;
