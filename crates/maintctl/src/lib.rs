//! maintctl - CLI display client for the maintenance status service.
//!
//! Polls maintd and renders progress; also carries the operational reset
//! and info commands.

pub mod cli;
pub mod client;
pub mod commands;
pub mod display;
pub mod logging;
