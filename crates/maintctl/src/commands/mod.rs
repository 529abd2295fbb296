//! Command implementations, one module per subcommand.

pub mod info;
pub mod reset;
pub mod status;
pub mod watch;
