//! Configuration for maintd.
//!
//! Everything comes from the environment, read once at startup. There is no
//! config file; the phase plan itself is compiled in.

use tracing::warn;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3001;

/// Default bind address. Localhost only unless explicitly overridden.
pub const DEFAULT_BIND: &str = "127.0.0.1";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    /// True when MAINTD_ENV is "production"; quiets default log verbosity.
    pub production: bool,
}

impl ServerConfig {
    /// Read configuration from MAINTD_BIND, MAINTD_PORT and MAINTD_ENV.
    ///
    /// An unparsable port warns and falls back to the default rather than
    /// failing startup.
    pub fn from_env() -> Self {
        let bind = std::env::var("MAINTD_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());

        let port = match std::env::var("MAINTD_PORT") {
            Ok(raw) => match raw.parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    warn!("MAINTD_PORT={:?} is not a valid port, using {}", raw, DEFAULT_PORT);
                    DEFAULT_PORT
                }
            },
            Err(_) => DEFAULT_PORT,
        };

        let production = std::env::var("MAINTD_ENV")
            .map(|v| v.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        Self {
            bind,
            port,
            production,
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            production: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listen_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_addr(), "127.0.0.1:3001");
        assert!(!config.production);
    }
}
