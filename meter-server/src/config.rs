//! Server configuration.
//!
//! Read once at startup from the environment (`.env` supported) into an
//! explicit struct that gets passed down — no ambient globals.

const DEFAULT_PORT: u16 = 10000;
const DEFAULT_DB_PATH: &str = "thought_o_meter.db";

/// Externally supplied server settings, with local-development defaults.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on (`PORT`).
    pub port: u16,
    /// Story store connection string (`METER_DB`); a libSQL file path.
    pub db_path: String,
}

impl ServerConfig {
    /// Read configuration from the environment, defaulting anything absent.
    pub fn from_env() -> Self {
        Self {
            port: parse_port(std::env::var("PORT").ok()),
            db_path: std::env::var("METER_DB").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string()),
        }
    }

    /// The socket address to bind.
    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(value: Option<String>) -> u16 {
    value
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_when_absent_or_invalid() {
        assert_eq!(parse_port(None), DEFAULT_PORT);
        assert_eq!(parse_port(Some("not-a-port".to_string())), DEFAULT_PORT);
        assert_eq!(parse_port(Some("70000".to_string())), DEFAULT_PORT);
    }

    #[test]
    fn test_port_parses() {
        assert_eq!(parse_port(Some("8080".to_string())), 8080);
    }

    #[test]
    fn test_addr_format() {
        let config = ServerConfig {
            port: 4242,
            db_path: "x.db".to_string(),
        };
        assert_eq!(config.addr(), "0.0.0.0:4242");
    }
}
