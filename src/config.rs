//! Configuration loading and constants.
//!
//! There is no config file and no CLI surface: the service reads `PORT` and
//! `APP_ENV` from the process environment at startup and falls back to
//! defaults when they are unset or invalid. Parsing is expressed over
//! captured values so it can be tested without touching the real environment.

/// Default listener port when `PORT` is unset or invalid
pub const DEFAULT_PORT: u16 = 3000;

/// Default environment name when `APP_ENV` is unset
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Fixed message returned by the root route
pub const API_MESSAGE: &str = "API is running";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "pulse=debug,axum=info";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listener port, from `PORT`
    pub port: u16,
    /// Environment name, from `APP_ENV`, echoed by the root route
    pub environment: String,
    /// Version string, populated from the crate version
    pub version: String,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_values(std::env::var("PORT").ok(), std::env::var("APP_ENV").ok())
    }

    fn from_values(port: Option<String>, environment: Option<String>) -> Self {
        Self {
            port: parse_port(port.as_deref()),
            environment: environment
                .filter(|env| !env.is_empty())
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Parse a port value, falling back to the default when unset or invalid.
fn parse_port(raw: Option<&str>) -> u16 {
    match raw {
        None => DEFAULT_PORT,
        Some(value) => match value.parse() {
            Ok(port) => port,
            Err(_) => {
                tracing::warn!(value, "Invalid PORT value, using default");
                DEFAULT_PORT
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset() {
        assert_eq!(parse_port(None), DEFAULT_PORT);
    }

    #[test]
    fn port_uses_valid_value() {
        assert_eq!(parse_port(Some("8080")), 8080);
    }

    #[test]
    fn port_defaults_on_invalid_value() {
        assert_eq!(parse_port(Some("not-a-port")), DEFAULT_PORT);
        assert_eq!(parse_port(Some("")), DEFAULT_PORT);
        // out of range for u16
        assert_eq!(parse_port(Some("70000")), DEFAULT_PORT);
    }

    #[test]
    fn environment_defaults_when_unset() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.environment, DEFAULT_ENVIRONMENT);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn environment_uses_configured_value() {
        let config = AppConfig::from_values(Some("8080".into()), Some("production".into()));
        assert_eq!(config.environment, "production");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn empty_environment_falls_back_to_default() {
        let config = AppConfig::from_values(None, Some(String::new()));
        assert_eq!(config.environment, DEFAULT_ENVIRONMENT);
    }
}
