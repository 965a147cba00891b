use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// Root configuration
///
/// Every section is optional; pricing and purchase limits are fixed and
/// deliberately not configurable.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

/// Sanitized config for API responses
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub pricing: PricingSummary,
}

/// Fixed prices and limits, reported alongside the config
#[derive(Debug, Clone, Serialize)]
pub struct PricingSummary {
    pub adult_price: u32,
    pub child_price: u32,
    pub infant_price: u32,
    pub max_tickets_per_purchase: u32,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        use crate::ticket::{ADULT_PRICE, CHILD_PRICE, INFANT_PRICE, MAX_TICKETS_PER_PURCHASE};

        Self {
            server: config.server.clone(),
            logging: config.logging.clone(),
            pricing: PricingSummary {
                adult_price: ADULT_PRICE,
                child_price: CHILD_PRICE,
                infant_price: INFANT_PRICE,
                max_tickets_per_purchase: MAX_TICKETS_PER_PURCHASE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 9000

[logging]
format = "json"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host.to_string(), "127.0.0.1");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_deserialize_unknown_log_format_fails() {
        let toml = r#"
[logging]
format = "xml"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_sanitized_config_reports_pricing() {
        let sanitized = SanitizedConfig::from(&Config::default());
        assert_eq!(sanitized.server.port, 8080);
        assert_eq!(sanitized.pricing.adult_price, 20);
        assert_eq!(sanitized.pricing.child_price, 10);
        assert_eq!(sanitized.pricing.infant_price, 0);
        assert_eq!(sanitized.pricing.max_tickets_per_purchase, 20);
    }
}
