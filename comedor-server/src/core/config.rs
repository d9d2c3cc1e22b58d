//! Server configuration

use chrono_tz::Tz;

/// Runtime configuration, loaded from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// Business timezone; folio day boundaries follow this, not UTC
    pub timezone: Tz,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            timezone: std::env::var("TZ")
                .ok()
                .and_then(|tz| tz.parse().ok())
                .unwrap_or(chrono_tz::Europe::Madrid),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
