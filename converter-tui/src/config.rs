//! Configuration loading from environment.

use std::env;

use converter_client::DEFAULT_BASE_URL;

/// Application configuration.
pub struct Config {
    /// Base URL of the rate-conversion service.
    pub api_url: String,
    /// Event-loop tick rate in milliseconds.
    pub tick_ms: u64,
    /// Log file path, when logging is enabled.
    pub log_file: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_url = env::var("CONVERTER_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let tick_ms = env::var("CONVERTER_TICK_MS")
            .unwrap_or_else(|_| "100".to_string())
            .parse()?;

        let log_file = env::var("CONVERTER_LOG").ok();

        Ok(Self {
            api_url,
            tick_ms,
            log_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // Env-dependent; only assert the defaults when nothing is set.
        if env::var_os("CONVERTER_API_URL").is_none()
            && env::var_os("CONVERTER_TICK_MS").is_none()
        {
            let config = Config::from_env().unwrap();
            assert_eq!(config.api_url, DEFAULT_BASE_URL);
            assert_eq!(config.tick_ms, 100);
        }
    }
}
