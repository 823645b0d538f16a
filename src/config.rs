//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `TOKEN_SIGNING_SECRET` - HMAC key for API token hashes
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `QUOTES_SEED_FILE` - JSON array of quotes loaded into the in-memory store
//! - `CONFIRMATION_NUMBER_MODE` - `per-read` or `stored` (default: `per-read`)
//! - `ADMIN_TOKEN_HASHES` - Comma-separated HMAC-SHA256 hex hashes of API tokens
//! - `API_RATE_PERIOD_SECS` - Seconds per replenished request (default: 5)
//! - `API_RATE_BURST` - Token bucket size (default: 50)
//!
//! ```bash
//! export TOKEN_SIGNING_SECRET="change-me"
//! export ADMIN_TOKEN_HASHES="<hash printed by: cargo run --bin admin -- token create>"
//! export QUOTES_SEED_FILE="data/quotes.seed.json"
//! ```

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::application::projection::ConfirmationPolicy;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub seed_file: Option<PathBuf>,
    pub confirmation_policy: ConfirmationPolicy,
    /// HMAC signing secret used to hash API tokens.
    /// Loaded from `TOKEN_SIGNING_SECRET`. Must be non-empty.
    pub token_signing_secret: String,
    pub token_hashes: Vec<String>,
    pub rate_period_secs: u64,
    pub rate_burst: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `TOKEN_SIGNING_SECRET` is missing or
    /// `CONFIRMATION_NUMBER_MODE` is not a known mode.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let seed_file = env::var("QUOTES_SEED_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let confirmation_policy = match env::var("CONFIRMATION_NUMBER_MODE") {
            Ok(mode) => mode
                .parse::<ConfirmationPolicy>()
                .context("Invalid CONFIRMATION_NUMBER_MODE")?,
            Err(_) => ConfirmationPolicy::default(),
        };

        let token_signing_secret =
            env::var("TOKEN_SIGNING_SECRET").context("TOKEN_SIGNING_SECRET must be set")?;

        let token_hashes = env::var("ADMIN_TOKEN_HASHES")
            .map(|v| parse_token_hashes(&v))
            .unwrap_or_default();

        let rate_period_secs = env::var("API_RATE_PERIOD_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let rate_burst = env::var("API_RATE_BURST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            seed_file,
            confirmation_policy,
            token_signing_secret,
            token_hashes,
            rate_period_secs,
            rate_burst,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `token_signing_secret` is empty
    /// - any token hash is not 64 hex characters
    /// - either rate limit value is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.token_signing_secret.is_empty() {
            anyhow::bail!("TOKEN_SIGNING_SECRET must not be empty");
        }

        if let Some(bad) = self
            .token_hashes
            .iter()
            .find(|h| h.len() != 64 || !h.chars().all(|c| c.is_ascii_hexdigit()))
        {
            anyhow::bail!(
                "ADMIN_TOKEN_HASHES entries must be 64 hex characters, got '{}'",
                bad
            );
        }

        if self.rate_period_secs == 0 {
            anyhow::bail!("API_RATE_PERIOD_SECS must be greater than 0");
        }
        if self.rate_burst == 0 {
            anyhow::bail!("API_RATE_BURST must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        match &self.seed_file {
            Some(path) => tracing::info!("  Seed file: {}", path.display()),
            None => tracing::info!("  Seed file: none (empty store)"),
        }

        tracing::info!("  Confirmation numbers: {}", self.confirmation_policy);
        tracing::info!("  API tokens configured: {}", self.token_hashes.len());
        tracing::info!(
            "  API rate limit: 1 per {}s, burst {}",
            self.rate_period_secs,
            self.rate_burst
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Splits a comma-separated hash list, dropping blanks.
fn parse_token_hashes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|h| h.trim().to_ascii_lowercase())
        .filter(|h| !h.is_empty())
        .collect()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const HASH: &str = "1ab37ff96f216e67d6bb8a972e240cda41bd989939eafd1246241d1224bb7db2";

    const VARS: [&str; 9] = [
        "LISTEN",
        "LOG_FORMAT",
        "QUOTES_SEED_FILE",
        "CONFIRMATION_NUMBER_MODE",
        "TOKEN_SIGNING_SECRET",
        "ADMIN_TOKEN_HASHES",
        "API_RATE_PERIOD_SECS",
        "API_RATE_BURST",
        "RUST_LOG",
    ];

    fn clear_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            seed_file: None,
            confirmation_policy: ConfirmationPolicy::PerRead,
            token_signing_secret: "test-secret".to_string(),
            token_hashes: vec![HASH.to_string()],
            rate_period_secs: 5,
            rate_burst: 50,
        }
    }

    #[test]
    fn test_parse_token_hashes() {
        assert_eq!(
            parse_token_hashes(&format!(" {}, ,{} ", HASH.to_uppercase(), HASH)),
            vec![HASH.to_string(), HASH.to_string()]
        );
        assert!(parse_token_hashes("").is_empty());
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:3000".to_string();

        config.token_hashes = vec!["abc123".to_string()];
        assert!(config.validate().is_err());
        config.token_hashes = vec![];
        assert!(config.validate().is_ok());

        config.rate_burst = 0;
        assert!(config.validate().is_err());
        config.rate_burst = 50;

        config.rate_period_secs = 0;
        assert!(config.validate().is_err());
        config.rate_period_secs = 5;

        config.token_signing_secret = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        unsafe {
            env::set_var("TOKEN_SIGNING_SECRET", "s3cret");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.seed_file, None);
        assert_eq!(config.confirmation_policy, ConfirmationPolicy::PerRead);
        assert!(config.token_hashes.is_empty());
        assert_eq!(config.rate_period_secs, 5);
        assert_eq!(config.rate_burst, 50);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        unsafe {
            env::set_var("TOKEN_SIGNING_SECRET", "s3cret");
            env::set_var("QUOTES_SEED_FILE", "data/quotes.seed.json");
            env::set_var("CONFIRMATION_NUMBER_MODE", "stored");
            env::set_var("ADMIN_TOKEN_HASHES", HASH);
            env::set_var("API_RATE_BURST", "10");
            env::set_var("API_RATE_PERIOD_SECS", "2");
        }

        let config = load_from_env().unwrap();

        assert_eq!(
            config.seed_file,
            Some(PathBuf::from("data/quotes.seed.json"))
        );
        assert_eq!(config.confirmation_policy, ConfirmationPolicy::Stored);
        assert_eq!(config.token_hashes, vec![HASH.to_string()]);
        assert_eq!(config.rate_burst, 10);
        assert_eq!(config.rate_period_secs, 2);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_signing_secret_is_error() {
        clear_env();
        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_unknown_confirmation_mode_is_error() {
        clear_env();
        unsafe {
            env::set_var("TOKEN_SIGNING_SECRET", "s3cret");
            env::set_var("CONFIRMATION_NUMBER_MODE", "sometimes");
        }

        let err = Config::from_env().unwrap_err();
        assert!(format!("{err:#}").contains("CONFIRMATION_NUMBER_MODE"));

        clear_env();
    }
}
