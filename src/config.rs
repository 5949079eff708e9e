//! Terminal host configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any query runs.
//! A `.env` file is honored (loaded by the binary via `dotenvy`); its quoted
//! values may span several lines, which is the natural way to list instances.
//!
//! ```bash
//! export SHLINK_HOSTS=$'https://s.example.com\nhttps://go.example.org'
//! export SHLINK_API_KEYS=$'key-for-s\nkey-for-go'
//! export SHLINK_TAGS="launcher"
//! ```
//!
//! ## Variables
//!
//! - `SHLINK_HOSTS` - Newline-delimited instance hosts (default: empty)
//! - `SHLINK_API_KEYS` - Newline-delimited API keys, one per host (default: empty)
//! - `SHLINK_TAGS` - Newline-delimited tags for every short URL (default: empty)
//! - `SHLINK_TIMEOUT_SECONDS` - Request timeout, 1-300 (default: 30)
//! - `SHLINK_THEME` - `light` or `dark`, selects the icon (default: `light`)
//! - `RUST_LOG` - Log level (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! Empty or mismatched host/key lists are not load errors: the interpreter
//! reports them as result rows, exactly as a launcher host would show them.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::domain::entities::Settings;
use crate::plugin::Theme;

/// Terminal host configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
    /// Whole-request timeout for calls to Shlink, in seconds.
    pub request_timeout_seconds: u64,
    pub theme: Theme,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or enumerated variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let settings = Settings::new(
            env::var("SHLINK_HOSTS").unwrap_or_default(),
            env::var("SHLINK_API_KEYS").unwrap_or_default(),
            env::var("SHLINK_TAGS").unwrap_or_default(),
        );

        let request_timeout_seconds = match env::var("SHLINK_TIMEOUT_SECONDS") {
            Ok(v) => v
                .trim()
                .parse::<u64>()
                .with_context(|| format!("SHLINK_TIMEOUT_SECONDS must be a number, got '{v}'"))?,
            Err(_) => 30,
        };

        let theme = match env::var("SHLINK_THEME") {
            Ok(v) => v
                .parse::<Theme>()
                .map_err(anyhow::Error::msg)
                .context("Invalid SHLINK_THEME")?,
            Err(_) => Theme::default(),
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            settings,
            request_timeout_seconds,
            theme,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `request_timeout_seconds` is 0 or above 300
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_seconds == 0 {
            anyhow::bail!("SHLINK_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.request_timeout_seconds > 300 {
            anyhow::bail!(
                "SHLINK_TIMEOUT_SECONDS is too large (max: 300), got {}",
                self.request_timeout_seconds
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        let hosts = self.settings.host_lines();
        let keys = self.settings.key_lines();

        tracing::info!("Configuration loaded:");
        for (i, host) in hosts.iter().enumerate() {
            let key = keys.get(i).map_or("<missing>".to_string(), |k| mask_api_key(k));
            tracing::info!("  Instance {}: {} (key {})", i + 1, host, key);
        }
        tracing::info!("  Tags: {:?}", self.settings.tag_list());
        tracing::info!("  Timeout: {}s", self.request_timeout_seconds);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks an API key for display, keeping only the last four characters.
///
/// - `0a1b2c3d-4e5f-6789` → `***6789`
/// - keys of four characters or fewer → `***`
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "***".to_string();
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***{tail}")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if parsing or validation fails.
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
