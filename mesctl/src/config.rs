//! Client configuration management.
//!
//! Configuration is loaded from a YAML file with environment variable overrides. The configuration
//! file path defaults to `config.yaml` but can be specified via `-f` flag or `MESCTL_CONFIG`
//! environment variable. A missing file is not an error; defaults apply.
//!
//! ## Loading Priority
//!
//! Configuration sources are merged in the following order (later sources override earlier ones):
//!
//! 1. **YAML config file** - Base configuration (default: `config.yaml`)
//! 2. **Environment variables** - Variables prefixed with `MESCTL_` override YAML values
//!
//! ## Usage
//!
//! ```no_run
//! use clap::Parser;
//! use mesctl::config::{Args, Config};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Parse CLI arguments
//! let args = Args::parse();
//!
//! // Load configuration from file and environment
//! let config = Config::load(&args)?;
//!
//! println!("Talking to {}", config.base_url);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Variable Examples
//!
//! ```bash
//! # Point at a remote MES instance
//! MESCTL_BASE_URL="https://mes.example.com"
//!
//! # Authenticate every request
//! MESCTL_TOKEN="eyJhbGciOi..."
//!
//! # Loosen the per-request timeout
//! MESCTL_TIMEOUT=60s
//! ```

use clap::Parser;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::errors::Error;

/// Default MES API address when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Simple CLI args - just for specifying config file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short = 'f', long, env = "MESCTL_CONFIG", default_value = "config.yaml")]
    pub config: String,

    /// Validate configuration and exit without issuing any requests.
    /// Useful for CI/CD pipelines to catch config errors before deployment.
    #[arg(long)]
    pub validate: bool,
}

/// Main client configuration.
///
/// This is the root configuration structure loaded from YAML and environment variables.
/// All fields have sensible defaults defined in the `Default` implementation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the MES API server. API paths (`/api/v1/...`) are joined
    /// onto this per request.
    pub base_url: Url,
    /// Bearer token attached to every request. Absent means requests go out
    /// unauthenticated, which the server may or may not accept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Request timeout applied to every call
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("Failed to parse default base URL"),
            token: None,
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl Config {
    pub fn load(args: &Args) -> Result<Self, figment::Error> {
        let config: Self = Self::figment(args).extract()?;
        config.validate().map_err(|e| figment::Error::from(e.to_string()))?;
        Ok(config)
    }

    /// Validate the configuration for consistency and required fields
    pub fn validate(&self) -> Result<(), Error> {
        if self.base_url.cannot_be_a_base() {
            return Err(Error::Config {
                message: format!(
                    "Config validation: base_url {} cannot serve as a base for API paths",
                    self.base_url
                ),
            });
        }

        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(Error::Config {
                message: format!(
                    "Config validation: base_url scheme must be http or https, got {}",
                    self.base_url.scheme()
                ),
            });
        }

        if self.timeout.is_zero() {
            return Err(Error::Config {
                message: "Config validation: timeout must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    pub fn figment(args: &Args) -> Figment {
        Figment::new()
            // Load base config file
            .merge(Yaml::file(&args.config))
            // Environment variables can still override specific values.
            // MESCTL_CONFIG belongs to clap, not to the config file shape.
            .merge(Env::prefixed("MESCTL_").split("__").ignore(&["config"]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn test_args() -> Args {
        Args {
            config: "test.yaml".to_string(),
            validate: false,
        }
    }

    #[test]
    fn test_defaults_when_file_missing() {
        Jail::expect_with(|_jail| {
            let config = Config::load(&test_args())?;
            assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8000/");
            assert_eq!(config.timeout, Duration::from_secs(30));
            assert!(config.token.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_yaml_file_values() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "test.yaml",
                r#"
base_url: https://mes.example.com
token: secret-token
timeout: 5s
"#,
            )?;
            let config = Config::load(&test_args())?;
            assert_eq!(config.base_url.as_str(), "https://mes.example.com/");
            assert_eq!(config.token.as_deref(), Some("secret-token"));
            assert_eq!(config.timeout, Duration::from_secs(5));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("test.yaml", "base_url: https://file.example.com\n")?;
            jail.set_env("MESCTL_BASE_URL", "https://env.example.com");
            jail.set_env("MESCTL_TIMEOUT", "90s");
            let config = Config::load(&test_args())?;
            assert_eq!(config.base_url.as_str(), "https://env.example.com/");
            assert_eq!(config.timeout, Duration::from_secs(90));
            Ok(())
        });
    }

    #[test]
    fn test_unknown_field_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("test.yaml", "base_urll: https://typo.example.com\n")?;
            assert!(Config::load(&test_args()).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_non_http_base_url_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("test.yaml", "base_url: \"mailto:ops@example.com\"\n")?;
            assert!(Config::load(&test_args()).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_zero_timeout_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("test.yaml", "timeout: 0s\n")?;
            assert!(Config::load(&test_args()).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_config_env_var_is_not_a_config_field() {
        Jail::expect_with(|jail| {
            // Consumed by clap for the file path; must not trip deny_unknown_fields
            jail.set_env("MESCTL_CONFIG", "somewhere-else.yaml");
            let config = Config::load(&test_args())?;
            assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8000/");
            Ok(())
        });
    }
}
