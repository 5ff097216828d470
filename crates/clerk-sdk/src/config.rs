//! SDK Configuration
//!
//! Configuration can be built in code, read from a TOML file, or taken from
//! the environment. Environment variables always win over file values.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Default base URL of the Clerk Backend API
pub const DEFAULT_API_URL: &str = "https://api.clerk.com/v1";

/// Standard config file search paths
const CONFIG_PATHS: &[&str] = &["clerk.toml", "./config/clerk.toml"];

/// Configuration for the Clerk SDK
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL for the Clerk Backend API, version prefix included
    pub api_url: String,

    /// Instance secret key (`sk_live_...` / `sk_test_...`)
    pub secret_key: Option<String>,

    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,

    /// User agent string
    pub user_agent: String,

    /// Extra headers sent with every request
    pub custom_headers: HashMap<String, String>,
}

impl Config {
    /// Create a new configuration with the given secret key
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self::default().with_secret_key(secret_key)
    }

    /// Set the instance secret key
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Point the SDK at a different API host, e.g. a local mock
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set custom user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a header sent with every request
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.insert(name.into(), value.into());
        self
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Defaults with environment variable overrides applied
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration from file (if found) with environment variable overrides
    pub fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => {
                info!(?path, "Loading Clerk configuration from file");
                Self::from_file(&path)?
            }
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|name| env::var(name).ok())
    }

    /// Apply `CLERK_*` overrides read through `lookup`.
    ///
    /// Fails if `CLERK_API_TIMEOUT_SECS` is not a whole number of seconds.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("CLERK_SECRET_KEY") {
            self.secret_key = Some(val);
        }
        if let Some(val) = lookup("CLERK_API_URL") {
            self.api_url = val;
        }
        if let Some(val) = lookup("CLERK_API_TIMEOUT_SECS") {
            let secs: u64 = val.trim().parse().map_err(|_| {
                warn!(value = %val, "Invalid CLERK_API_TIMEOUT_SECS");
                Error::Config(format!(
                    "CLERK_API_TIMEOUT_SECS must be a number of seconds, got {}",
                    val
                ))
            })?;
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(val) = lookup("CLERK_USER_AGENT") {
            self.user_agent = val;
        }
        Ok(())
    }

    /// Check the configuration is usable for API calls
    pub fn validate(&self) -> Result<()> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "api_url must be an http(s) URL, got {}",
                self.api_url
            )));
        }
        match self.secret_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(()),
            _ => Err(Error::Config("secret_key is required".to_string())),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            secret_key: None,
            timeout: Duration::from_secs(30),
            user_agent: format!("clerk-sdk-rust/{}", env!("CARGO_PKG_VERSION")),
            custom_headers: HashMap::new(),
        }
    }
}

/// Find the configuration file to use
fn find_config_file() -> Option<PathBuf> {
    if let Ok(path) = env::var("CLERK_CONFIG") {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    CONFIG_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
