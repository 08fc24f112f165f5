use aromacraft_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";
pub const DEFAULT_FLAVORDB_BASE_URL: &str = "https://cosylab.iiitd.edu.in/flavordb/";
pub const DEFAULT_RECIPEDB_BASE_URL: &str = "https://cosylab.iiitd.edu.in/recipedb/";
pub const DEFAULT_FOODOSCOPE_BASE_URL: &str = "https://api.foodoscope.com/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// How upstream data sources are wired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// Fixed sample data only, no network
    Sample,
    /// Live upstreams; failures are replaced with sample data
    #[default]
    Fallback,
    /// Live upstreams; failures are reported to the caller
    Strict,
}

impl SourceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceMode::Sample => "sample",
            SourceMode::Fallback => "fallback",
            SourceMode::Strict => "strict",
        }
    }
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sample" => Ok(SourceMode::Sample),
            "fallback" => Ok(SourceMode::Fallback),
            "strict" => Ok(SourceMode::Strict),
            other => Err(Error::InvalidConfig(format!(
                "unknown source mode '{}', expected sample, fallback or strict",
                other
            ))),
        }
    }
}

/// Base URL and credential for one upstream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub base_url: String,
    pub api_key: String,
}

impl Endpoint {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn has_placeholder_key(&self) -> bool {
        self.api_key == PLACEHOLDER_API_KEY
    }
}

#[derive(Debug, Clone)]
pub struct SourcesConfig {
    pub flavordb: Endpoint,
    pub recipedb: Endpoint,
    pub foodoscope: Endpoint,
    pub mode: SourceMode,
    /// Per-request timeout for live upstream calls
    pub timeout: Duration,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            flavordb: Endpoint::new(DEFAULT_FLAVORDB_BASE_URL, PLACEHOLDER_API_KEY),
            recipedb: Endpoint::new(DEFAULT_RECIPEDB_BASE_URL, PLACEHOLDER_API_KEY),
            foodoscope: Endpoint::new(DEFAULT_FOODOSCOPE_BASE_URL, PLACEHOLDER_API_KEY),
            mode: SourceMode::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SourcesConfig {
    /// Load from process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup; unset keys take their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| -> String {
            match lookup(key) {
                Some(value) if !value.trim().is_empty() => value,
                _ => {
                    info!("{} not set, using default", key);
                    default.to_string()
                }
            }
        };

        let config = Self {
            flavordb: Endpoint::new(
                var("FLAVORDB_BASE_URL", DEFAULT_FLAVORDB_BASE_URL),
                var("FLAVORDB_API_KEY", PLACEHOLDER_API_KEY),
            ),
            recipedb: Endpoint::new(
                var("RECIPEDB_BASE_URL", DEFAULT_RECIPEDB_BASE_URL),
                var("RECIPEDB_API_KEY", PLACEHOLDER_API_KEY),
            ),
            foodoscope: Endpoint::new(
                var("FOODOSCOPE_BASE_URL", DEFAULT_FOODOSCOPE_BASE_URL),
                var("FOODOSCOPE_API_KEY", PLACEHOLDER_API_KEY),
            ),
            mode: var("AROMACRAFT_SOURCE_MODE", SourceMode::default().as_str()).parse()?,
            timeout: Duration::from_secs(parse_timeout(&var(
                "AROMACRAFT_TIMEOUT_SECS",
                &DEFAULT_TIMEOUT_SECS.to_string(),
            ))?),
        };

        for name in config.placeholder_keys() {
            warn!("{} is using the placeholder API key", name);
        }

        Ok(config)
    }

    /// Load from process environment, with explicit mode and timeout taking precedence
    pub fn from_env_with(mode: Option<SourceMode>, timeout_secs: Option<u64>) -> Result<Self> {
        Self::from_lookup(with_overrides(mode, timeout_secs, |key| std::env::var(key).ok()))
    }

    /// Upstreams that will be called with the placeholder key; none in sample mode
    pub fn placeholder_keys(&self) -> Vec<&'static str> {
        if self.mode == SourceMode::Sample {
            return Vec::new();
        }
        self.endpoints()
            .into_iter()
            .filter(|(_, endpoint)| endpoint.has_placeholder_key())
            .map(|(name, _)| name)
            .collect()
    }

    pub fn endpoints(&self) -> [(&'static str, &Endpoint); 3] {
        [
            ("flavordb", &self.flavordb),
            ("recipedb", &self.recipedb),
            ("foodoscope", &self.foodoscope),
        ]
    }
}

/// Layer mode and timeout values over `lookup` so they are validated like any other setting
pub fn with_overrides<F>(
    mode: Option<SourceMode>,
    timeout_secs: Option<u64>,
    lookup: F,
) -> impl Fn(&str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    move |key| match key {
        "AROMACRAFT_SOURCE_MODE" if mode.is_some() => mode.map(|m| m.as_str().to_string()),
        "AROMACRAFT_TIMEOUT_SECS" if timeout_secs.is_some() => timeout_secs.map(|t| t.to_string()),
        _ => lookup(key),
    }
}

fn parse_timeout(value: &str) -> Result<u64> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(Error::InvalidConfig("timeout must be at least one second".to_string())),
        Ok(secs) => Ok(secs),
        Err(e) => Err(Error::InvalidConfig(format!("invalid timeout '{}': {}", value, e))),
    }
}
