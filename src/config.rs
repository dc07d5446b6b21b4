//! Configuration for the AI solver backend.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Base URL of the Generative Language API.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Request timeout when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Settings for [`GeminiBackend`](crate::effects::GeminiBackend).
///
/// A missing API key is not an error here; requests fail with a
/// `ServiceError` when they are made.
///
/// # Example
///
/// ```rust
/// use novacalc::config::{SolverConfig, DEFAULT_MODEL};
/// use std::time::Duration;
///
/// let config = SolverConfig::default()
///     .with_api_key("secret")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.api_key.as_deref(), Some("secret"));
/// assert_eq!(config.model, DEFAULT_MODEL);
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    /// Request timeout in milliseconds; zero selects the default
    pub timeout_ms: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_SECS * 1000,
        }
    }
}

impl SolverConfig {
    /// Load from the process environment.
    ///
    /// Reads `API_KEY` (falling back to `GEMINI_API_KEY`), `NOVACALC_MODEL`,
    /// `NOVACALC_ENDPOINT` and `NOVACALC_TIMEOUT_SECS` (fractional seconds
    /// allowed). Unset, blank, unparsable or non-positive values keep their
    /// defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            api_key: get("API_KEY").or_else(|| get("GEMINI_API_KEY")),
            model: get("NOVACALC_MODEL").unwrap_or(defaults.model),
            endpoint: get("NOVACALC_ENDPOINT").unwrap_or(defaults.endpoint),
            timeout_ms: get("NOVACALC_TIMEOUT_SECS")
                .and_then(|value| value.trim().parse::<f64>().ok())
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
                .filter(|timeout| !timeout.is_zero())
                .map_or(defaults.timeout_ms, duration_millis),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout. A zero duration restores the default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = duration_millis(timeout);
        self
    }

    /// The effective request timeout, never zero.
    pub fn timeout(&self) -> Duration {
        if self.timeout_ms == 0 {
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            Duration::from_millis(self.timeout_ms)
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

/// Whole milliseconds in `timeout`, rounding a non-zero sub-millisecond
/// remainder up so that only a zero duration maps to zero.
fn duration_millis(timeout: Duration) -> u64 {
    let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
    if millis == 0 && !timeout.is_zero() {
        1
    } else {
        millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = SolverConfig::from_lookup(lookup(&[]));
        assert_eq!(config, SolverConfig::default());
        assert!(!config.has_api_key());
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn api_key_prefers_primary_variable() {
        let config = SolverConfig::from_lookup(lookup(&[
            ("API_KEY", "primary"),
            ("GEMINI_API_KEY", "secondary"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("primary"));

        let config = SolverConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "secondary")]));
        assert_eq!(config.api_key.as_deref(), Some("secondary"));
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = SolverConfig::from_lookup(lookup(&[
            ("API_KEY", "  "),
            ("NOVACALC_MODEL", ""),
            ("NOVACALC_TIMEOUT_SECS", "soon"),
        ]));
        assert_eq!(config.api_key, None);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn sub_second_timeouts_are_kept() {
        let config = SolverConfig::default().with_timeout(Duration::from_millis(900));
        assert_eq!(config.timeout(), Duration::from_millis(900));

        let config = SolverConfig::default().with_timeout(Duration::from_micros(10));
        assert_eq!(config.timeout(), Duration::from_millis(1));

        let config = SolverConfig::from_lookup(lookup(&[("NOVACALC_TIMEOUT_SECS", "0.25")]));
        assert_eq!(config.timeout(), Duration::from_millis(250));
    }

    #[test]
    fn zero_timeouts_fall_back_to_default() {
        let default = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

        let config = SolverConfig::default().with_timeout(Duration::ZERO);
        assert_eq!(config.timeout(), default);

        for value in ["0", "-3", "NaN"] {
            let config = SolverConfig::from_lookup(lookup(&[("NOVACALC_TIMEOUT_SECS", value)]));
            assert_eq!(config.timeout(), default, "value {value:?}");
        }

        let config: SolverConfig = serde_json::from_str(r#"{"timeout_ms": 0}"#).unwrap();
        assert_eq!(config.timeout(), default);
    }

    #[test]
    fn overrides_are_read() {
        let config = SolverConfig::from_lookup(lookup(&[
            ("NOVACALC_MODEL", "gemini-2.5-pro"),
            ("NOVACALC_ENDPOINT", "http://localhost:8080"),
            ("NOVACALC_TIMEOUT_SECS", "15"),
        ]));
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.endpoint, "http://localhost:8080");
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn deserializes_partial_config() {
        let config: SolverConfig = serde_json::from_str(r#"{"model": "custom"}"#).unwrap();
        assert_eq!(config.model, "custom");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }
}
