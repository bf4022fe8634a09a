//! # Service Configuration
//!
//! Where the tool adapters find the HR and directory services, which bearer
//! token they present, and how long they wait.

use std::time::Duration;

/// Default HR service location (employees and meetings)
pub const DEFAULT_HR_BASE_URL: &str = "http://localhost:8001";
/// Default directory lookup service location
pub const DEFAULT_DIRECTORY_BASE_URL: &str = "http://localhost:8002";
/// Per-request timeout applied by every adapter
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub const ENV_HR_URL: &str = "ONBOARDING_HR_URL";
pub const ENV_DIRECTORY_URL: &str = "ONBOARDING_DIRECTORY_URL";
pub const ENV_API_TOKEN: &str = "ONBOARDING_API_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "ONBOARDING_TIMEOUT_SECS";

/// Client-side configuration for the tool adapters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub hr_base_url: String,
    pub directory_base_url: String,
    /// Bearer token supplied by the credential mechanism, if any
    pub api_token: Option<String>,
    pub timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            hr_base_url: DEFAULT_HR_BASE_URL.to_string(),
            directory_base_url: DEFAULT_DIRECTORY_BASE_URL.to_string(),
            api_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ServiceConfig {
    /// Build from `ONBOARDING_*` environment variables, keeping defaults
    /// for anything unset or unparsable
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_HR_URL).filter(|v| !v.trim().is_empty()) {
            config = config.with_hr_base_url(url);
        }
        if let Some(url) = lookup(ENV_DIRECTORY_URL).filter(|v| !v.trim().is_empty()) {
            config = config.with_directory_base_url(url);
        }
        if let Some(token) = lookup(ENV_API_TOKEN).filter(|v| !v.trim().is_empty()) {
            config = config.with_api_token(token);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config = config.with_timeout(Duration::from_secs(secs)),
                _ => tracing::warn!("Ignoring invalid {}: {:?}", ENV_TIMEOUT_SECS, raw),
            }
        }

        config
    }

    pub fn with_hr_base_url(mut self, url: impl Into<String>) -> Self {
        self.hr_base_url = trim_base(url.into());
        self
    }

    pub fn with_directory_base_url(mut self, url: impl Into<String>) -> Self {
        self.directory_base_url = trim_base(url.into());
        self
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn trim_base(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.hr_base_url, "http://localhost:8001");
        assert_eq!(config.directory_base_url, "http://localhost:8002");
        assert_eq!(config.api_token, None);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_env_overrides() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            (ENV_HR_URL, "http://hr.internal:9001/"),
            (ENV_DIRECTORY_URL, "http://dir.internal:9002"),
            (ENV_API_TOKEN, "secret"),
            (ENV_TIMEOUT_SECS, "12"),
        ]));

        assert_eq!(config.hr_base_url, "http://hr.internal:9001");
        assert_eq!(config.directory_base_url, "http://dir.internal:9002");
        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Duration::from_secs(12));
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            (ENV_API_TOKEN, "   "),
            (ENV_TIMEOUT_SECS, "soon"),
        ]));

        assert_eq!(config, ServiceConfig::default());
    }
}
