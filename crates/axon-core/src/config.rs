//! Backend configuration for the Axon client.
//!
//! Resolved once from the environment at startup with hard-coded defaults,
//! then passed by reference (`Arc`) into every component. A missing value is
//! a validation issue reported through [`BackendConfig::validate`], never a
//! startup crash.

use serde::{Deserialize, Serialize};

/// Environment variable for the AI backend base URL.
pub const ENV_AI_API_URL: &str = "AXON_AI_API_URL";
/// Environment variable for the AI backend bearer credential.
pub const ENV_AI_API_KEY: &str = "AXON_AI_API_KEY";
/// Environment variable for the fallback-enabled flag.
pub const ENV_FALLBACK_ENABLED: &str = "AXON_FALLBACK_ENABLED";
/// Environment variable for the gateway base URL used by chat and list calls.
pub const ENV_API_BASE_URL: &str = "AXON_API_BASE_URL";
/// Environment variable for the persistence connection string.
pub const ENV_DATA_STORE_URL: &str = "AXON_DATA_STORE_URL";

/// Immutable backend configuration.
///
/// Built once per process and never mutated afterwards; safe to share
/// read-only across all callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the remote AI backend (health endpoint lives here).
    pub ai_api_url: String,
    /// Bearer credential passed on health probes.
    pub ai_api_key: String,
    /// Whether chat calls may degrade to canned fallback replies.
    pub fallback_enabled: bool,
    /// Gateway base URL for chat and list calls.
    pub api_base_url: String,
    /// Persistence tier connection string (consumed server-side).
    pub data_store_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            ai_api_url: "https://api.next-agi.com/v1".to_string(),
            ai_api_key: "app-local-dev-key".to_string(),
            fallback_enabled: true,
            api_base_url: "http://localhost:3001/api".to_string(),
            data_store_url: "postgresql://localhost:5432/chatbot".to_string(),
        }
    }
}

impl BackendConfig {
    /// Resolve the configuration from process environment variables,
    /// falling back to the hard-coded defaults for anything unset.
    pub fn from_env() -> Self {
        let config = Self::resolve(|key| std::env::var(key).ok());
        tracing::debug!(
            ai_api_url = %config.ai_api_url,
            api_base_url = %config.api_base_url,
            fallback_enabled = config.fallback_enabled,
            "configuration resolved from environment"
        );
        config
    }

    /// Resolve the configuration through an injected lookup function.
    ///
    /// `from_env` delegates here; tests inject a map-backed lookup for
    /// deterministic resolution.
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        // Fallback stays enabled unless explicitly disabled.
        let fallback_enabled = lookup(ENV_FALLBACK_ENABLED)
            .map(|v| v != "false")
            .unwrap_or(true);

        Self {
            ai_api_url: lookup(ENV_AI_API_URL).unwrap_or(defaults.ai_api_url),
            ai_api_key: lookup(ENV_AI_API_KEY).unwrap_or(defaults.ai_api_key),
            fallback_enabled,
            api_base_url: lookup(ENV_API_BASE_URL).unwrap_or(defaults.api_base_url),
            data_store_url: lookup(ENV_DATA_STORE_URL).unwrap_or(defaults.data_store_url),
        }
    }

    /// Check the configuration for missing values.
    ///
    /// Issues are reported in a fixed order (AI URL, AI key, data store URL)
    /// so callers can render them deterministically. Never panics.
    pub fn validate(&self) -> ConfigReport {
        let mut issues = Vec::new();

        if self.ai_api_url.is_empty() {
            issues.push("AI API URL is not configured".to_string());
        }
        if self.ai_api_key.is_empty() {
            issues.push("AI API key is not configured".to_string());
        }
        if self.data_store_url.is_empty() {
            issues.push("data store connection URL is not configured".to_string());
        }

        ConfigReport {
            valid: issues.is_empty(),
            issues,
        }
    }
}

/// Result of a configuration validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigReport {
    /// True when no issues were found.
    pub valid: bool,
    /// One human-readable issue per missing field, in check order.
    pub issues: Vec<String>,
}
