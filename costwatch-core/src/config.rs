//! Application configuration.
//!
//! Configuration is environment-sourced but built into an explicit struct
//! once, at startup, and passed by reference to the fetchers and the
//! notifier. Validation collects every missing name before failing so a
//! misconfigured deployment is reported in one pass, before any network
//! call.

use url::Url;

use crate::error::ConfigError;

/// Environment variable carrying the Anthropic organization identifier.
pub const ENV_ANTHROPIC_ORGANIZATION_ID: &str = "ANTHROPIC_ORGANIZATION_ID";
/// Environment variable carrying the OpenAI admin API key.
pub const ENV_OPENAI_ADMIN_KEY: &str = "OPENAI_ADMIN_KEY";
/// Environment variable carrying the OpenRouter API key.
pub const ENV_OPENROUTER_API_KEY: &str = "OPENROUTER_API_KEY";
/// Environment variable carrying the Slack incoming-webhook URL.
pub const ENV_SLACK_WEBHOOK_URL: &str = "SLACK_WEBHOOK_URL";

/// Required environment variable names, in report order.
pub const REQUIRED_VARS: [&str; 4] = [
    ENV_ANTHROPIC_ORGANIZATION_ID,
    ENV_OPENAI_ADMIN_KEY,
    ENV_OPENROUTER_API_KEY,
    ENV_SLACK_WEBHOOK_URL,
];

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Organization identifier for the Anthropic balance endpoint.
    pub anthropic_organization_id: String,
    /// Admin key for the OpenAI cost endpoint, sent as a bearer credential.
    pub openai_admin_key: String,
    /// API key for the OpenRouter credits endpoint, sent as a bearer credential.
    pub openrouter_api_key: String,
    /// Destination webhook for the report message.
    pub slack_webhook_url: String,
}

impl Config {
    /// Loads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] listing every absent or blank
    /// variable, or [`ConfigError::Invalid`] if the webhook URL does not
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary lookup.
    ///
    /// This is the seam the tests use to inject values without touching
    /// process-wide environment state.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing: Vec<String> = REQUIRED_VARS
            .into_iter()
            .filter(|&name| lookup(name).is_none_or(|value| value.trim().is_empty()))
            .map(String::from)
            .collect();

        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let get = |name: &str| lookup(name).unwrap_or_default();
        let slack_webhook_url = get(ENV_SLACK_WEBHOOK_URL);

        Url::parse(&slack_webhook_url).map_err(|e| ConfigError::Invalid {
            name: ENV_SLACK_WEBHOOK_URL.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            anthropic_organization_id: get(ENV_ANTHROPIC_ORGANIZATION_ID),
            openai_admin_key: get(ENV_OPENAI_ADMIN_KEY),
            openrouter_api_key: get(ENV_OPENROUTER_API_KEY),
            slack_webhook_url,
        })
    }
}
