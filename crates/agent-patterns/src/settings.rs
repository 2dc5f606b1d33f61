use std::env;
use std::fmt::{self, Debug};

use agent_patterns_openai_model::{OpenAIConfig, OpenAIConfigBuilder};

/// Variables holding the API key, in lookup order.
const API_KEY_VARS: [&str; 2] = ["GROQ_API_KEY", "OPENAI_API_KEY"];

/// Provider settings read from the environment.
///
/// The API key comes from `GROQ_API_KEY`, or `OPENAI_API_KEY` when the former
/// is unset. `OPENAI_BASE_URL` and `OPENAI_MODEL` optionally override the
/// endpoint and the model.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    api_key: String,
    base_url: Option<String>,
    model: Option<String>,
}

/// The error returned when no API key is configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettingsError;

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "neither {} nor {} is set", API_KEY_VARS[0], API_KEY_VARS[1])
    }
}

impl std::error::Error for SettingsError {}

impl Settings {
    /// Reads the settings from the process environment.
    #[inline]
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the settings through `lookup`, which maps a variable name to
    /// its value. Empty values count as unset.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SettingsError> {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let api_key = API_KEY_VARS
            .into_iter()
            .find_map(|name| lookup(name))
            .ok_or(SettingsError)?;
        Ok(Self {
            api_key,
            base_url: lookup("OPENAI_BASE_URL"),
            model: lookup("OPENAI_MODEL"),
        })
    }

    /// Creates the provider configuration.
    pub fn to_openai_config(&self) -> OpenAIConfig {
        let mut builder = OpenAIConfigBuilder::with_api_key(&self.api_key);
        if let Some(base_url) = &self.base_url {
            builder = builder.with_base_url(base_url);
        }
        if let Some(model) = &self.model {
            builder = builder.with_model(model);
        }
        builder.build()
    }
}

impl Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}
