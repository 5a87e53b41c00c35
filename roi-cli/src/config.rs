//! Application configuration.
//!
//! Loaded from a TOML file when one is given, otherwise every section falls
//! back to its default. Command-line flags are applied on top by `main`.
//!
//! ```toml
//! page_url = "https://example.com/roi"
//!
//! [policy]
//! hours_rounding = "nearest_quarter_hour"
//!
//! [policy.tier_addon]
//! kind = "stepped"
//! baseline_tier = 2
//! step = "0.25"
//!
//! [webhook]
//! url = "https://hooks.example.com/catch/123"
//!
//! [lead_form]
//! require_phone = true
//! ```

use std::{fmt, fs, path::Path};

use roi_core::{EstimatorInput, InvalidPolicy, SavingsPolicy};
use roi_lead::{ValidationRules, WebhookConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PAGE_URL: &str = "https://example.com/roi-calculator";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("config file '{path}' has an invalid policy: {source}")]
    Policy {
        path: String,
        #[source]
        source: InvalidPolicy,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Location reported with each lead.
    pub page_url: String,
    pub policy: SavingsPolicy,
    pub webhook: WebhookConfig,
    pub lead_form: ValidationRules,
    /// Initial slider positions.
    pub defaults: EstimatorInput,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_PAGE_URL.to_string(),
            policy: SavingsPolicy::default(),
            webhook: WebhookConfig::default(),
            lead_form: ValidationRules::default(),
            defaults: EstimatorInput::default(),
        }
    }
}

impl AppConfig {
    /// Parses and validates a configuration document.
    pub fn from_toml_str(
        source: &str,
        origin: &str,
    ) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(source).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })?;
        config
            .policy
            .validate()
            .map_err(|source| ConfigError::Policy {
                path: origin.to_string(),
                source,
            })?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let origin = path.display().to_string();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: origin.clone(),
            source,
        })?;
        Self::from_toml_str(&source, &origin)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

impl fmt::Display for AppConfig {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Page URL:       {}", self.page_url)?;
        writeln!(f, "Tier addon:     {:?}", self.policy.tier_addon)?;
        writeln!(f, "Hours rounding: {:?}", self.policy.hours_rounding)?;
        writeln!(
            f,
            "Webhook:        {}",
            self.webhook.endpoint().unwrap_or("not configured")
        )?;
        writeln!(f, "Require phone:  {}", self.lead_form.require_phone)
    }
}
