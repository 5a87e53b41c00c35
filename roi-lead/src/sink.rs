use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::payload::LeadSubmission;

/// Placeholder URL shipped in sample configuration files.
pub const PLACEHOLDER_WEBHOOK_URL: &str = "YOUR_WEBHOOK_URL_HERE";

/// Placeholder left in configurations copied from the embedded widget.
pub const LEGACY_PLACEHOLDER_WEBHOOK_URL: &str = "YOUR_ZAPIER_WEBHOOK_URL_HERE";

fn is_placeholder(url: &str) -> bool {
    url == PLACEHOLDER_WEBHOOK_URL || url == LEGACY_PLACEHOLDER_WEBHOOK_URL
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("webhook responded with status {0}")]
    Status(u16),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Network(err.to_string())
    }
}

/// Somewhere a lead can be delivered.
#[async_trait]
pub trait LeadSink: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    async fn deliver(
        &self,
        submission: &LeadSubmission,
    ) -> Result<(), TransportError>;
}

/// Destination for lead submissions.
///
/// | url                            | meaning        |
/// |--------------------------------|----------------|
/// | absent or empty                | not configured |
/// | `YOUR_WEBHOOK_URL_HERE`        | not configured |
/// | `YOUR_ZAPIER_WEBHOOK_URL_HERE` | not configured |
/// | anything else                  | POST target    |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    pub url: Option<String>,
}

impl WebhookConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }

    /// The configured URL, or `None` when the integration is not set up.
    pub fn endpoint(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty() && !is_placeholder(url))
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint().is_some()
    }

    /// Builds a [`WebhookSink`] for the configured endpoint, if any.
    pub fn build_sink(&self) -> Option<Box<dyn LeadSink>> {
        self.endpoint()
            .map(|url| Box::new(WebhookSink::new(url)) as Box<dyn LeadSink>)
    }
}

/// Posts leads as JSON to an HTTP webhook.
pub struct WebhookSink {
    client: reqwest::Client,
    url: String,
}

impl WebhookSink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl LeadSink for WebhookSink {
    fn name(&self) -> &'static str {
        "webhook"
    }

    async fn deliver(
        &self,
        submission: &LeadSubmission,
    ) -> Result<(), TransportError> {
        debug!(url = %self.url, "posting lead to webhook");

        // `.json()` sets `Content-Type: application/json`.
        let response = self.client.post(&self.url).json(submission).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn endpoint_is_none_without_url() {
        assert_eq!(WebhookConfig::default().endpoint(), None);
        assert!(!WebhookConfig::default().is_configured());
    }

    #[test]
    fn endpoint_is_none_for_blank_url() {
        assert_eq!(WebhookConfig::new("   ").endpoint(), None);
    }

    #[test]
    fn endpoint_is_none_for_placeholder() {
        assert_eq!(WebhookConfig::new(PLACEHOLDER_WEBHOOK_URL).endpoint(), None);
        assert!(WebhookConfig::new(PLACEHOLDER_WEBHOOK_URL).build_sink().is_none());
    }

    #[test]
    fn endpoint_is_none_for_widget_placeholder() {
        let config = WebhookConfig::new(format!(" {LEGACY_PLACEHOLDER_WEBHOOK_URL} "));

        assert_eq!(config.endpoint(), None);
        assert!(config.build_sink().is_none());
    }

    #[test]
    fn endpoint_trims_configured_url() {
        let config = WebhookConfig::new(" https://hooks.example.com/lead ");

        assert_eq!(config.endpoint(), Some("https://hooks.example.com/lead"));
        assert!(config.is_configured());
    }

    #[test]
    fn build_sink_returns_webhook_sink() {
        let sink = WebhookConfig::new("https://hooks.example.com/lead").build_sink();

        assert_eq!(sink.map(|s| s.name()), Some("webhook"));
    }

    #[test]
    fn status_error_names_the_code() {
        assert_eq!(
            TransportError::Status(502).to_string(),
            "webhook responded with status 502"
        );
    }
}
