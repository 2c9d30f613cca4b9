//! Slack delivery via `chat.postMessage`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::models::{SummaryReport, TeamReport};
use super::{ReportError, Reporter};

const SLACK_API_URL: &str = "https://slack.com/api";

#[derive(Debug, Deserialize)]
struct SlackResponse {
    ok: bool,
    error: Option<String>,
}

/// Posts reports to Slack channels. The summary goes to the default channel;
/// each team report goes to that team's channel.
pub struct SlackReporter {
    client: Client,
    token: String,
    base_url: String,
    default_channel: String,
}

impl SlackReporter {
    pub fn new(
        token: impl Into<String>,
        default_channel: impl Into<String>,
    ) -> Result<Self, ReportError> {
        Self::with_endpoint(token, default_channel, SLACK_API_URL)
    }

    /// Substitute API endpoint, used to point delivery at a fixture server.
    pub fn with_endpoint(
        token: impl Into<String>,
        default_channel: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ReportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("vulnwatch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ReportError::Network)?;

        Ok(Self {
            client,
            token: token.into(),
            base_url: base_url.into(),
            default_channel: default_channel.into(),
        })
    }

    async fn post_message(&self, channel: &str, text: &str) -> Result<(), ReportError> {
        let response = self
            .client
            .post(format!("{}/chat.postMessage", self.base_url))
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "channel": channel, "text": text }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ReportError::Api(format!(
                "chat.postMessage returned status {}",
                response.status()
            )));
        }

        let body: SlackResponse = response.json().await?;
        if !body.ok {
            return Err(ReportError::Api(
                body.error.unwrap_or_else(|| "unknown Slack error".to_string()),
            ));
        }

        debug!(channel = %channel, "posted Slack message");
        Ok(())
    }
}

#[async_trait]
impl Reporter for SlackReporter {
    fn name(&self) -> &str {
        "slack"
    }

    async fn send_summary(&self, summary: &SummaryReport) -> Result<(), ReportError> {
        if self.default_channel.is_empty() {
            warn!("no default Slack channel configured, skipping summary");
            return Ok(());
        }
        self.post_message(&self.default_channel, &summary.to_string())
            .await
    }

    async fn send_team_reports(&self, reports: &[TeamReport]) -> Result<(), ReportError> {
        for report in reports {
            if report.channel.is_empty() {
                warn!(team = %report.team.name, "team has no Slack channel, skipping");
                continue;
            }
            self.post_message(&report.channel, &report.to_string()).await?;
        }
        Ok(())
    }
}
