//! Reporting: renders the collected projects into a severity summary and
//! per-team alerts, delivered to the console and to Slack

pub mod console;
pub mod models;
pub mod service;
pub mod slack;

pub use console::ConsoleReporter;
pub use models::{FindingLine, ProjectReport, SeverityCount, SummaryReport, TeamReport};
pub use service::{build_summary, build_team_reports};
pub use slack::SlackReporter;

use async_trait::async_trait;

/// Failure to deliver a report. Delivery failures never affect the collected
/// data; the caller decides whether to keep trying other reporters.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Slack API error: {0}")]
    Api(String),
}

/// A delivery channel for rendered reports.
#[async_trait]
pub trait Reporter: Send + Sync {
    fn name(&self) -> &str;

    async fn send_summary(&self, summary: &SummaryReport) -> Result<(), ReportError>;

    async fn send_team_reports(&self, reports: &[TeamReport]) -> Result<(), ReportError>;
}
