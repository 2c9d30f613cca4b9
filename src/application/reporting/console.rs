//! Console delivery of rendered reports

use async_trait::async_trait;

use super::models::{SummaryReport, TeamReport};
use super::{ReportError, Reporter};

/// Prints reports to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Reporter for ConsoleReporter {
    fn name(&self) -> &str {
        "console"
    }

    async fn send_summary(&self, summary: &SummaryReport) -> Result<(), ReportError> {
        println!("{summary}");
        Ok(())
    }

    async fn send_team_reports(&self, reports: &[TeamReport]) -> Result<(), ReportError> {
        for report in reports {
            println!("{report}");
        }
        Ok(())
    }
}
