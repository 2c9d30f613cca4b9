//! Composition root: wires configuration into sources, runs the collection
//! fan-out, and hands the result to the reporters

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::application::orchestrator::collect_all;
use crate::application::reporting::{
    build_summary, build_team_reports, ConsoleReporter, Reporter, SlackReporter,
};
use crate::config::Config;
use crate::domain::vulnerability::ProjectCollection;
use crate::infrastructure::sources::{GithubSource, VulnerabilitySource};

/// Run one full scan: collect from every configured source, then report.
///
/// A failing source never blocks the others; its partial data is reported
/// alongside everything else. The run as a whole only errors when every
/// source failed (there is nothing worth reporting) or when no source could
/// even be constructed.
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let collection = Arc::new(ProjectCollection::new());

    let github = GithubSource::with_endpoint(
        config.github_org.clone(),
        config.github_token.clone(),
        config.team.clone(),
        config.github_endpoint.clone(),
    )?;
    let sources: Vec<Box<dyn VulnerabilitySource>> = vec![Box::new(github)];
    let source_count = sources.len();

    info!(sources = source_count, org = %config.github_org, "starting collection run");
    let failures = collect_all(sources, Arc::clone(&collection)).await;

    if !failures.is_empty() && failures.len() == source_count {
        let detail: Vec<String> = failures
            .iter()
            .map(|(name, e)| format!("{name}: {e}"))
            .collect();
        return Err(format!("all sources failed: {}", detail.join("; ")).into());
    }
    for (name, _) in &failures {
        warn!(source = %name, "reporting partial results without this source");
    }

    let projects = collection.snapshot().await;
    info!(projects = projects.len(), "collection finished");

    let summary = build_summary(&projects, &config.severity);
    let team_reports = build_team_reports(&projects, &config);

    let mut reporters: Vec<Box<dyn Reporter>> = vec![Box::new(ConsoleReporter::new())];
    if config.disable_slack {
        info!("Slack alerts disabled");
    } else {
        reporters.push(Box::new(SlackReporter::with_endpoint(
            config.slack_auth_token.clone(),
            config.default_slack_channel.clone(),
            config.slack_endpoint.clone(),
        )?));
    }

    for reporter in &reporters {
        if let Err(e) = reporter.send_summary(&summary).await {
            error!(reporter = %reporter.name(), error = %e, "failed to deliver summary");
        }
        if let Err(e) = reporter.send_team_reports(&team_reports).await {
            error!(reporter = %reporter.name(), error = %e, "failed to deliver team reports");
        }
    }

    Ok(())
}
