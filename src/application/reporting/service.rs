//! Builds reports from the collected projects and the reference catalogs

use std::collections::BTreeMap;

use crate::config::{icon_for_ecosystem, icon_for_severity, Config, SeverityConfig};
use crate::domain::vulnerability::{Project, Severity};

use super::models::{FindingLine, ProjectReport, SeverityCount, SummaryReport, TeamReport};

/// Builds the organization-wide severity summary. A severity with no catalog
/// icon still appears in the summary; its icon renders as an empty string.
pub fn build_summary(projects: &[Project], severities: &[SeverityConfig]) -> SummaryReport {
    let mut counts: BTreeMap<Severity, usize> = BTreeMap::new();
    for project in projects {
        for finding in &project.findings {
            *counts.entry(finding.severity).or_insert(0) += 1;
        }
    }

    SummaryReport {
        total_projects: projects.len(),
        affected_projects: projects.iter().filter(|p| !p.findings.is_empty()).count(),
        severities: counts
            .into_iter()
            .map(|(severity, count)| SeverityCount {
                severity,
                icon: icon_for_severity(severity, severities)
                    .unwrap_or_default()
                    .to_string(),
                count,
            })
            .collect(),
    }
}

/// Builds one report per configured team that owns at least one project with
/// findings. Teams and their projects are ordered by name so output is
/// deterministic regardless of how the owner sets were populated.
pub fn build_team_reports(projects: &[Project], config: &Config) -> Vec<TeamReport> {
    let mut teams: Vec<_> = config.team.iter().collect();
    teams.sort_by(|a, b| a.name.cmp(&b.name));

    let mut reports = Vec::new();
    for team in teams {
        let mut owned: Vec<&Project> = projects
            .iter()
            .filter(|p| !p.findings.is_empty() && p.owners.contains(team))
            .collect();
        if owned.is_empty() {
            continue;
        }
        owned.sort_by(|a, b| a.name.cmp(&b.name));

        let channel = if team.slack_channel.is_empty() {
            config.default_slack_channel.clone()
        } else {
            team.slack_channel.clone()
        };

        reports.push(TeamReport {
            team: team.clone(),
            channel,
            projects: owned
                .into_iter()
                .map(|project| project_report(project, config))
                .collect(),
        });
    }
    reports
}

fn project_report(project: &Project, config: &Config) -> ProjectReport {
    ProjectReport {
        name: project.name.clone(),
        link: project.links.get("GitHub").cloned(),
        findings: project
            .findings
            .iter()
            .map(|finding| FindingLine {
                icon: icon_for_ecosystem(finding.ecosystem, &config.ecosystem)
                    .unwrap_or_default()
                    .to_string(),
                package_name: finding.package_name.clone(),
                severity: finding.severity,
                identifiers: finding.identifiers.values().cloned().collect(),
            })
            .collect(),
    }
}
