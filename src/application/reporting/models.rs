//! Report data models
//!
//! Rendered views of the collected projects, ready for console output or
//! chat delivery. Building them is deterministic: teams and projects are
//! sorted by name even though project ownership is set-typed.

use serde::Serialize;

use crate::config::TeamConfig;
use crate::domain::vulnerability::Severity;

/// Organization-wide severity breakdown for one run.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub total_projects: usize,
    pub affected_projects: usize,
    /// Per-severity counts, most severe first; zero-count severities omitted.
    pub severities: Vec<SeverityCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeverityCount {
    pub severity: Severity,
    pub icon: String,
    pub count: usize,
}

/// Findings for the projects one configured team owns.
#[derive(Debug, Clone, Serialize)]
pub struct TeamReport {
    pub team: TeamConfig,
    /// Delivery destination: the team's channel, or the run default.
    pub channel: String,
    pub projects: Vec<ProjectReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectReport {
    pub name: String,
    pub link: Option<String>,
    pub findings: Vec<FindingLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FindingLine {
    pub icon: String,
    pub package_name: String,
    pub severity: Severity,
    pub identifiers: Vec<String>,
}

impl std::fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Security scan summary")?;
        writeln!(
            f,
            "  {} of {} repositories have open findings",
            self.affected_projects, self.total_projects
        )?;
        for row in &self.severities {
            if row.icon.is_empty() {
                writeln!(f, "  {}: {}", row.severity, row.count)?;
            } else {
                writeln!(f, "  {} {}: {}", row.icon, row.severity, row.count)?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for TeamReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Findings for {}", self.team.name)?;
        for project in &self.projects {
            match &project.link {
                Some(link) => writeln!(f, "  {} ({})", project.name, link)?,
                None => writeln!(f, "  {}", project.name)?,
            }
            for line in &project.findings {
                let ids = if line.identifiers.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", line.identifiers.join(", "))
                };
                if line.icon.is_empty() {
                    writeln!(f, "    {} {}{}", line.severity, line.package_name, ids)?;
                } else {
                    writeln!(
                        f,
                        "    {} {} {}{}",
                        line.icon, line.severity, line.package_name, ids
                    )?;
                }
            }
        }
        Ok(())
    }
}
