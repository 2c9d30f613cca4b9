//! Pure lookup functions over the configured reference catalogs
//!
//! All three are deterministic given identical catalog ordering: catalogs are
//! scanned front to back and the first match wins, so they do not need to be
//! pre-deduplicated.

use crate::domain::vulnerability::{Ecosystem, Severity};

use super::{EcosystemConfig, SeverityConfig, TeamConfig};

/// A catalog lookup that found no match. Recoverable: callers decide the
/// disposition (the GitHub source treats an unknown team slug as "omit").
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("no notification icon configured for severity {0}")]
    SeverityIcon(String),

    #[error("no notification icon configured for ecosystem {0}")]
    EcosystemIcon(String),

    #[error("no team configured for slug {0}")]
    UnknownTeamSlug(String),
}

/// Returns the notification icon for `severity`, matching the canonical label
/// exactly.
pub fn icon_for_severity<'a>(
    severity: Severity,
    severities: &'a [SeverityConfig],
) -> Result<&'a str, CatalogError> {
    severities
        .iter()
        .find(|entry| entry.label == severity.label())
        .map(|entry| entry.slack_emoji.as_str())
        .ok_or_else(|| CatalogError::SeverityIcon(severity.label().to_string()))
}

/// Returns the notification icon for `ecosystem`, matching the label
/// case-insensitively.
pub fn icon_for_ecosystem<'a>(
    ecosystem: Ecosystem,
    ecosystems: &'a [EcosystemConfig],
) -> Result<&'a str, CatalogError> {
    ecosystems
        .iter()
        .find(|entry| entry.label.eq_ignore_ascii_case(ecosystem.label()))
        .map(|entry| entry.slack_emoji.as_str())
        .ok_or_else(|| CatalogError::EcosystemIcon(ecosystem.label().to_string()))
}

/// Returns the configured team whose GitHub slug matches `slug` exactly.
pub fn team_by_slug<'a>(slug: &str, teams: &'a [TeamConfig]) -> Result<&'a TeamConfig, CatalogError> {
    teams
        .iter()
        .find(|team| team.github_slug == slug)
        .ok_or_else(|| CatalogError::UnknownTeamSlug(slug.to_string()))
}
