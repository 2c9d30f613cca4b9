//! Value objects for the vulnerability domain

use serde::{Deserialize, Serialize};

/// Finding severity, ordered most severe first.
///
/// `Unknown` is the ordering floor for advisories whose severity a catalog
/// lists explicitly; it is never assigned implicitly (see
/// [`ClassificationError`](crate::application::errors::ClassificationError)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Unknown,
}

impl Severity {
    /// Canonical label, matched exactly against severity catalog entries.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Package ecosystem a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ecosystem {
    Go,
    Npm,
    PyPI,
    Maven,
    Cargo,
    Packagist,
    RubyGems,
    NuGet,
}

impl Ecosystem {
    /// Canonical label, matched case-insensitively against ecosystem catalog entries.
    pub fn label(&self) -> &'static str {
        match self {
            Ecosystem::Go => "Go",
            Ecosystem::Npm => "npm",
            Ecosystem::PyPI => "PyPI",
            Ecosystem::Maven => "Maven",
            Ecosystem::Cargo => "Cargo",
            Ecosystem::Packagist => "Packagist",
            Ecosystem::RubyGems => "RubyGems",
            Ecosystem::NuGet => "NuGet",
        }
    }
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of external identifier attached to a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IdentifierKind {
    Cve,
    Ghsa,
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentifierKind::Cve => f.write_str("CVE"),
            IdentifierKind::Ghsa => f.write_str("GHSA"),
        }
    }
}
