//! Core entities: findings and the per-repository project aggregate

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::config::TeamConfig;

use super::value_objects::{Ecosystem, IdentifierKind, Severity};

/// External identifiers attached to a finding, keyed by kind.
pub type FindingIdentifiers = BTreeMap<IdentifierKind, String>;

/// One normalized vulnerability record, attributed to a package within a
/// project. Immutable once constructed; owned by the project that contains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub ecosystem: Ecosystem,
    pub severity: Severity,
    pub description: String,
    pub package_name: String,
    pub identifiers: FindingIdentifiers,
}

/// Aggregated view of one repository across all sources: its findings, the
/// teams that own it, and cross-reference links back to each source system.
///
/// The project name is the merge key for a run: every source reporting the
/// same name contributes to the same project. Findings are append-only and
/// keep the discovery order within one source; owners are a value-equality
/// set, so repeated insertion of the same team is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub links: HashMap<String, String>,
    pub findings: Vec<Finding>,
    pub owners: HashSet<TeamConfig>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            links: HashMap::new(),
            findings: Vec::new(),
            owners: HashSet::new(),
        }
    }
}
