//! Shared, concurrently-written collection of project aggregates
//!
//! All mutation goes through this type's methods; the underlying project list
//! is never handed out to source code. A single lock over the list makes the
//! name-keyed check-and-insert atomic, so two sources racing on the same new
//! repository name cannot create duplicate projects.

use tokio::sync::Mutex;

use crate::config::TeamConfig;

use super::entities::{Finding, Project};

/// Ordered collection of [`Project`]s for one run, keyed by project name.
///
/// Created once per run and shared (`Arc`) by every source task. Projects are
/// created lazily on first mention and live for the remainder of the run;
/// findings and owners are only ever added, never removed.
#[derive(Debug, Default)]
pub struct ProjectCollection {
    projects: Mutex<Vec<Project>>,
}

impl ProjectCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `finding` to the named project, creating the project first if
    /// this is its first mention.
    pub async fn add_finding(&self, name: &str, finding: Finding) {
        let mut projects = self.projects.lock().await;
        Self::find_or_create(&mut projects, name).findings.push(finding);
    }

    /// Inserts `team` into the named project's owner set. Inserting a team
    /// that is already present by value is a no-op.
    pub async fn add_owner(&self, name: &str, team: TeamConfig) {
        let mut projects = self.projects.lock().await;
        Self::find_or_create(&mut projects, name).owners.insert(team);
    }

    /// Sets (or overwrites) the named project's link for one source system,
    /// e.g. `"GitHub" -> https://…/repo`.
    pub async fn add_link(&self, name: &str, source: &str, url: impl Into<String>) {
        let mut projects = self.projects.lock().await;
        Self::find_or_create(&mut projects, name)
            .links
            .insert(source.to_string(), url.into());
    }

    /// Number of projects currently in the collection.
    pub async fn len(&self) -> usize {
        self.projects.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.projects.lock().await.is_empty()
    }

    /// Clones the current project list, in creation order.
    pub async fn snapshot(&self) -> Vec<Project> {
        self.projects.lock().await.clone()
    }

    /// Consumes the collection, handing the project list to the reporting
    /// stage.
    pub fn into_projects(self) -> Vec<Project> {
        self.projects.into_inner()
    }

    // Sole creation path: at most one project per distinct name can ever
    // exist because lookup and insert happen under one lock acquisition.
    fn find_or_create<'a>(projects: &'a mut Vec<Project>, name: &str) -> &'a mut Project {
        if let Some(index) = projects.iter().position(|p| p.name == name) {
            return &mut projects[index];
        }
        projects.push(Project::new(name));
        let last = projects.len() - 1;
        &mut projects[last]
    }
}
