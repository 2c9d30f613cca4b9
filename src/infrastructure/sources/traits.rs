//! Capability contract implemented by every vulnerability source

use async_trait::async_trait;

use crate::application::errors::SourceError;
use crate::application::orchestrator::CompletionGuard;
use crate::domain::vulnerability::ProjectCollection;

/// A component that can populate the shared [`ProjectCollection`] from one
/// external vulnerability-data system.
///
/// Implementations run as independently scheduled tasks, concurrently with
/// sibling sources, and may only add to the collection through its
/// synchronized operations — never remove or overwrite another source's data.
/// The [`CompletionGuard`] is held for the duration of the run and released
/// on drop, which covers every exit path including early error returns.
#[async_trait]
pub trait VulnerabilitySource: Send + Sync {
    /// Source system name, also used as the link key on projects.
    fn name(&self) -> &str;

    /// Collects findings into `collection`. An error is terminal for this
    /// source; data merged before the failure stays in the collection.
    async fn collect_findings(
        &self,
        collection: &ProjectCollection,
        guard: CompletionGuard,
    ) -> Result<(), SourceError>;
}
