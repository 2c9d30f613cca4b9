//! Error types shared across the collection pipeline

/// Terminal failure of one source's collection run.
///
/// Partial data already merged into the collection before the failure is
/// retained; sources never roll back.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("source task failed: {0}")]
    Task(String),
}

/// A provider handed back a severity or ecosystem label the normalized model
/// does not know.
///
/// Deliberately distinct from [`CatalogError`](crate::config::CatalogError):
/// a missing icon is a presentation gap, an unknown label means the provider
/// data cannot be classified at all, and it must never default to an
/// arbitrary severity. The GitHub source skips the affected alert and keeps
/// collecting (see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassificationError {
    #[error("unknown severity label from provider: {0}")]
    UnknownSeverity(String),

    #[error("unknown ecosystem label from provider: {0}")]
    UnknownEcosystem(String),
}
