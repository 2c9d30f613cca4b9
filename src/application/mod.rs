//! Application layer - orchestration, reporting, and shared error types

pub mod errors;
pub mod orchestrator;
pub mod reporting;

pub use errors::{ClassificationError, SourceError};
pub use orchestrator::{collect_all, CompletionBarrier, CompletionGuard};
