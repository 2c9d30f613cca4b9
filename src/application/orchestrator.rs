//! Fan-out of source collection tasks over one shared collection
//!
//! One tokio task per configured source, all writing into the same
//! [`ProjectCollection`]. The orchestrator waits on a completion barrier that
//! every source releases by dropping its [`CompletionGuard`], then joins the
//! task set and reports per-source failures alongside whatever partial data
//! the failed sources already merged.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::domain::vulnerability::ProjectCollection;
use crate::infrastructure::sources::VulnerabilitySource;

use super::errors::SourceError;

/// Completion barrier sized by construction to the number of guards minted.
///
/// Each source task holds one [`CompletionGuard`]; the guard releases the
/// barrier when dropped, so a source signals completion exactly once on every
/// exit path — normal return, error return, or the task future being torn
/// down by a panic. An orchestrator waiting on the barrier can therefore
/// never block indefinitely behind a source that failed before its normal
/// exit.
#[derive(Debug)]
pub struct CompletionBarrier {
    tx: mpsc::Sender<()>,
    rx: mpsc::Receiver<()>,
}

/// Held by one source task for the duration of its collection run. Dropping
/// it releases the barrier; nothing is ever sent through it explicitly.
#[derive(Debug)]
pub struct CompletionGuard {
    _tx: mpsc::Sender<()>,
}

impl CompletionBarrier {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(1);
        Self { tx, rx }
    }

    /// Mints a guard for one source task.
    pub fn guard(&self) -> CompletionGuard {
        CompletionGuard {
            _tx: self.tx.clone(),
        }
    }

    /// Resolves once every minted guard has been dropped.
    pub async fn wait(mut self) {
        drop(self.tx);
        while self.rx.recv().await.is_some() {}
    }
}

impl Default for CompletionBarrier {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs every source concurrently against `collection` and waits for all of
/// them to finish. Returns the per-source failures; an empty vector means the
/// run was fully successful.
pub async fn collect_all(
    sources: Vec<Box<dyn VulnerabilitySource>>,
    collection: Arc<ProjectCollection>,
) -> Vec<(String, SourceError)> {
    let barrier = CompletionBarrier::new();
    let mut tasks = JoinSet::new();

    for source in sources {
        let name = source.name().to_string();
        let collection = Arc::clone(&collection);
        let guard = barrier.guard();
        tasks.spawn(async move {
            let result = source.collect_findings(&collection, guard).await;
            (name, result)
        });
    }

    barrier.wait().await;

    let mut failures = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((name, Ok(()))) => info!(source = %name, "source collection finished"),
            Ok((name, Err(e))) => {
                error!(source = %name, error = %e, "source collection failed, keeping partial data");
                failures.push((name, e));
            }
            Err(e) => {
                error!(error = %e, "source task aborted");
                failures.push(("unknown".to_string(), SourceError::Task(e.to_string())));
            }
        }
    }
    failures
}
