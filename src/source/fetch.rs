//! Cancellable background fetch tied to a view's lifetime.
//!
//! Each view mount gets a generation number. The fetch result is sent back
//! tagged with that generation; receivers drop results whose generation is
//! no longer current. Dropping the [`FetchTask`] aborts the request.

use log::debug;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::{CatalogSource, LoadOutcome, load_or_empty};

/// A finished fetch, tagged with the generation that requested it.
#[derive(Debug)]
pub struct FetchMessage {
    pub generation: u64,
    pub outcome: LoadOutcome,
}

/// Handle to an in-flight fetch. Aborts the fetch when dropped.
#[derive(Debug)]
pub struct FetchTask {
    generation: u64,
    handle: JoinHandle<()>,
}

impl FetchTask {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for FetchTask {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            debug!("Aborting fetch for generation {}", self.generation);
            self.handle.abort();
        }
    }
}

/// Spawn a fetch on the current tokio runtime.
pub fn spawn_fetch(
    source: Arc<dyn CatalogSource>,
    generation: u64,
    tx: mpsc::UnboundedSender<FetchMessage>,
) -> FetchTask {
    let handle = tokio::spawn(async move {
        let outcome = load_or_empty(source.as_ref()).await;
        // Receiver gone means the view was torn down; nothing to apply
        let _ = tx.send(FetchMessage { generation, outcome });
    });

    FetchTask { generation, handle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::error::Result;
    use async_trait::async_trait;
    use std::time::Duration;

    struct SlowSource {
        delay: Duration,
    }

    #[async_trait]
    impl CatalogSource for SlowSource {
        async fn fetch(&self) -> Result<Catalog> {
            tokio::time::sleep(self.delay).await;
            Catalog::from_json(r#"[{"id": 1, "name": "Midjourney"}]"#)
        }

        fn location(&self) -> &str {
            "slow"
        }
    }

    #[tokio::test]
    async fn test_fetch_delivers_tagged_outcome() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let source = Arc::new(SlowSource {
            delay: Duration::from_millis(1),
        });
        let task = spawn_fetch(source, 7, tx);
        assert_eq!(task.generation(), 7);

        let message = rx.recv().await.unwrap();
        assert_eq!(message.generation, 7);
        assert_eq!(message.outcome.catalog.len(), 1);
    }

    #[tokio::test]
    async fn test_dropping_task_aborts_fetch() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let source = Arc::new(SlowSource {
            delay: Duration::from_secs(60),
        });
        let task = spawn_fetch(source, 1, tx);
        drop(task);

        // Aborted task drops its sender, closing the channel without a message
        let received = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await.unwrap();
        assert!(received.is_none());
    }
}
