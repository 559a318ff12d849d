//! Live query subscriptions.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::store::{Document, DocumentStore, Query};

/// Latest state of a live query.
#[derive(Debug, Clone, PartialEq)]
pub enum Feed<T> {
    /// The first result has not arrived yet.
    Loading,

    /// Current matching records.
    Ready(Vec<T>),

    /// The last read failed.
    Failed(String),
}

impl<T> Feed<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn ready(&self) -> Option<&[T]> {
        match self {
            Self::Ready(records) => Some(records),
            Self::Loading | Self::Failed(_) => None,
        }
    }
}

/// Subscribe to `query` on `collection`.
///
/// A background task re-runs the query after every change reported by the
/// store and publishes the records produced by `shape`. Subscribers only wake
/// when the published records differ. The task stops once every receiver has
/// been dropped.
pub fn watch_query<T, F>(
    store: Arc<dyn DocumentStore>,
    collection: &'static str,
    query: Query,
    shape: F,
) -> watch::Receiver<Feed<T>>
where
    T: PartialEq + Send + Sync + 'static,
    F: Fn(Vec<Document>) -> Vec<T> + Send + 'static,
{
    let (sender, receiver) = watch::channel(Feed::Loading);

    tokio::spawn(async move {
        loop {
            let since = match store.revision().await {
                Ok(revision) => revision,
                Err(error) => {
                    warn!(collection, "live query stopped: {error}");
                    sender.send_replace(Feed::Failed(error.to_string()));

                    return;
                }
            };

            let feed = match store.query(collection, &query).await {
                Ok(documents) => Feed::Ready(shape(documents)),
                Err(error) => {
                    warn!(collection, "live query read failed: {error}");

                    Feed::Failed(error.to_string())
                }
            };

            sender.send_if_modified(|current| {
                if *current == feed {
                    false
                } else {
                    *current = feed;
                    true
                }
            });

            tokio::select! {
                () = sender.closed() => {
                    debug!(collection, "live query has no subscribers left");

                    return;
                }
                changed = store.wait_for_change(collection, since) => {
                    if let Err(error) = changed {
                        warn!(collection, "live query stopped: {error}");
                        sender.send_replace(Feed::Failed(error.to_string()));

                        return;
                    }
                }
            }
        }
    });

    receiver
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use testresult::TestResult;

    use super::*;
    use crate::store::{MemoryDocumentStore, MockDocumentStore, StoreError};

    fn names(documents: Vec<Document>) -> Vec<String> {
        documents
            .into_iter()
            .filter_map(|doc| doc.data["name"].as_str().map(str::to_string))
            .collect()
    }

    #[tokio::test]
    async fn feed_reflects_writes() -> TestResult {
        let store = Arc::new(MemoryDocumentStore::new());
        let mut feed = watch_query(store.clone(), "Menu", Query::all(), names);

        tokio::time::timeout(
            Duration::from_secs(1),
            feed.wait_for(|feed| feed.ready().is_some_and(<[String]>::is_empty)),
        )
        .await??;

        store.create("Menu", json!({ "name": "Soup" })).await?;

        tokio::time::timeout(
            Duration::from_secs(1),
            feed.wait_for(|feed| *feed == Feed::Ready(vec!["Soup".to_string()])),
        )
        .await??;

        Ok(())
    }

    #[tokio::test]
    async fn read_failures_are_published() -> TestResult {
        let mut store = MockDocumentStore::new();

        store.expect_revision().returning(|| Ok(0));
        store
            .expect_query()
            .returning(|_, _| Err(StoreError::UnexpectedResponse("boom".to_string())));
        store
            .expect_wait_for_change()
            .returning(|_, _| Err(StoreError::Closed));

        let mut feed = watch_query(Arc::new(store), "Menu", Query::all(), names);

        let state = tokio::time::timeout(
            Duration::from_secs(1),
            feed.wait_for(|feed| matches!(feed, Feed::Failed(_))),
        )
        .await??
        .clone();

        assert!(matches!(state, Feed::Failed(_)));

        Ok(())
    }
}
