//! Hosted document store boundary.
//!
//! Persistence is delegated to a hosted document database. Everything above
//! this module talks to it through [`DocumentStore`] and converts raw
//! documents into typed records with [`record::decode`].

mod document;
mod errors;
pub mod memory;
pub mod record;
pub mod rest;
pub mod watch;

pub use document::{Document, Filter, Query};
pub use errors::{RecordError, StoreError};
pub use memory::MemoryDocumentStore;
pub use rest::{RestDocumentStore, RestStoreConfig};
pub use watch::Feed;

use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;

#[automock]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch every document of `collection` matching `query`.
    async fn query(&self, collection: &str, query: &Query) -> Result<Vec<Document>, StoreError>;

    /// Fetch a single document, `None` when it does not exist.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Create a document under a store-assigned id.
    async fn create(&self, collection: &str, data: Value) -> Result<Document, StoreError>;

    /// Create or replace the document at `id`.
    async fn set(&self, collection: &str, id: &str, data: Value) -> Result<Document, StoreError>;

    /// Merge `fields` into an existing document, `None` when it does not exist.
    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Value,
    ) -> Result<Option<Document>, StoreError>;

    /// Delete a document. Returns `false` when nothing was deleted.
    async fn delete(&self, collection: &str, id: &str) -> Result<bool, StoreError>;

    /// Current change revision, used as the starting point for [`Self::wait_for_change`].
    async fn revision(&self) -> Result<u64, StoreError>;

    /// Resolve once `collection` may have changed after revision `since`,
    /// returning the new revision.
    async fn wait_for_change(&self, collection: &str, since: u64) -> Result<u64, StoreError>;
}
