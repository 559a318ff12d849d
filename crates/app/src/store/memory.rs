//! In-process document store.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::{RwLock, watch};
use uuid::Uuid;

use crate::store::{Document, DocumentStore, Query, StoreError};

type Collection = BTreeMap<String, Map<String, Value>>;

/// Document store held entirely in memory.
///
/// Every write bumps a single store-wide revision, which is what
/// [`DocumentStore::wait_for_change`] observes.
#[derive(Debug)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Collection>>,
    revisions: watch::Sender<u64>,
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocumentStore {
    #[must_use]
    pub fn new() -> Self {
        let (revisions, _receiver) = watch::channel(0);

        Self {
            collections: RwLock::new(HashMap::new()),
            revisions,
        }
    }

    fn bump(&self) {
        self.revisions.send_modify(|revision| *revision += 1);
    }
}

fn into_object(data: Value) -> Result<Map<String, Value>, StoreError> {
    match data {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::NotAnObject),
    }
}

fn document(id: &str, data: &Map<String, Value>) -> Document {
    Document {
        id: id.to_string(),
        data: Value::Object(data.clone()),
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn query(&self, collection: &str, query: &Query) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;

        let Some(documents) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        Ok(documents
            .iter()
            .map(|(id, data)| document(id, data))
            .filter(|doc| query.matches(&doc.data))
            .collect())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;

        Ok(collections
            .get(collection)
            .and_then(|documents| documents.get(id))
            .map(|data| document(id, data)))
    }

    async fn create(&self, collection: &str, data: Value) -> Result<Document, StoreError> {
        let id = Uuid::now_v7().simple().to_string();

        self.set(collection, &id, data).await
    }

    async fn set(&self, collection: &str, id: &str, data: Value) -> Result<Document, StoreError> {
        let data = into_object(data)?;
        let created = document(id, &data);

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), data);

        self.bump();

        Ok(created)
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Value,
    ) -> Result<Option<Document>, StoreError> {
        let fields = into_object(fields)?;

        let mut collections = self.collections.write().await;

        let Some(data) = collections
            .get_mut(collection)
            .and_then(|documents| documents.get_mut(id))
        else {
            return Ok(None);
        };

        data.extend(fields);

        let updated = document(id, data);

        drop(collections);

        self.bump();

        Ok(Some(updated))
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<bool, StoreError> {
        let removed = self
            .collections
            .write()
            .await
            .get_mut(collection)
            .and_then(|documents| documents.remove(id))
            .is_some();

        if removed {
            self.bump();
        }

        Ok(removed)
    }

    async fn revision(&self) -> Result<u64, StoreError> {
        Ok(*self.revisions.borrow())
    }

    async fn wait_for_change(&self, _collection: &str, since: u64) -> Result<u64, StoreError> {
        let mut receiver = self.revisions.subscribe();

        let revision = receiver
            .wait_for(|revision| *revision > since)
            .await
            .map_err(|_closed| StoreError::Closed)?;

        Ok(*revision)
    }
}
