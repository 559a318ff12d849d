//! HTTP client for the hosted document store.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::store::{Document, DocumentStore, Query, StoreError};

/// Configuration for connecting to the hosted document store.
#[derive(Debug, Clone)]
pub struct RestStoreConfig {
    /// Store base URL, e.g. `"https://store.example.com/v1/projects/mesa"`.
    pub base_url: String,

    /// Bearer token sent with every request.
    pub token: String,

    /// How often live queries re-read their collection.
    pub poll_interval: Duration,
}

/// [`DocumentStore`] backed by the hosted store's REST interface.
///
/// The remote end does not push changes, so [`DocumentStore::wait_for_change`]
/// resolves after each poll interval and callers re-run their query.
#[derive(Debug)]
pub struct RestDocumentStore {
    config: RestStoreConfig,
    http: Client,
    revision: AtomicU64,
}

impl RestDocumentStore {
    #[must_use]
    pub fn new(config: RestStoreConfig) -> Self {
        Self {
            config,
            http: Client::new(),
            revision: AtomicU64::new(0),
        }
    }

    /// Base URL followed by `segments`, each escaped as a single path segment.
    fn url(&self, segments: &[&str]) -> Result<Url, StoreError> {
        let base = &self.config.base_url;
        let invalid = |reason: String| StoreError::InvalidUrl(format!("{base}: {reason}"));

        let mut url = Url::parse(base).map_err(|error| invalid(error.to_string()))?;

        url.path_segments_mut()
            .map_err(|()| invalid("cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    fn collection_url(&self, collection: &str, rest: &[&str]) -> Result<Url, StoreError> {
        let mut segments = vec!["collections", collection];

        segments.extend_from_slice(rest);

        self.url(&segments)
    }

    fn document_url(&self, collection: &str, id: &str) -> Result<Url, StoreError> {
        if !is_valid_id(id) {
            return Err(StoreError::InvalidId(id.to_string()));
        }

        self.collection_url(collection, &["documents", id])
    }

    /// Like [`Self::document_url`], but `None` for ids no document can have.
    fn lookup_url(&self, collection: &str, id: &str) -> Result<Option<Url>, StoreError> {
        match self.document_url(collection, id) {
            Ok(url) => Ok(Some(url)),
            Err(StoreError::InvalidId(_)) => {
                debug!(collection, id, "skipping lookup of an invalid document id");

                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, StoreError> {
        Ok(request.bearer_auth(&self.config.token).send().await?)
    }

    fn bump(&self) {
        self.revision.fetch_add(1, Ordering::Relaxed);
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    documents: Vec<Document>,
}

async fn expect_success(response: Response, action: &str) -> Result<Response, StoreError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    Err(StoreError::UnexpectedResponse(format!(
        "{action} failed with status {status}: {text}"
    )))
}

/// Ids travel as one path segment, so they cannot be empty, a dot segment or
/// contain a slash.
fn is_valid_id(id: &str) -> bool {
    !matches!(id, "" | "." | "..") && !id.contains('/')
}

fn ensure_object(data: &Value) -> Result<(), StoreError> {
    if data.is_object() {
        Ok(())
    } else {
        Err(StoreError::NotAnObject)
    }
}

#[async_trait]
impl DocumentStore for RestDocumentStore {
    async fn query(&self, collection: &str, query: &Query) -> Result<Vec<Document>, StoreError> {
        let url = self.collection_url(collection, &["query"])?;

        let response = self.send(self.http.post(url).json(query)).await?;
        let parsed: QueryResponse = expect_success(response, "query").await?.json().await?;

        debug!(collection, count = parsed.documents.len(), "queried documents");

        Ok(parsed.documents)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let Some(url) = self.lookup_url(collection, id)? else {
            return Ok(None);
        };

        let response = self.send(self.http.get(url)).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        Ok(Some(expect_success(response, "get").await?.json().await?))
    }

    async fn create(&self, collection: &str, data: Value) -> Result<Document, StoreError> {
        ensure_object(&data)?;

        let url = self.collection_url(collection, &["documents"])?;
        let response = self
            .send(self.http.post(url).json(&json!({ "data": data })))
            .await?;
        let created = expect_success(response, "create").await?.json().await?;

        self.bump();

        Ok(created)
    }

    async fn set(&self, collection: &str, id: &str, data: Value) -> Result<Document, StoreError> {
        ensure_object(&data)?;

        let response = self
            .send(
                self.http
                    .put(self.document_url(collection, id)?)
                    .json(&json!({ "data": data })),
            )
            .await?;
        let stored = expect_success(response, "set").await?.json().await?;

        self.bump();

        Ok(stored)
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Value,
    ) -> Result<Option<Document>, StoreError> {
        ensure_object(&fields)?;

        let Some(url) = self.lookup_url(collection, id)? else {
            return Ok(None);
        };

        let response = self
            .send(
                self.http
                    .patch(url)
                    .json(&json!({ "data": fields })),
            )
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let updated = expect_success(response, "update").await?.json().await?;

        self.bump();

        Ok(Some(updated))
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<bool, StoreError> {
        let Some(url) = self.lookup_url(collection, id)? else {
            return Ok(false);
        };

        let response = self.send(self.http.delete(url)).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }

        expect_success(response, "delete").await?;

        self.bump();

        Ok(true)
    }

    async fn revision(&self) -> Result<u64, StoreError> {
        Ok(self.revision.load(Ordering::Relaxed))
    }

    async fn wait_for_change(&self, _collection: &str, since: u64) -> Result<u64, StoreError> {
        tokio::time::sleep(self.config.poll_interval).await;

        Ok(self.revision.load(Ordering::Relaxed).max(since + 1))
    }
}
