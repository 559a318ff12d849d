//! Typed record helpers.
//!
//! Documents are parsed into typed records as soon as they leave the store.
//! Missing or mistyped fields reject the document; unknown fields are ignored.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::warn;

use crate::store::{Document, RecordError};

/// Deserialize the data of `document` into `T`.
///
/// # Errors
///
/// Returns [`RecordError::Malformed`] when the data does not match `T`.
pub fn decode<T: DeserializeOwned>(
    collection: &'static str,
    document: &Document,
) -> Result<T, RecordError> {
    T::deserialize(&document.data).map_err(|source| RecordError::Malformed {
        collection,
        id: document.id.clone(),
        source,
    })
}

/// Serialize `record` into document data.
///
/// # Errors
///
/// Returns [`RecordError::Encode`] when serialization fails.
pub fn encode<T: Serialize>(record: &T) -> Result<Value, RecordError> {
    serde_json::to_value(record).map_err(RecordError::Encode)
}

/// Parse every document with `parse`, dropping (and logging) the ones that fail.
pub fn decode_all<R, F>(documents: Vec<Document>, mut parse: F) -> Vec<R>
where
    F: FnMut(Document) -> Result<R, RecordError>,
{
    documents
        .into_iter()
        .filter_map(|document| match parse(document) {
            Ok(record) => Some(record),
            Err(error) => {
                warn!("skipping document: {error}");

                None
            }
        })
        .collect()
}

#[must_use]
pub fn invalid(collection: &'static str, id: &str, reason: &'static str) -> RecordError {
    RecordError::Invalid {
        collection,
        id: id.to_string(),
        reason,
    }
}
