//! Document store errors.

use thiserror::Error;

/// Errors raised while talking to the hosted document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store returned a non-2xx response or an unexpected body.
    #[error("unexpected response from document store: {0}")]
    UnexpectedResponse(String),

    /// The configured base URL cannot carry document paths.
    #[error("invalid document store url {0}")]
    InvalidUrl(String),

    /// A document id that cannot be addressed as a single path segment.
    #[error("invalid document id {0:?}")]
    InvalidId(String),

    /// Document data was not a JSON object.
    #[error("document data must be a JSON object")]
    NotAnObject,

    /// The store was shut down while a caller waited on it.
    #[error("document store closed")]
    Closed,
}

/// A stored document could not be turned into a typed record.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("document {id} in {collection} is malformed: {source}")]
    Malformed {
        collection: &'static str,
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("document {id} in {collection} is invalid: {reason}")]
    Invalid {
        collection: &'static str,
        id: String,
        reason: &'static str,
    },

    #[error("record could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}
