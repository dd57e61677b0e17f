//! Driven port for school persistence.
//!
//! Identifiers cross this boundary as opaque strings: the HTTP layer passes
//! path parameters through unchanged and adapters parse and reject malformed
//! values. Handlers perform no id validation of their own.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{School, SchoolRecord};

/// Errors surfaced by a [`SchoolStore`] adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchoolStoreError {
    /// The caller-supplied id could not be parsed by the store.
    #[error("school id is not valid: {id}")]
    InvalidId {
        /// The offending id as received.
        id: String,
    },
    /// No record exists under the given id.
    #[error("school not found: {id}")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },
    /// Catch-all for storage failures that bubble up from the adapter.
    #[error("school store failed: {message}")]
    Backend {
        /// Adapter-specific failure description.
        message: String,
    },
}

impl SchoolStoreError {
    /// Helper for malformed-id failures.
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId { id: id.into() }
    }

    /// Helper for missing-record failures.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Helper for backend failures.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// Persistence port for school records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SchoolStore: Send + Sync {
    /// Fetch every school in store-defined order.
    async fn fetch_all(&self) -> Result<Vec<School>, SchoolStoreError>;

    /// Fetch one school by id.
    async fn fetch_by_id(&self, id: &str) -> Result<School, SchoolStoreError>;

    /// Persist a new record. The store assigns the id.
    async fn insert(&self, record: SchoolRecord) -> Result<(), SchoolStoreError>;

    /// Replace the whole record stored under `id` with `record`, keeping the
    /// id.
    async fn replace_by_id(
        &self,
        id: &str,
        record: SchoolRecord,
    ) -> Result<(), SchoolStoreError>;

    /// Remove the record stored under `id`.
    async fn delete_by_id(&self, id: &str) -> Result<(), SchoolStoreError>;
}
