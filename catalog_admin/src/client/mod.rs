//! Remote collection client.
//!
//! [`CollectionApi`] is the seam between the controller and the network: one
//! entity collection's list/create/update/delete, with every failure mapped
//! to [`ClientError`]. [`RestClient`] is the real HTTP implementation; tests
//! drive the controller through in-memory fakes of the same trait.

pub mod rest;

pub use rest::RestClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Resource;

/// Errors from a single attempt against the backend.
///
/// One attempt per invocation by design: no retry, no backoff. The admin
/// tool is human-paced and the user simply tries again.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connect, DNS, body decode).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status. The error body, if
    /// any, is not parsed; every non-2xx is the same generic failure.
    #[error("server returned {status} on {operation}")]
    Status {
        status: reqwest::StatusCode,
        operation: &'static str,
    },
}

/// Remote operations for one entity collection.
#[async_trait]
pub trait CollectionApi<R: Resource>: Send + Sync {
    /// Fetches the collection, optionally filtered by equality on the
    /// schema's filter field.
    async fn list(&self, filter: Option<&str>) -> Result<Vec<R>, ClientError>;

    /// Creates a record and returns the server's representation of it.
    async fn create(&self, payload: &R::Payload) -> Result<R, ClientError>;

    /// Updates the record keyed by `key`. For rename-style entities the key
    /// is the old identifier and the payload carries the new one.
    async fn update(&self, key: &R::Key, payload: &R::Payload) -> Result<R, ClientError>;

    /// Deletes the record keyed by `key`.
    async fn delete(&self, key: &R::Key) -> Result<(), ClientError>;
}
