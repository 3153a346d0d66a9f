//! Document store seam.
//!
//! `DocumentStore` is the CRUD contract handlers depend on; swap the
//! implementation in `AppState` without touching callers.

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::document::{DocumentUpdate, GeneratedDocument, NewDocument};

pub use memory::MemoryDocumentStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Reserved for persistent backends; the in-memory store never fails.
    #[allow(dead_code)]
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// CRUD over generated documents. Missing ids are `Ok(None)` / `Ok(false)`,
/// not errors.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Assigns a fresh id, stamps both timestamps, and returns the stored record.
    async fn create(&self, document: NewDocument) -> Result<GeneratedDocument, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<GeneratedDocument>, StoreError>;

    /// Merges `update` into the record and restamps `updated_at`.
    async fn update(
        &self,
        id: Uuid,
        update: DocumentUpdate,
    ) -> Result<Option<GeneratedDocument>, StoreError>;

    /// Returns whether a record existed.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn list(&self) -> Result<Vec<GeneratedDocument>, StoreError>;
}
