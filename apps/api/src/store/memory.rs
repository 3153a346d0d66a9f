use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::generation::languages::DEFAULT_LANGUAGE;
use crate::models::document::{DocumentUpdate, GeneratedDocument, NewDocument};
use crate::store::{DocumentStore, StoreError};

/// Process-lifetime store. Contents are lost on restart.
///
/// The lock is held for one operation at a time; concurrent updates to the
/// same record are last-write-wins.
#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<HashMap<Uuid, GeneratedDocument>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn create(&self, document: NewDocument) -> Result<GeneratedDocument, StoreError> {
        let now = Utc::now();
        let record = GeneratedDocument {
            id: Uuid::new_v4(),
            document_type: document.document_type,
            language: document
                .language
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            data: document.data,
            generated_content: document.generated_content,
            created_at: now,
            updated_at: now,
        };

        self.documents
            .write()
            .await
            .insert(record.id, record.clone());
        debug!("Stored document {}", record.id);
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<Option<GeneratedDocument>, StoreError> {
        Ok(self.documents.read().await.get(&id).cloned())
    }

    async fn update(
        &self,
        id: Uuid,
        update: DocumentUpdate,
    ) -> Result<Option<GeneratedDocument>, StoreError> {
        let mut documents = self.documents.write().await;
        let Some(existing) = documents.get_mut(&id) else {
            return Ok(None);
        };

        update.apply(existing);
        existing.updated_at = Utc::now();
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.documents.write().await.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<GeneratedDocument>, StoreError> {
        let mut documents: Vec<_> = self.documents.read().await.values().cloned().collect();
        documents.sort_by_key(|d| d.created_at);
        Ok(documents)
    }
}
