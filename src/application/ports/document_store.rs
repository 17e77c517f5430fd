use async_trait::async_trait;

use crate::domain::{DocumentId, DocumentRecord};

/// Process-lifetime mapping from document id to its stored record. Ids are
/// generated fresh per upload and never reused, so inserts only ever add new
/// keys and records are never updated or deleted.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert(&self, record: DocumentRecord) -> Result<(), DocumentStoreError>;

    async fn get(&self, id: DocumentId) -> Result<Option<DocumentRecord>, DocumentStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentStoreError {
    #[error("storage failed: {0}")]
    StorageFailed(String),
}
