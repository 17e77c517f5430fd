use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::application::ports::{DocumentStore, DocumentStoreError};
use crate::domain::{DocumentId, DocumentRecord};

/// Process-lifetime store backed by a lock-guarded map. The lock is held
/// only for the map operation itself, never across an await, so concurrent
/// uploads and lookups cannot block each other on relay latency.
pub struct InMemoryDocumentStore {
    records: RwLock<HashMap<DocumentId, DocumentRecord>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert(&self, record: DocumentRecord) -> Result<(), DocumentStoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| DocumentStoreError::StorageFailed(e.to_string()))?;
        records.insert(record.id, record);
        Ok(())
    }

    async fn get(&self, id: DocumentId) -> Result<Option<DocumentRecord>, DocumentStoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| DocumentStoreError::StorageFailed(e.to_string()))?;
        Ok(records.get(&id).cloned())
    }
}
