use std::sync::Arc;

use crate::application::ports::{
    DocumentStore, DocumentStoreError, FileLoader, FileLoaderError, LlmClient, LlmClientError,
    TextSplitter, TextSplitterError,
};
use crate::application::services::summarizer::{SummarizeError, Summarizer};
use crate::domain::{ContentType, Document, DocumentId, DocumentRecord};

/// Runs the upload pipeline: extract text, summarize it, then insert the
/// record. The record becomes visible only after both steps succeed; any
/// failure leaves the store untouched.
pub struct UploadService<F, L, T: ?Sized>
where
    F: FileLoader,
    L: LlmClient,
    T: TextSplitter,
{
    file_loader: Arc<F>,
    summarizer: Option<Summarizer<L, T>>,
    store: Arc<dyn DocumentStore>,
}

#[derive(Debug, Clone)]
pub struct UploadReceipt {
    pub id: DocumentId,
    pub summary: String,
}

impl<F, L, T: ?Sized> UploadService<F, L, T>
where
    F: FileLoader,
    L: LlmClient,
    T: TextSplitter,
{
    /// `llm_client` is `None` when no API credential is configured; the
    /// service still constructs and every upload then fails with
    /// `MissingCredential` at request time.
    pub fn new(
        file_loader: Arc<F>,
        llm_client: Option<Arc<L>>,
        text_splitter: Arc<T>,
        store: Arc<dyn DocumentStore>,
    ) -> Self {
        let summarizer = llm_client.map(|llm| Summarizer::new(llm, text_splitter));
        Self {
            file_loader,
            summarizer,
            store,
        }
    }

    pub async fn upload(
        &self,
        data: &[u8],
        filename: String,
        content_type: ContentType,
    ) -> Result<UploadReceipt, UploadError> {
        let document = Document::new(filename, content_type, data.len() as u64);

        let text = self
            .file_loader
            .extract_text(data, &document)
            .await
            .map_err(UploadError::Extraction)?;

        let summarizer = self
            .summarizer
            .as_ref()
            .ok_or(UploadError::MissingCredential)?;

        let summary = summarizer.summarize(&text).await.map_err(|e| match e {
            SummarizeError::Splitting(e) => UploadError::Splitting(e),
            SummarizeError::Completion(e) => UploadError::Summarization(e),
        })?;

        let record =
            DocumentRecord::new(document.id, document.filename, text, summary.clone());
        self.store
            .insert(record)
            .await
            .map_err(UploadError::Storage)?;

        tracing::info!(document_id = %document.id, "Document stored");

        Ok(UploadReceipt {
            id: document.id,
            summary,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("extraction: {0}")]
    Extraction(FileLoaderError),
    #[error("llm api key is not configured")]
    MissingCredential,
    #[error("text splitting: {0}")]
    Splitting(TextSplitterError),
    #[error("summarization: {0}")]
    Summarization(LlmClientError),
    #[error("storage: {0}")]
    Storage(DocumentStoreError),
}
