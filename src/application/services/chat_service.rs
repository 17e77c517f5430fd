use std::sync::Arc;

use crate::application::ports::{
    DocumentStore, DocumentStoreError, LlmClient, LlmClientError, SafetySetting,
};
use crate::application::services::safety_classifier::SafetyClassifier;
use crate::domain::{DocumentId, SafetyVerdict};

const CHAT_INSTRUCTION: &str = "\
You are a helpful document assistant. Answer the user's question based ONLY \
on the provided document content.";

const FALLBACK_INSTRUCTION: &str = "\
Important: If the question is not answerable from the document, say \
\"I couldn't find that information in the document.\"";

/// Answers a question about a stored document: look the record up, gate the
/// question behind the safety classifier, then relay the truncated document
/// text plus the question to the model.
pub struct ChatService<L>
where
    L: LlmClient,
{
    llm_client: Option<Arc<L>>,
    store: Arc<dyn DocumentStore>,
    context_budget: usize,
}

impl<L> ChatService<L>
where
    L: LlmClient,
{
    pub fn new(
        llm_client: Option<Arc<L>>,
        store: Arc<dyn DocumentStore>,
        context_budget: usize,
    ) -> Self {
        Self {
            llm_client,
            store,
            context_budget,
        }
    }

    pub async fn chat(&self, doc_id: &str, message: &str) -> Result<String, ChatError> {
        let id = DocumentId::parse(doc_id).ok_or(ChatError::NotFound)?;

        let record = self
            .store
            .get(id)
            .await
            .map_err(ChatError::Storage)?
            .ok_or(ChatError::NotFound)?;

        let llm_client = self
            .llm_client
            .as_ref()
            .ok_or(ChatError::MissingCredential)?;

        let classifier = SafetyClassifier::new(Arc::clone(llm_client));
        match classifier
            .classify(message)
            .await
            .map_err(ChatError::Classification)?
        {
            SafetyVerdict::Safe => {}
            SafetyVerdict::Unsafe(reason) => {
                tracing::warn!(document_id = %id, reason = %reason, "Query rejected by safety classifier");
                return Err(ChatError::PolicyViolation(reason));
            }
        }

        // First `context_budget` characters only; long documents are silently
        // truncated from the end.
        let context: String = record.text.chars().take(self.context_budget).collect();

        let prompt = format!(
            "{CHAT_INSTRUCTION}\n\nDocument content:\n{context}\n\nQuestion: {message}\n\n{FALLBACK_INSTRUCTION}"
        );

        llm_client
            .generate(&prompt, SafetySetting::BlockMediumAndAbove)
            .await
            .map_err(ChatError::Completion)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("document not found")]
    NotFound,
    #[error("llm api key is not configured")]
    MissingCredential,
    #[error("query violates safety policies: {0}")]
    PolicyViolation(String),
    #[error("safety classification: {0}")]
    Classification(LlmClientError),
    #[error("completion: {0}")]
    Completion(LlmClientError),
    #[error("storage: {0}")]
    Storage(DocumentStoreError),
}
