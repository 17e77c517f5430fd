use std::sync::Arc;

use crate::application::ports::{
    LlmClient, LlmClientError, SafetySetting, TextSplitter, TextSplitterError,
};

const SUMMARY_INSTRUCTION: &str = "Write a concise summary of the following document:";

/// Splits long text into bounded chunks, summarizes each, and collapses the
/// chunk summaries into one final summary when more than one chunk was
/// produced.
pub struct Summarizer<L, T: ?Sized>
where
    L: LlmClient,
    T: TextSplitter,
{
    llm_client: Arc<L>,
    text_splitter: Arc<T>,
}

impl<L, T: ?Sized> Summarizer<L, T>
where
    L: LlmClient,
    T: TextSplitter,
{
    pub fn new(llm_client: Arc<L>, text_splitter: Arc<T>) -> Self {
        Self {
            llm_client,
            text_splitter,
        }
    }

    pub async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        let chunks = self.text_splitter.split(text).await?;

        if chunks.len() <= 1 {
            let body = chunks.first().map(String::as_str).unwrap_or(text);
            return Ok(self.summarize_once(body).await?);
        }

        tracing::debug!(chunk_count = chunks.len(), "Summarizing in chunks");

        let mut chunk_summaries = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            chunk_summaries.push(self.summarize_once(chunk).await?);
        }

        let combined = chunk_summaries.join("\n\n");
        Ok(self.summarize_once(&combined).await?)
    }

    async fn summarize_once(&self, text: &str) -> Result<String, LlmClientError> {
        let prompt = format!("{SUMMARY_INSTRUCTION}\n\n{text}\n\nCONCISE SUMMARY:");
        self.llm_client
            .generate(&prompt, SafetySetting::BlockMediumAndAbove)
            .await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    #[error("text splitting: {0}")]
    Splitting(#[from] TextSplitterError),
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
}
