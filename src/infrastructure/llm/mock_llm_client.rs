use crate::application::ports::{LlmClient, LlmClientError, SafetySetting};

/// Canned-reply client for exercising the pipeline without calling the
/// hosted API. Replies "SAFE" to classification prompts so the chat flow
/// runs to completion.
pub struct MockLlmClient;

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(
        &self,
        prompt: &str,
        _safety: SafetySetting,
    ) -> Result<String, LlmClientError> {
        if prompt.starts_with("You are a safety classifier") {
            return Ok("SAFE".to_string());
        }
        Ok("Mock reply".to_string())
    }
}
