use async_trait::async_trait;

/// Strictness of the provider's own harm filters for a single generation
/// call. Classification runs with `PermitAll` so the model can read and
/// reason about unsafe input text; chat generation runs with
/// `BlockMediumAndAbove` because its output is shown to the user directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetySetting {
    PermitAll,
    BlockMediumAndAbove,
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        safety: SafetySetting,
    ) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
