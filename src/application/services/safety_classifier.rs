use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError, SafetySetting};
use crate::domain::SafetyVerdict;

const SAFETY_INSTRUCTION: &str = "\
You are a safety classifier. Analyze the user input and separate it into:
1. STORY: Personal context/narrative
2. QUERY: Actual information request

Evaluate ONLY the QUERY for:
- Nuclear weapons/radiation
- Illegal drug manufacturing
- Hate speech/terrorism
- Financial crimes
- Self-harm instructions

If the query violates safety policies, return: \"UNSAFE: <reason>\"
Otherwise return \"SAFE\"";

/// Gates chat questions behind a fixed classification prompt. The call runs
/// with the provider's own harm filters disabled so the model can read the
/// potentially unsafe input; the instruction prompt is the sole gate.
pub struct SafetyClassifier<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
}

impl<L> SafetyClassifier<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }

    pub async fn classify(&self, query: &str) -> Result<SafetyVerdict, LlmClientError> {
        let prompt = format!("{SAFETY_INSTRUCTION}\n\nUser Input: {query}");
        let reply = self
            .llm_client
            .generate(&prompt, SafetySetting::PermitAll)
            .await?;

        Ok(SafetyVerdict::from_reply(&reply))
    }
}
