use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError, SafetySetting};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const HARM_CATEGORIES: &[&str] = &[
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            model,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn safety_settings(safety: SafetySetting) -> Vec<SafetySettingBody> {
        let threshold = match safety {
            SafetySetting::PermitAll => "BLOCK_NONE",
            SafetySetting::BlockMediumAndAbove => "BLOCK_MEDIUM_AND_ABOVE",
        };

        HARM_CATEGORIES
            .iter()
            .map(|category| SafetySettingBody {
                category,
                threshold,
            })
            .collect()
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    #[tracing::instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate(
        &self,
        prompt: &str,
        safety: SafetySetting,
    ) -> Result<String, LlmClientError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let body = GenerateContentRequest {
            contents: vec![ContentBody {
                parts: vec![PartBody { text: prompt }],
            }],
            safety_settings: Self::safety_settings(safety),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(format!("gemini request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "gemini returned {status}: {text}"
            )));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            LlmClientError::InvalidResponse(format!("gemini response parse failed: {e}"))
        })?;

        let reply = parsed
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                LlmClientError::InvalidResponse("gemini reply contained no text".to_string())
            })?;

        Ok(reply)
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<ContentBody<'a>>,
    #[serde(rename = "safetySettings")]
    safety_settings: Vec<SafetySettingBody>,
}

#[derive(Serialize)]
struct ContentBody<'a> {
    parts: Vec<PartBody<'a>>,
}

#[derive(Serialize)]
struct PartBody<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct SafetySettingBody {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
