/// Maximum characters per summarization chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 15_000;

/// Maximum characters of document text placed in the chat prompt.
pub const DEFAULT_CONTEXT_BUDGET: usize = 10_000;

const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub chunking: ChunkingSettings,
    pub chat: ChatSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    /// Absent keys are tolerated at startup; operations that need the
    /// credential fail per-request with a server error instead.
    pub api_key: Option<String>,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct ChunkingSettings {
    pub max_chunk_size: usize,
}

#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub context_budget: usize,
}

impl Settings {
    pub fn from_env() -> Self {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        let api_key = std::env::var("GOOGLE_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self {
            server: ServerSettings { host, port },
            llm: LlmSettings { api_key, model },
            chunking: ChunkingSettings {
                max_chunk_size: DEFAULT_CHUNK_SIZE,
            },
            chat: ChatSettings {
                context_budget: DEFAULT_CONTEXT_BUDGET,
            },
        }
    }
}
