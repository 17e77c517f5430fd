mod settings;

pub use settings::{
    ChatSettings, ChunkingSettings, LlmSettings, ServerSettings, Settings, DEFAULT_CHUNK_SIZE,
    DEFAULT_CONTEXT_BUDGET,
};
