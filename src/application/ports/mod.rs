mod document_store;
mod file_loader;
mod llm_client;
mod text_splitter;

pub use document_store::{DocumentStore, DocumentStoreError};
pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError, SafetySetting};
pub use text_splitter::{TextSplitter, TextSplitterError};
