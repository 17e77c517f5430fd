mod chat_service;
mod safety_classifier;
mod summarizer;
mod upload_service;

pub use chat_service::{ChatError, ChatService};
pub use safety_classifier::SafetyClassifier;
pub use summarizer::{SummarizeError, Summarizer};
pub use upload_service::{UploadError, UploadReceipt, UploadService};
