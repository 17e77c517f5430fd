mod chat;
mod health;
mod upload;

pub use chat::{chat_handler, ChatRequest, ChatResponse};
pub use health::health_handler;
pub use upload::{upload_handler, UploadResponse};
