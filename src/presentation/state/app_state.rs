use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient, TextSplitter};
use crate::application::services::{ChatService, UploadService};

pub struct AppState<F, L, T: ?Sized>
where
    F: FileLoader,
    L: LlmClient,
    T: TextSplitter,
{
    pub upload_service: Arc<UploadService<F, L, T>>,
    pub chat_service: Arc<ChatService<L>>,
}

impl<F, L, T: ?Sized> Clone for AppState<F, L, T>
where
    F: FileLoader,
    L: LlmClient,
    T: TextSplitter,
{
    fn clone(&self) -> Self {
        Self {
            upload_service: Arc::clone(&self.upload_service),
            chat_service: Arc::clone(&self.chat_service),
        }
    }
}
