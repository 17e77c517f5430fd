use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::{PdfAdapter, PlainTextAdapter, WordDocumentAdapter};

/// Dispatches extraction to the format adapter for the document's declared
/// content type. The match is exhaustive over `ContentType`, so adding a
/// format is a compile-time-visible change.
pub struct CompositeFileLoader {
    plain_text: PlainTextAdapter,
    pdf: PdfAdapter,
    word_document: WordDocumentAdapter,
}

impl CompositeFileLoader {
    pub fn new() -> Self {
        Self {
            plain_text: PlainTextAdapter,
            pdf: PdfAdapter::new(),
            word_document: WordDocumentAdapter,
        }
    }
}

impl Default for CompositeFileLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        match document.content_type {
            ContentType::PlainText => self.plain_text.extract_text(data, document).await,
            ContentType::Pdf => self.pdf.extract_text(data, document).await,
            ContentType::WordDocument => self.word_document.extract_text(data, document).await,
        }
    }
}
