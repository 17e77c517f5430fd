use async_trait::async_trait;
use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

/// Extracts text from a word-processor (docx) document. Paragraph texts are
/// joined with a single newline, in document order; empty paragraphs are
/// kept so blank lines survive.
pub struct WordDocumentAdapter;

fn paragraph_texts(data: &[u8]) -> Result<Vec<String>, FileLoaderError> {
    let docx = read_docx(data)
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse docx: {e}")))?;

    let mut paragraphs = Vec::new();

    for child in docx.document.children.iter() {
        if let DocumentChild::Paragraph(para) = child {
            let text: String = para
                .children
                .iter()
                .filter_map(|pc| {
                    if let ParagraphChild::Run(run) = pc {
                        Some(
                            run.children
                                .iter()
                                .filter_map(|rc| {
                                    if let RunChild::Text(t) = rc {
                                        Some(t.text.as_str())
                                    } else {
                                        None
                                    }
                                })
                                .collect::<String>(),
                        )
                    } else {
                        None
                    }
                })
                .collect();

            paragraphs.push(text);
        }
    }

    Ok(paragraphs)
}

#[async_trait]
impl FileLoader for WordDocumentAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id,
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::WordDocument {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        if data.is_empty() {
            return Ok(String::new());
        }

        let paragraphs = paragraph_texts(data)?;

        tracing::info!(paragraph_count = paragraphs.len(), "Docx text extraction complete");

        Ok(paragraphs.join("\n"))
    }
}
