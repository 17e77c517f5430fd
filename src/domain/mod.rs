mod document;
mod safety;

pub use document::{ContentType, Document, DocumentId, DocumentRecord, WORD_DOCUMENT_MIME};
pub use safety::SafetyVerdict;
