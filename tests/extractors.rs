use std::io::Cursor;

use docuchat::application::ports::{FileLoader, FileLoaderError};
use docuchat::domain::{ContentType, Document, WORD_DOCUMENT_MIME};
use docuchat::infrastructure::text_processing::{
    CompositeFileLoader, PdfAdapter, PlainTextAdapter, WordDocumentAdapter,
};

fn document(filename: &str, content_type: ContentType, size: usize) -> Document {
    Document::new(filename.to_string(), content_type, size as u64)
}

fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
    use docx_rs::{Docx, Paragraph, Run};

    let mut docx = Docx::new();
    for text in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).unwrap();
    cursor.into_inner()
}

#[tokio::test]
async fn given_valid_utf8_bytes_when_extracting_plain_text_then_returns_string_verbatim() {
    let adapter = PlainTextAdapter;
    let data = b"Hello,\n  this is plain text.\n";
    let doc = document("readme.txt", ContentType::PlainText, data.len());

    let result = adapter.extract_text(data, &doc).await;

    assert_eq!(result.unwrap(), "Hello,\n  this is plain text.\n");
}

#[tokio::test]
async fn given_empty_bytes_when_extracting_plain_text_then_returns_empty_string() {
    let adapter = PlainTextAdapter;
    let doc = document("empty.txt", ContentType::PlainText, 0);

    let result = adapter.extract_text(b"", &doc).await;

    assert_eq!(result.unwrap(), "");
}

#[tokio::test]
async fn given_invalid_utf8_bytes_when_extracting_plain_text_then_returns_extraction_failed() {
    let adapter = PlainTextAdapter;
    let invalid: &[u8] = &[0xFF, 0xFE, 0xFD];
    let doc = document("broken.txt", ContentType::PlainText, invalid.len());

    let result = adapter.extract_text(invalid, &doc).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_wrong_content_type_when_extracting_plain_text_then_returns_unsupported() {
    let adapter = PlainTextAdapter;
    let doc = document("file.pdf", ContentType::Pdf, 9);

    let result = adapter.extract_text(b"some data", &doc).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}

#[tokio::test]
async fn given_docx_bytes_when_extracting_then_paragraphs_are_joined_with_newlines() {
    let adapter = WordDocumentAdapter;
    let data = build_docx(&["First paragraph.", "Second paragraph."]);
    let doc = document("notes.docx", ContentType::WordDocument, data.len());

    let result = adapter.extract_text(&data, &doc).await.unwrap();

    assert!(result.contains("First paragraph."));
    assert!(result.contains("Second paragraph."));
    let first = result.find("First paragraph.").unwrap();
    let second = result.find("Second paragraph.").unwrap();
    assert!(first < second);
    assert!(result[first..second].contains('\n'));
}

#[tokio::test]
async fn given_empty_bytes_when_extracting_docx_then_returns_empty_string() {
    let adapter = WordDocumentAdapter;
    let doc = document("empty.docx", ContentType::WordDocument, 0);

    let result = adapter.extract_text(b"", &doc).await;

    assert_eq!(result.unwrap(), "");
}

#[tokio::test]
async fn given_garbage_bytes_when_extracting_docx_then_returns_extraction_failed() {
    let adapter = WordDocumentAdapter;
    let data = b"not a zip archive";
    let doc = document("broken.docx", ContentType::WordDocument, data.len());

    let result = adapter.extract_text(data, &doc).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_garbage_bytes_when_extracting_pdf_then_returns_extraction_failed() {
    let adapter = PdfAdapter::new();
    let data = b"not a pdf";
    let doc = document("broken.pdf", ContentType::Pdf, data.len());

    let result = adapter.extract_text(data, &doc).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_empty_bytes_when_extracting_pdf_then_returns_empty_string() {
    let adapter = PdfAdapter::new();
    let doc = document("empty.pdf", ContentType::Pdf, 0);

    let result = adapter.extract_text(b"", &doc).await;

    assert_eq!(result.unwrap(), "");
}

#[tokio::test]
async fn given_each_supported_type_when_dispatching_then_composite_routes_to_adapter() {
    let loader = CompositeFileLoader::new();

    let text_doc = document("a.txt", ContentType::PlainText, 5);
    assert_eq!(
        loader.extract_text(b"hello", &text_doc).await.unwrap(),
        "hello"
    );

    let docx_data = build_docx(&["Routed."]);
    let docx_doc = document("a.docx", ContentType::WordDocument, docx_data.len());
    assert!(loader
        .extract_text(&docx_data, &docx_doc)
        .await
        .unwrap()
        .contains("Routed."));
}

#[test]
fn given_supported_mimes_when_parsing_then_content_type_round_trips() {
    assert_eq!(
        ContentType::from_mime("text/plain"),
        Some(ContentType::PlainText)
    );
    assert_eq!(
        ContentType::from_mime("application/pdf"),
        Some(ContentType::Pdf)
    );
    assert_eq!(
        ContentType::from_mime(WORD_DOCUMENT_MIME),
        Some(ContentType::WordDocument)
    );
    assert_eq!(ContentType::from_mime(ContentType::Pdf.as_mime()), Some(ContentType::Pdf));
}

#[test]
fn given_unsupported_mimes_when_parsing_then_none_is_returned() {
    for mime in ["application/zip", "image/png", "text/html", "", "pdf"] {
        assert_eq!(ContentType::from_mime(mime), None, "accepted: {}", mime);
    }
}
