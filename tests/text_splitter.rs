use docuchat::application::ports::TextSplitter;
use docuchat::infrastructure::text_processing::RecursiveCharacterSplitter;

const SMALL_CHUNK_SIZE: usize = 10;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[tokio::test]
async fn given_text_when_splitting_then_no_chunk_exceeds_size() {
    let splitter = RecursiveCharacterSplitter::new(SMALL_CHUNK_SIZE);
    let text = "This is a test document with some content spread over words.";

    let chunks = splitter.split(text).await.unwrap();

    assert!(!chunks.is_empty());
    for chunk in &chunks {
        assert!(
            char_len(chunk) <= SMALL_CHUNK_SIZE,
            "chunk exceeds size: '{}'",
            chunk
        );
        assert!(!chunk.is_empty());
    }
}

#[tokio::test]
async fn given_empty_text_when_splitting_then_returns_no_chunks() {
    let splitter = RecursiveCharacterSplitter::new(SMALL_CHUNK_SIZE);

    let chunks = splitter.split("").await.unwrap();

    assert!(chunks.is_empty());
}

#[tokio::test]
async fn given_text_within_size_when_splitting_then_returns_single_identical_chunk() {
    let splitter = RecursiveCharacterSplitter::new(100);
    let text = "Fits in one chunk.";

    let chunks = splitter.split(text).await.unwrap();

    assert_eq!(chunks, vec![text.to_string()]);
}

#[tokio::test]
async fn given_paragraphs_when_splitting_then_paragraph_boundaries_are_preferred() {
    let splitter = RecursiveCharacterSplitter::new(20);
    let text = "first paragraph.\n\nsecond paragraph.";

    let chunks = splitter.split(text).await.unwrap();

    assert_eq!(
        chunks,
        vec!["first paragraph.".to_string(), "second paragraph.".to_string()]
    );
}

#[tokio::test]
async fn given_long_sentence_when_splitting_then_words_are_not_severed() {
    let splitter = RecursiveCharacterSplitter::new(SMALL_CHUNK_SIZE);
    let text = "alpha beta gamma delta epsilon";

    let chunks = splitter.split(text).await.unwrap();

    // Every word is short enough to fit, so each chunk is whole words.
    let recombined = chunks.join(" ");
    for word in ["alpha", "beta", "gamma", "delta", "epsilon"] {
        assert!(recombined.contains(word), "lost word: {}", word);
    }
    for chunk in &chunks {
        assert!(!chunk.starts_with(' '));
        assert!(!chunk.ends_with(' '));
    }
}

#[tokio::test]
async fn given_unbroken_run_when_splitting_then_falls_back_to_hard_cuts() {
    let splitter = RecursiveCharacterSplitter::new(SMALL_CHUNK_SIZE);
    let text = "x".repeat(25);

    let chunks = splitter.split(&text).await.unwrap();

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks.concat(), text);
    for chunk in &chunks {
        assert!(char_len(chunk) <= SMALL_CHUNK_SIZE);
    }
}

#[tokio::test]
async fn given_multibyte_text_when_splitting_then_cuts_fall_on_char_boundaries() {
    let splitter = RecursiveCharacterSplitter::new(SMALL_CHUNK_SIZE);
    let text = "é".repeat(25);

    let chunks = splitter.split(&text).await.unwrap();

    assert_eq!(chunks.concat(), text);
    for chunk in &chunks {
        assert!(char_len(chunk) <= SMALL_CHUNK_SIZE);
    }
}

#[tokio::test]
async fn given_mixed_structure_when_splitting_then_all_text_is_preserved_in_order() {
    let splitter = RecursiveCharacterSplitter::new(12);
    let text = "one two three\n\nfour five six\nseven eight";

    let chunks = splitter.split(text).await.unwrap();

    let recombined = chunks.join(" ");
    for word in ["one", "two", "three", "four", "five", "six", "seven", "eight"] {
        assert!(recombined.contains(word), "lost word: {}", word);
    }

    let first_pos = recombined.find("one").unwrap();
    let last_pos = recombined.find("eight").unwrap();
    assert!(first_pos < last_pos);
}
