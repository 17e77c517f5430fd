use async_trait::async_trait;

use crate::application::ports::{TextSplitter, TextSplitterError};

/// Separators tried in order, from coarsest to finest. Text that still
/// exceeds the chunk size after the last separator is cut at character
/// boundaries.
const SEPARATORS: &[&str] = &["\n\n", "\n", " "];

/// Splits text into chunks of at most `chunk_size` characters, preferring
/// paragraph, line, and word boundaries before falling back to hard cuts.
pub struct RecursiveCharacterSplitter {
    chunk_size: usize,
}

impl RecursiveCharacterSplitter {
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk_size must be positive");
        Self { chunk_size }
    }

    fn split_with(&self, text: &str, separators: &[&str]) -> Vec<String> {
        if char_len(text) <= self.chunk_size {
            return vec![text.to_string()];
        }

        let Some((sep, rest)) = separators.split_first() else {
            return self.hard_cut(text);
        };

        let sep_len = char_len(sep);
        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_len = 0;

        for piece in text.split(sep) {
            let piece_len = char_len(piece);

            if piece_len > self.chunk_size {
                if !current.is_empty() {
                    chunks.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                chunks.extend(self.split_with(piece, rest));
                continue;
            }

            let added = if current.is_empty() {
                piece_len
            } else {
                current_len + sep_len + piece_len
            };

            if added > self.chunk_size {
                chunks.push(std::mem::take(&mut current));
                current.push_str(piece);
                current_len = piece_len;
            } else {
                if !current.is_empty() {
                    current.push_str(sep);
                }
                current.push_str(piece);
                current_len = added;
            }
        }

        if !current.is_empty() {
            chunks.push(current);
        }

        chunks
    }

    fn hard_cut(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        chars
            .chunks(self.chunk_size)
            .map(|c| c.iter().collect())
            .collect()
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[async_trait]
impl TextSplitter for RecursiveCharacterSplitter {
    async fn split(&self, text: &str) -> Result<Vec<String>, TextSplitterError> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .split_with(text, SEPARATORS)
            .into_iter()
            .filter(|c| !c.is_empty())
            .collect())
    }
}
