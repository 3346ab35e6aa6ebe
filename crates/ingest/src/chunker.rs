//! Fixed-ratio token chunker.
//!
//! Splits a text into bounded-size pieces using an approximate
//! characters-per-token ratio. No normalization or language-aware boundary
//! detection — splits may fall mid-word or mid-sentence.

/// Approximate characters per token. Length is never tokenizer-accurate;
/// this fixed ratio bounds request size well enough in practice.
pub const AVG_CHARS_PER_TOKEN: usize = 4;

/// Lazy, restartable (via `Clone`) iterator over fixed-size character
/// slices of the input. Every slice is exactly `max_tokens * 4` characters
/// except possibly the last; concatenating all slices reproduces the input.
#[derive(Debug, Clone)]
pub struct TokenChunks<'a> {
    rest: &'a str,
    chunk_chars: usize,
}

/// Split `text` into chunks of at most `max_tokens` approximate tokens.
pub fn chunk_by_tokens(text: &str, max_tokens: usize) -> TokenChunks<'_> {
    TokenChunks {
        rest: text,
        // A zero budget would never advance; one char is the floor.
        chunk_chars: (max_tokens * AVG_CHARS_PER_TOKEN).max(1),
    }
}

impl<'a> Iterator for TokenChunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let split = self
            .rest
            .char_indices()
            .nth(self.chunk_chars)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.rest.len());
        let (head, tail) = self.rest.split_at(split);
        self.rest = tail;
        Some(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenation_reproduces_input() {
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(40);
        let rejoined: String = chunk_by_tokens(&text, 50).collect();
        assert_eq!(rejoined, text);
    }

    #[test]
    fn chunk_count_is_ceil_of_chars_over_budget() {
        let text = "x".repeat(1000);
        // 3 tokens * 4 chars = 12-char chunks -> ceil(1000/12) = 84.
        assert_eq!(chunk_by_tokens(&text, 3).count(), 84);

        let text = "x".repeat(1200);
        assert_eq!(chunk_by_tokens(&text, 3).count(), 100);
    }

    #[test]
    fn all_chunks_full_size_except_last() {
        let text = "abcdefghij".repeat(10); // 100 chars
        let chunks: Vec<&str> = chunk_by_tokens(&text, 3).collect(); // 12-char chunks
        for chunk in &chunks[..chunks.len() - 1] {
            assert_eq!(chunk.chars().count(), 12);
        }
        assert_eq!(chunks.last().unwrap().chars().count(), 100 % 12);
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        assert_eq!(chunk_by_tokens("", 300).count(), 0);
    }

    #[test]
    fn splits_on_char_boundaries_for_multibyte_text() {
        let hindi = "निम्नलिखित शोध पत्र के इस भाग को सरल हिंदी में संक्षेपित करें ".repeat(8);
        let chunks: Vec<&str> = chunk_by_tokens(&hindi, 5).collect();
        let rejoined: String = chunks.concat();
        assert_eq!(rejoined, hindi);
        for chunk in &chunks[..chunks.len() - 1] {
            assert_eq!(chunk.chars().count(), 20);
        }
    }

    #[test]
    fn iterator_is_restartable() {
        let text = "abcdefgh".repeat(10);
        let chunks = chunk_by_tokens(&text, 2);
        let first_pass: Vec<&str> = chunks.clone().collect();
        let second_pass: Vec<&str> = chunks.collect();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn input_shorter_than_budget_is_one_chunk() {
        let chunks: Vec<&str> = chunk_by_tokens("short", 300).collect();
        assert_eq!(chunks, vec!["short"]);
    }
}
