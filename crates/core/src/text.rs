/// Truncate to the first `max_chars` characters, respecting char boundaries.
///
/// Counts characters (not bytes), matching how the rest of the system
/// approximates length.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorter_input_is_untouched() {
        assert_eq!(truncate_chars("hello", 2000), "hello");
    }

    #[test]
    fn truncates_to_char_count() {
        let long = "a".repeat(5000);
        assert_eq!(truncate_chars(&long, 2000).chars().count(), 2000);
    }

    #[test]
    fn respects_multibyte_boundaries() {
        // Devanagari chars are 3 bytes each; slicing by bytes would panic.
        let hindi = "नमस्ते दुनिया";
        let cut = truncate_chars(hindi, 4);
        assert_eq!(cut.chars().count(), 4);
        assert!(hindi.starts_with(cut));
    }

    #[test]
    fn zero_chars_yields_empty() {
        assert_eq!(truncate_chars("anything", 0), "");
    }
}
