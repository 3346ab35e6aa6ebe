//! Passage selection: what part of an extracted paper gets summarized.

use paperchat_core::text::truncate_chars;

/// When no abstract/conclusion markers are found, summarize only this many
/// leading characters.
pub const FALLBACK_CHARS: usize = 3000;

/// Select the passage of a paper worth summarizing.
///
/// Case-insensitive search for "abstract" and "conclusion"; when both occur
/// in that order, the passage is the slice between them. Otherwise the
/// first [`FALLBACK_CHARS`] characters. This is a substring search, not
/// section detection — good enough for the common paper layout.
pub fn select_passage(text: &str) -> &str {
    let lower = text.to_ascii_lowercase();
    match (lower.find("abstract"), lower.find("conclusion")) {
        (Some(start), Some(end)) if start < end => &text[start..end],
        _ => truncate_chars(text, FALLBACK_CHARS),
    }
}
