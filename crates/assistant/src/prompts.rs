//! Locale-to-template mapping for every prompt the assistant sends.
//!
//! Keeping all prompt construction here avoids duplicated language
//! branching at the call sites.

use paperchat_core::Language;

/// Instruction for summarizing one chunk of a paper.
pub fn chunk_summary(lang: Language, chunk: &str) -> String {
    match lang {
        Language::Hindi => format!(
            "निम्नलिखित शोध पत्र के इस भाग को सरल हिंदी में संक्षेपित करें:\n\n{chunk}"
        ),
        Language::English => format!(
            "Please summarize this part of the research paper in simple English:\n\n{chunk}"
        ),
    }
}

/// Question answering against a (truncated) summary. `summary` must already
/// be cut to the context window; the question is embedded verbatim.
pub fn question_with_context(lang: Language, summary: &str, question: &str) -> String {
    match lang {
        Language::Hindi => format!(
            "नीचे शोध पत्र का सारांश दिया गया है:\n\n{summary}\n\nअब निम्नलिखित प्रश्न का उत्तर दो:\n\n{question}"
        ),
        Language::English => format!(
            "Below is the summary of a research paper:\n\n{summary}\n\nNow answer this question:\n\n{question}"
        ),
    }
}

/// One-shot summary of a whole passage, used when a question arrives before
/// the chunked pipeline has run.
pub fn quick_summary(lang: Language, text: &str) -> String {
    match lang {
        Language::Hindi => format!(
            "निम्नलिखित टेक्स्ट को सरल हिंदी में संक्षेपित करें:\n\n{text}"
        ),
        Language::English => format!(
            "Please summarize the following text in simple English:\n\n{text}"
        ),
    }
}

/// Assistant persona for chat with no paper loaded.
pub fn general_chat(lang: Language, message: &str) -> String {
    match lang {
        Language::Hindi => format!(
            "तुम एक बुद्धिमान सहायक हो। इस प्रश्न का उत्तर हिंदी में दो:\n\n{message}"
        ),
        Language::English => format!(
            "You are a smart assistant. Please respond:\n\n{message}"
        ),
    }
}
