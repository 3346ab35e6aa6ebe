pub mod chunker;
pub mod extract;
pub mod passage;

pub use chunker::{chunk_by_tokens, TokenChunks, AVG_CHARS_PER_TOKEN};
pub use extract::{extract_pdf_text, ExtractionError};
pub use passage::select_passage;
