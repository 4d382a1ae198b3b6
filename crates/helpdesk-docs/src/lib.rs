//! Paragraph-level full-text search over a local documentation tree

mod corpus;
mod present;
mod scanner;
mod scorer;

pub use corpus::Corpus;
pub use present::{answer_report, list_report, search_report};
pub use scanner::{is_document, resolve_root, scan_documents, DOC_EXTENSIONS};
pub use scorer::{
    score_document, score_file, score_text, split_paragraphs, tokenize, truncate_snippet, Snippet,
    MAX_SNIPPETS_PER_DOCUMENT, SNIPPET_MAX_CHARS, TRUNCATION_MARKER,
};
