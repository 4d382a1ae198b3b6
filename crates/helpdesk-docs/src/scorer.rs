//! Paragraph scoring by query term frequency

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

static TOKENIZE_RE: OnceLock<Regex> = OnceLock::new();
static PARAGRAPH_RE: OnceLock<Regex> = OnceLock::new();

/// Snippets kept per document before global ranking
pub const MAX_SNIPPETS_PER_DOCUMENT: usize = 3;

/// Longest snippet text, in characters, before the marker is appended
pub const SNIPPET_MAX_CHARS: usize = 600;

pub const TRUNCATION_MARKER: &str = "...";

/// A scored paragraph excerpt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub file: String,
    pub score: usize,
    pub snippet: String,
}

/// Lowercase word tokens of a query, deduplicated in first-seen order
pub fn tokenize(query: &str) -> Vec<String> {
    let re = TOKENIZE_RE.get_or_init(|| Regex::new(r"\w+").expect("static regex"));
    let mut tokens: Vec<String> = Vec::new();
    for m in re.find_iter(&query.to_lowercase()) {
        let token = m.as_str();
        if !token.is_empty() && !tokens.iter().any(|t| t == token) {
            tokens.push(token.to_string());
        }
    }
    tokens
}

/// Trimmed, non-empty paragraphs separated by blank lines
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    let re = PARAGRAPH_RE.get_or_init(|| Regex::new(r"\n\s*\n").expect("static regex"));
    re.split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Sum of case-insensitive substring occurrences of each token.
///
/// Counting is by substring, not whole word: "err" also counts inside
/// "error".
pub fn score_text(text: &str, tokens: &[String]) -> usize {
    let lower = text.to_lowercase();
    tokens
        .iter()
        .filter(|t| !t.is_empty())
        .map(|t| lower.matches(t.as_str()).count())
        .sum()
}

/// Cut text to `SNIPPET_MAX_CHARS` characters plus a marker
pub fn truncate_snippet(text: &str) -> String {
    match text.char_indices().nth(SNIPPET_MAX_CHARS) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

/// Score every paragraph of one document and keep the best `max_snippets`.
pub fn score_document(
    path: &Path,
    text: &str,
    tokens: &[String],
    max_snippets: usize,
) -> Vec<Snippet> {
    let file = path.to_string_lossy().to_string();

    let mut snippets: Vec<Snippet> = split_paragraphs(text)
        .into_iter()
        .filter_map(|para| {
            // Score before truncating so the marker never shifts counts
            let score = score_text(para, tokens);
            if score == 0 {
                return None;
            }
            Some(Snippet {
                file: file.clone(),
                score,
                snippet: truncate_snippet(para),
            })
        })
        .collect();

    // Stable: equal scores keep paragraph order
    snippets.sort_by(|a, b| b.score.cmp(&a.score));
    snippets.truncate(max_snippets);
    snippets
}

/// Read a document from disk and score it.
///
/// Unreadable files contribute nothing; undecodable bytes are replaced.
pub fn score_file(path: &Path, tokens: &[String], max_snippets: usize) -> Vec<Snippet> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "skipping unreadable document");
            return Vec::new();
        }
    };
    let text = String::from_utf8_lossy(&bytes);
    score_document(path, &text, tokens, max_snippets)
}
