//! Prose and structured renderings of listing and search results

use crate::scanner::DOC_EXTENSIONS;
use crate::scorer::Snippet;
use helpdesk_core::ToolResult;
use serde_json::json;
use std::path::{Path, PathBuf};

/// Inventory of the documentation tree
pub fn list_report(root: &Path, files: &[PathBuf]) -> ToolResult {
    let text = if files.is_empty() {
        let exts = DOC_EXTENSIONS
            .iter()
            .map(|e| format!(".{}", e))
            .collect::<Vec<_>>()
            .join(" / ");
        format!(
            "Documentation directory not found or empty: {}\n\
             Create it and add {} files.",
            root.display(),
            exts
        )
    } else {
        let mut lines = vec!["Documentation files found:".to_string()];
        lines.extend(files.iter().map(|f| {
            let rel = f.strip_prefix(root).unwrap_or(f);
            format!("- {}", rel.display())
        }));
        lines.join("\n")
    };

    let paths: Vec<String> = files
        .iter()
        .map(|f| f.to_string_lossy().to_string())
        .collect();

    ToolResult::new(
        text,
        json!({
            "docs_dir": root.to_string_lossy(),
            "files": paths,
        }),
    )
}

/// Ranked snippets for a search query
pub fn search_report(query: &str, snippets: &[Snippet]) -> ToolResult {
    let text = if snippets.is_empty() {
        format!("Nothing found in the documentation for {:?}.", query)
    } else {
        let mut lines = vec![format!("Search results for {:?}:", query)];
        lines.extend(
            snippets
                .iter()
                .map(|s| format!("\n{} (score={}):\n{}", s.file, s.score, s.snippet)),
        );
        lines.join("\n")
    };

    ToolResult::new(text, json!({ "results": snippets })).with_meta(json!({ "query": query }))
}

/// Snippets assembled as context for answering a question.
///
/// With no evidence the `answer` field is null rather than an empty string.
pub fn answer_report(query: &str, snippets: &[Snippet]) -> ToolResult {
    if snippets.is_empty() {
        let text = format!(
            "The documentation has nothing on {:?}; \
             no answer can be drawn from the documents.",
            query
        );
        return ToolResult::new(
            text,
            json!({
                "answer": null,
                "used_snippets": [],
                "query": query,
            }),
        );
    }

    let mut lines = vec![
        "Documentation fragments that can be used to answer the question.".to_string(),
        format!("Question: {:?}", query),
        String::new(),
    ];
    lines.extend(snippets.iter().enumerate().map(|(idx, s)| {
        format!(
            "### Fragment {} (score={}, file={}):\n{}\n",
            idx + 1,
            s.score,
            s.file,
            s.snippet
        )
    }));
    let text = lines.join("\n");

    ToolResult::new(
        text.clone(),
        json!({
            "answer": text,
            "used_snippets": snippets,
            "query": query,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn snippet(file: &str, score: usize, text: &str) -> Snippet {
        Snippet {
            file: file.to_string(),
            score,
            snippet: text.to_string(),
        }
    }

    #[test]
    fn test_list_report_empty() {
        let result = list_report(Path::new("/srv/docs"), &[]);
        assert!(result.text().contains("not found or empty"));
        assert!(result.text().contains("/srv/docs"));
        assert_eq!(result.structured_content["files"], json!([]));
        assert_eq!(result.structured_content["docs_dir"], "/srv/docs");
    }

    #[test]
    fn test_list_report_relative_prose_full_structured() {
        let root = Path::new("/srv/docs");
        let files = vec![root.join("intro.md"), root.join("guides/setup.rst")];
        let result = list_report(root, &files);

        let text = result.text();
        assert!(text.starts_with("Documentation files found:"));
        assert!(text.contains("- intro.md"));
        assert!(!text.contains("/srv/docs/intro.md"));

        let listed = result.structured_content["files"].as_array().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], "/srv/docs/intro.md");
    }

    #[test]
    fn test_search_report_empty() {
        let result = search_report("xyz123", &[]);
        assert!(result.text().contains("Nothing found"));
        assert_eq!(result.structured_content, json!({"results": []}));
        assert_eq!(result.meta, Some(json!({"query": "xyz123"})));
    }

    #[test]
    fn test_search_report_blocks() {
        let snippets = vec![snippet("a.md", 4, "alpha"), snippet("b.md", 2, "beta")];
        let result = search_report("q", &snippets);

        let text = result.text();
        assert!(text.contains("a.md (score=4):\nalpha"));
        assert!(text.find("a.md").unwrap() < text.find("b.md").unwrap());

        let results = &result.structured_content["results"];
        assert_eq!(results[0]["file"], "a.md");
        assert_eq!(results[0]["score"], 4);
        assert_eq!(results[1]["snippet"], "beta");
    }

    #[test]
    fn test_answer_report_no_evidence_is_null() {
        let result = answer_report("xyz123", &[]);
        assert_eq!(result.structured_content["answer"], Value::Null);
        assert_eq!(result.structured_content["used_snippets"], json!([]));
        assert_eq!(result.structured_content["query"], "xyz123");
        assert!(!result.text().is_empty());
    }

    #[test]
    fn test_answer_report_with_evidence() {
        let snippets = vec![snippet("faq.md", 3, "restart the agent")];
        let result = answer_report("how to restart", &snippets);

        let answer = result.structured_content["answer"].as_str().unwrap();
        assert_eq!(answer, result.text());
        assert!(answer.contains("### Fragment 1 (score=3, file=faq.md):"));
        assert!(answer.contains("Question: \"how to restart\""));
        assert_eq!(result.structured_content["used_snippets"][0]["file"], "faq.md");
    }
}
