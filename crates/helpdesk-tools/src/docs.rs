//! Tools over the local documentation tree

use crate::base::{parse_args, Tool};
use crate::error::ToolError;
use helpdesk_core::{ToolResult, MAX_RESULTS_LIMIT};
use helpdesk_docs::{answer_report, list_report, search_report, Corpus};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ListDocsArgs {}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SearchDocsArgs {
    query: String,
    max_results: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AnswerFromDocsArgs {
    query: String,
    max_context_fragments: Option<usize>,
}

fn validate_query(query: &str) -> Result<(), ToolError> {
    if query.is_empty() {
        return Err(ToolError::InvalidParams(
            "query must be at least 1 character".to_string(),
        ));
    }
    Ok(())
}

fn validate_count(field: &str, value: Option<usize>, default: usize) -> Result<usize, ToolError> {
    let value = value.unwrap_or(default);
    if !(1..=MAX_RESULTS_LIMIT).contains(&value) {
        return Err(ToolError::InvalidParams(format!(
            "{} must be between 1 and {}, got {}",
            field, MAX_RESULTS_LIMIT, value
        )));
    }
    Ok(value)
}

fn query_schema(count_field: &str, count_description: &str, default: usize) -> Value {
    let mut properties = serde_json::Map::new();
    properties.insert(
        "query".to_string(),
        json!({ "type": "string", "minLength": 1 }),
    );
    properties.insert(
        count_field.to_string(),
        json!({
            "type": "integer",
            "minimum": 1,
            "maximum": MAX_RESULTS_LIMIT,
            "default": default,
            "description": count_description,
        }),
    );
    json!({
        "type": "object",
        "properties": properties,
        "required": ["query"],
    })
}

/// Lists documentation files under the configured root
pub struct ListDocsTool {
    corpus: Corpus,
}

impl ListDocsTool {
    pub fn new(corpus: Corpus) -> Self {
        Self { corpus }
    }
}

impl Tool for ListDocsTool {
    fn name(&self) -> &str {
        "list_docs"
    }

    fn description(&self) -> &str {
        "List available documentation files"
    }

    fn call(&self, args: &Value) -> Result<ToolResult, ToolError> {
        let _: ListDocsArgs = parse_args(args)?;
        tracing::info!(docs_dir = %self.corpus.root().display(), "Listing documentation");

        let files = self.corpus.documents();
        tracing::debug!(files = files.len(), "Documentation listed");
        Ok(list_report(self.corpus.root(), &files))
    }
}

/// Full-text search over the documentation
pub struct SearchDocsTool {
    corpus: Corpus,
    default_max_results: usize,
}

impl SearchDocsTool {
    pub fn new(corpus: Corpus, default_max_results: usize) -> Self {
        Self {
            corpus,
            default_max_results,
        }
    }
}

impl Tool for SearchDocsTool {
    fn name(&self) -> &str {
        "search_docs"
    }

    fn description(&self) -> &str {
        "Search the local documentation (simple full-text)"
    }

    fn input_schema(&self) -> Value {
        query_schema(
            "max_results",
            "Maximum number of fragments to return",
            self.default_max_results,
        )
    }

    fn call(&self, args: &Value) -> Result<ToolResult, ToolError> {
        let args: SearchDocsArgs = parse_args(args)?;
        validate_query(&args.query)?;
        let max_results =
            validate_count("max_results", args.max_results, self.default_max_results)?;

        tracing::info!(query = %args.query, max_results, "Searching documentation");
        let snippets = self.corpus.search(&args.query, max_results);
        Ok(search_report(&args.query, &snippets))
    }
}

/// Gathers documentation fragments for the host model to answer from.
/// No language model is called here.
pub struct AnswerFromDocsTool {
    corpus: Corpus,
    default_max_fragments: usize,
}

impl AnswerFromDocsTool {
    pub fn new(corpus: Corpus, default_max_fragments: usize) -> Self {
        Self {
            corpus,
            default_max_fragments,
        }
    }
}

impl Tool for AnswerFromDocsTool {
    fn name(&self) -> &str {
        "answer_from_docs"
    }

    fn description(&self) -> &str {
        "Collect documentation fragments relevant to a question"
    }

    fn input_schema(&self) -> Value {
        query_schema(
            "max_context_fragments",
            "How many documentation fragments to include as context",
            self.default_max_fragments,
        )
    }

    fn call(&self, args: &Value) -> Result<ToolResult, ToolError> {
        let args: AnswerFromDocsArgs = parse_args(args)?;
        validate_query(&args.query)?;
        let max_fragments = validate_count(
            "max_context_fragments",
            args.max_context_fragments,
            self.default_max_fragments,
        )?;

        tracing::info!(query = %args.query, max_fragments, "Answering from documentation");
        let snippets = self.corpus.search(&args.query, max_fragments);
        if snippets.is_empty() {
            tracing::info!(query = %args.query, "No documentation fragments found");
        }
        Ok(answer_report(&args.query, &snippets))
    }
}
