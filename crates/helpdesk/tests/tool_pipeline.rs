mod common;

use common::docs_tree;
use helpdesk_core::Config;
use helpdesk_tools::{ToolError, ToolRegistry};
use serde_json::json;

fn registry(dir: &std::path::Path) -> ToolRegistry {
    ToolRegistry::with_defaults(&Config::new().with_docs_dir(dir))
}

#[test]
fn test_list_search_answer_chain() {
    let temp = docs_tree(&[
        ("faq/login.md", "Login fails after password reset.\n\nClear the session cookie."),
        ("faq/billing.md", "Refunds take five days."),
        ("README.txt", "Start with the FAQ."),
    ]);
    let registry = registry(temp.path());

    let list = registry.call("list_docs", &json!({})).unwrap();
    let files = list.structured_content["files"].as_array().unwrap();
    assert_eq!(files.len(), 3);
    assert!(list.text().contains("- faq/login.md") || list.text().contains("- faq\\login.md"));

    let search = registry
        .call("search_docs", &json!({"query": "password reset", "max_results": 2}))
        .unwrap();
    let results = search.structured_content["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["score"], 2);
    assert_eq!(search.meta, Some(json!({"query": "password reset"})));

    let answer = registry
        .call("answer_from_docs", &json!({"query": "refunds"}))
        .unwrap();
    assert_eq!(answer.structured_content["query"], "refunds");
    assert_eq!(
        answer.structured_content["used_snippets"][0]["snippet"],
        "Refunds take five days."
    );
    assert!(!answer.content.is_empty());
}

#[test]
fn test_config_default_max_results_applies() {
    let body = (0..4).map(|i| format!("hit {}", i)).collect::<Vec<_>>().join("\n\n");
    let temp = docs_tree(&[
        ("a.md", body.as_str()),
        ("b.md", body.as_str()),
        ("c.md", body.as_str()),
    ]);
    let mut config = Config::new().with_docs_dir(temp.path());
    config.default_max_results = 2;
    let registry = ToolRegistry::with_defaults(&config);

    let search = registry.call("search_docs", &json!({"query": "hit"})).unwrap();
    assert_eq!(search.structured_content["results"].as_array().unwrap().len(), 2);
}

#[test]
fn test_invalid_arguments_are_rejected_at_boundary() {
    let temp = docs_tree(&[("a.md", "text")]);
    let registry = registry(temp.path());

    let err = registry
        .call("answer_from_docs", &json!({"query": "", "max_context_fragments": 3}))
        .unwrap_err();
    assert!(matches!(err, ToolError::InvalidParams(_)));

    let err = registry
        .call("search_docs", &json!({"query": "a", "limit": 3}))
        .unwrap_err();
    assert_eq!(err.to_error_data().code, -32602);
}

#[test]
fn test_concurrent_searches_are_independent() {
    let temp = docs_tree(&[("a.md", "shared token here"), ("b.md", "token token")]);
    let registry = std::sync::Arc::new(registry(temp.path()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = registry.clone();
            std::thread::spawn(move || {
                registry
                    .call("search_docs", &json!({"query": "token"}))
                    .unwrap()
                    .structured_content
            })
        })
        .collect();

    let outputs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(outputs[0]["results"][0]["score"], 2);
}
