/// Prompt framing the host model as a support assistant for `query`
pub fn support_prompt(query: &str) -> String {
    format!(
        "You are an AI support assistant. Handle the request: {}",
        query
    )
}
