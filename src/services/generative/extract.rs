//! Locates a JSON payload inside free-form model output.
//!
//! Replies arrive fenced, inline, or wrapped in prose. Each heuristic below is
//! a pure function returning `Option<&str>`; [`extract_json`] tries them in
//! order and the first hit wins.

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

/// Returns the JSON text embedded in `text`, if any
pub fn extract_json(text: &str) -> Option<&str> {
    fenced_json_block(text)
        .or_else(|| fenced_block(text))
        .or_else(|| bracket_span(text))
}

/// Content of the first ```` ```json ```` block, trimmed
pub fn fenced_json_block(text: &str) -> Option<&str> {
    let start = text.find(JSON_FENCE)? + JSON_FENCE.len();
    let end = start + text[start..].find(FENCE)?;
    Some(text[start..end].trim())
}

/// Content of the first untagged fenced block, only if it looks like JSON
pub fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find(FENCE)? + FENCE.len();
    let end = start + text[start..].find(FENCE)?;
    let content = text[start..end].trim();
    (content.starts_with('[') || content.starts_with('{')).then_some(content)
}

/// Span from the first `[` to the last `]`, inclusive
pub fn bracket_span(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}
