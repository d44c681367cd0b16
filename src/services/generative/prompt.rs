use crate::models::WatchHistoryItem;

const INSTRUCTION: &str = "You are a content recommendation expert. Based on the following information, provide 5 personalized recommendations in JSON format.";

const RESPONSE_TEMPLATE: &str = r#"[
  {
    "id": "unique_id",
    "title": "Title of the content",
    "type": "Genre",
    "description": "Brief description of why this is recommended",
    "year": "Year of release (if applicable)",
    "rating": "Average rating if known"
  }
]"#;

const CLOSING: &str = "Make sure the recommendations are diverse, high-quality, and match the user's preferences and history. Only return valid JSON, no additional text.";

/// Builds the text-generation prompt
///
/// Section order matters: the extractor relies on the model echoing the JSON
/// template back, so the template always comes last before the closing line.
/// Absent or empty optional inputs are left out entirely.
pub fn build_prompt(
    content_type: &str,
    genre: Option<&str>,
    preferences: Option<&str>,
    watch_history: &[WatchHistoryItem],
) -> String {
    let mut prompt = String::new();

    prompt.push_str(INSTRUCTION);
    prompt.push_str("\n\n");

    prompt.push_str(&format!("Content Type: {}\n", content_type));
    if let Some(genre) = genre.filter(|g| !g.is_empty()) {
        prompt.push_str(&format!("Preferred Genre: {}\n", genre));
    }
    if let Some(preferences) = preferences.filter(|p| !p.is_empty()) {
        prompt.push_str(&format!("User Preferences: {}\n", preferences));
    }

    if !watch_history.is_empty() {
        prompt.push_str("Watch History:\n");
        for item in watch_history {
            prompt.push_str(&format!("- {} ({})", item.title, item.kind));
            if let Some(rating) = item.rating {
                prompt.push_str(&format!(" - Rating: {}/5", rating));
            }
            prompt.push('\n');
        }
    }

    prompt.push_str("\nPlease provide recommendations in this exact JSON format:\n");
    prompt.push_str(RESPONSE_TEMPLATE);
    prompt.push_str("\n\n");
    prompt.push_str(CLOSING);

    prompt
}
