use std::collections::HashSet;

use uuid::Uuid;

use crate::{
    error::GenerationFailure,
    models::{scalar_text, CandidateRecord, Recommendation},
};

const BOLD_MARKER: &str = "**";
const FREE_TEXT_TYPE: &str = "AI Generated";
const FREE_TEXT_DESCRIPTION: &str = "Recommended by Gemini AI";
const PREVIEW_CHARS: usize = 100;

/// Parses extracted JSON into canonical recommendations
///
/// The text must be an array of objects; anything else, including a single
/// non-object element, is an extraction failure. Objects lacking a non-blank
/// `title` or `type` are dropped. Input order is kept. An empty result is not
/// an error here; the resolver decides what to do with it.
pub fn normalize(json_text: &str) -> Result<Vec<Recommendation>, GenerationFailure> {
    let candidates: Vec<CandidateRecord> = serde_json::from_str(json_text)?;
    let total = candidates.len();

    let mut seen_ids = HashSet::new();
    let recommendations: Vec<Recommendation> = candidates
        .into_iter()
        .filter_map(|candidate| to_recommendation(candidate, &mut seen_ids))
        .collect();

    if recommendations.len() < total {
        tracing::debug!(
            total,
            kept = recommendations.len(),
            "Dropped candidate records without title or type"
        );
    }

    Ok(recommendations)
}

fn to_recommendation(
    candidate: CandidateRecord,
    seen_ids: &mut HashSet<String>,
) -> Option<Recommendation> {
    let title = non_blank(scalar_text(candidate.title.as_ref()))?;
    let kind = non_blank(scalar_text(candidate.kind.as_ref()))?;

    // Models often copy the template's "unique_id" verbatim
    let id = non_blank(scalar_text(candidate.id.as_ref()))
        .filter(|id| !seen_ids.contains(id))
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    seen_ids.insert(id.clone());

    Some(Recommendation {
        id,
        title,
        kind,
        description: scalar_text(candidate.description.as_ref()).unwrap_or_default(),
        year: scalar_text(candidate.year.as_ref()).unwrap_or_default(),
        rating: scalar_text(candidate.rating.as_ref()).unwrap_or_default(),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Builds recommendations from a prose reply with no JSON in it
///
/// Every line carrying a `**bold**` segment contributes one title. When no
/// line qualifies, a single placeholder quoting the start of the reply is
/// returned, so the result is never empty.
pub fn from_free_text(text: &str) -> Vec<Recommendation> {
    let recommendations: Vec<Recommendation> = text
        .lines()
        .filter_map(bold_title)
        .enumerate()
        .map(|(index, title)| Recommendation {
            id: (index + 1).to_string(),
            title: title.to_string(),
            kind: FREE_TEXT_TYPE.to_string(),
            description: FREE_TEXT_DESCRIPTION.to_string(),
            year: String::new(),
            rating: String::new(),
        })
        .collect();

    if !recommendations.is_empty() {
        return recommendations;
    }

    let preview: String = text.chars().take(PREVIEW_CHARS).collect();
    vec![Recommendation {
        id: "1".to_string(),
        title: "AI Recommendation".to_string(),
        kind: FREE_TEXT_TYPE.to_string(),
        description: format!("{}...", preview),
        year: String::new(),
        rating: String::new(),
    }]
}

/// Text between the first two bold markers on a line
fn bold_title(line: &str) -> Option<&str> {
    let line = line.trim();
    let start = line.find(BOLD_MARKER)? + BOLD_MARKER.len();
    let end = start + line[start..].find(BOLD_MARKER)?;
    let title = line[start..end].trim();
    (!title.is_empty()).then_some(title)
}
