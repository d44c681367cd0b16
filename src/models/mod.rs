pub mod recommendation;
pub mod request;

pub use recommendation::{scalar_text, CandidateRecord, Recommendation, RecommendationSource};
pub use request::{RecommendationRequest, UserInterest, WatchHistoryItem};
