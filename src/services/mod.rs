pub mod generative;
pub mod ml_scoring;
pub mod providers;

pub use generative::{RecommendationResolver, Resolution};
pub use ml_scoring::{MlScoringClient, ScoredItem};
pub use providers::{GeminiClient, TextModel};
