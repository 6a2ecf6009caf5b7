//! Quiz domain - the coach-matching decision sequence.

mod engine;
mod profile;
mod questions;

pub use engine::{QuizAnswers, QuizEngine, QuizStep};
pub use profile::{resolve_profile, RecommendationProfile};
pub use questions::{question, QuestionId, QuizOption, QuizQuestion};
