pub mod errors;
pub mod quiz;

pub use quiz::{Candidate, MatchResult, QuizItem, Topic, ALL_TOPICS, NO_DATA};
