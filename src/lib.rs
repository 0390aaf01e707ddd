//! Gabáy matching core.
//!
//! Library backing the Gabáy voter education app's values-matching quiz:
//! a session-scoped candidate repository fed by flat-file records, a
//! keyword topic resolver, a response aligner and a scorer that ranks
//! candidates by how often their recorded stances line up with the user's
//! answers.

pub mod services;
pub mod types;

pub use services::candidates::CandidateRepository;
pub use services::matcher::{resolve_topic, score_quiz, ResponseAligner, TOP_MATCHES};
pub use types::{Candidate, MatchResult, QuizItem, Topic, ALL_TOPICS, NO_DATA};
