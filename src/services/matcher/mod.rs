//! Quiz matching engine — the "brain" of Gabáy.
//!
//! Turns a finished quiz run into a ranked candidate shortlist in three
//! steps: resolve each question to a stance topic, align the user's
//! response against the candidate's recorded stance, then score and rank
//! all candidates.

pub mod alignment;
pub mod normalizer;
pub mod scoring;
pub mod topics;

pub use alignment::ResponseAligner;
pub use scoring::{score_quiz, TOP_MATCHES};
pub use topics::resolve_topic;
