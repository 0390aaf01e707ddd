//! Domain types for the quiz matching core.
//!
//! Contains: Topic, Candidate, QuizItem, MatchResult and the `NO_DATA`
//! stance sentinel shared with the candidate repository.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sentinel stance text served when a candidate has no recorded position.
pub const NO_DATA: &str = "No Data";

/// Canonical social-stance subject.
///
/// A single enumerated type shared by the topic resolver and the
/// repository's stance maps, so a typo in either side fails to parse
/// instead of silently never matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    LegalizationOfDivorce,
    DeathPenalty,
    SameSexMarriage,
    SogieEquality,
    LegalizationOfAbortion,
    ForeignLandOwnership,
    CriminalResponsibilityAge,
    MandatoryRotc,
    MedicalMarijuana,
    Federalism,
}

/// Every topic, in a fixed order.
pub const ALL_TOPICS: &[Topic] = &[
    Topic::LegalizationOfDivorce,
    Topic::DeathPenalty,
    Topic::SameSexMarriage,
    Topic::SogieEquality,
    Topic::LegalizationOfAbortion,
    Topic::ForeignLandOwnership,
    Topic::CriminalResponsibilityAge,
    Topic::MandatoryRotc,
    Topic::MedicalMarijuana,
    Topic::Federalism,
];

impl Topic {
    /// Canonical label, the spelling used by flat-file stance lines.
    pub fn label(&self) -> &'static str {
        match self {
            Topic::LegalizationOfDivorce => "Legalization of Divorce",
            Topic::DeathPenalty => "Reinstating the Death Penalty",
            Topic::SameSexMarriage => "Same-Sex Marriage",
            Topic::SogieEquality => "SOGIE Equality Bill",
            Topic::LegalizationOfAbortion => "Legalization of Abortion",
            Topic::ForeignLandOwnership => "Foreign Ownership of Land",
            Topic::CriminalResponsibilityAge => "Lowering the Age of Criminal Responsibility",
            Topic::MandatoryRotc => "Mandatory ROTC",
            Topic::MedicalMarijuana => "Legalization of Medical Marijuana",
            Topic::Federalism => "Shift to Federalism",
        }
    }

    /// Parse the flat-file spelling of a topic (case-insensitive).
    pub fn from_label(label: &str) -> Option<Topic> {
        let label = label.trim();
        ALL_TOPICS
            .iter()
            .copied()
            .find(|topic| topic.label().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A candidate record as loaded by the repository. Immutable for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Display name, unique within a session.
    pub name: String,
    /// Party affiliation.
    pub party: String,
    /// Recorded position text per topic.
    #[serde(default)]
    pub stances: HashMap<Topic, String>,
}

/// One answered quiz question: the literal question text shown to the user
/// and the response label they picked ("Agree", "Disagree", "Neutral", or
/// free text).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizItem {
    pub question: String,
    pub response: String,
}

impl QuizItem {
    pub fn new(question: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            response: response.into(),
        }
    }
}

/// Ranked outcome for one candidate over a finished quiz run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Snapshot of the scored candidate.
    pub candidate: Candidate,
    /// Aligned answers / total answers, in `[0, 1]`. `0.0` for an empty quiz.
    pub match_fraction: f32,
    /// Indices into the quiz item sequence that aligned (ascending, unique).
    pub matched_question_indices: Vec<usize>,
}

#[cfg(test)]
#[path = "tests/quiz_tests.rs"]
mod tests;
