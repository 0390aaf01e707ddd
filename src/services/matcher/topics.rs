//! Question-to-topic resolution via an ordered keyword rule table.
//!
//! Each rule pairs a [`Topic`] with its trigger phrases. Rules are checked
//! in table order and the first hit wins, so overlapping vocabulary across
//! topics resolves by the fixed priority of the table — never by set
//! semantics. A question that trips no rule has no topic.

use crate::services::matcher::normalizer::normalize_text;
use crate::types::Topic;

/// How a rule's trigger phrases combine.
#[derive(Debug, Clone, Copy)]
pub enum TriggerSet {
    /// Any single phrase present in the question resolves the rule.
    AnyOf(&'static [&'static str]),
    /// Every phrase must be present. Used where the individual words are
    /// too broad to stand alone (e.g. "foreign" + "land" + "ownership").
    AllOf(&'static [&'static str]),
}

/// One resolver rule: a topic and the phrases that trigger it.
#[derive(Debug, Clone, Copy)]
pub struct TopicRule {
    pub topic: Topic,
    pub triggers: TriggerSet,
}

impl TopicRule {
    fn matches(&self, normalized_question: &str) -> bool {
        match self.triggers {
            TriggerSet::AnyOf(phrases) => phrases
                .iter()
                .any(|phrase| normalized_question.contains(phrase)),
            TriggerSet::AllOf(phrases) => phrases
                .iter()
                .all(|phrase| normalized_question.contains(phrase)),
        }
    }
}

/// Ordered rule table; the first matching rule wins.
///
/// Trigger phrases are written pre-normalized (lowercase, punctuation
/// collapsed to single spaces) to match [`normalize_text`] output. The
/// AllOf rule sits last because its single-word triggers are broad.
pub const TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        topic: Topic::DeathPenalty,
        triggers: TriggerSet::AnyOf(&[
            "death penalty",
            "capital punishment",
            "execution",
            "lethal injection",
            "death sentence",
            "capital offense",
        ]),
    },
    TopicRule {
        topic: Topic::SameSexMarriage,
        triggers: TriggerSet::AnyOf(&[
            "same sex marriage",
            "same sex",
            "gay marriage",
            "marriage equality",
            "civil union",
        ]),
    },
    TopicRule {
        topic: Topic::LegalizationOfDivorce,
        triggers: TriggerSet::AnyOf(&["divorce", "dissolution of marriage", "annulment"]),
    },
    TopicRule {
        topic: Topic::SogieEquality,
        triggers: TriggerSet::AnyOf(&[
            "sogie",
            "gender identity",
            "sexual orientation",
            "anti discrimination",
        ]),
    },
    TopicRule {
        topic: Topic::LegalizationOfAbortion,
        triggers: TriggerSet::AnyOf(&["abortion", "terminate a pregnancy", "pro choice"]),
    },
    TopicRule {
        topic: Topic::MedicalMarijuana,
        triggers: TriggerSet::AnyOf(&["marijuana", "cannabis", "medical hemp"]),
    },
    TopicRule {
        topic: Topic::CriminalResponsibilityAge,
        triggers: TriggerSet::AnyOf(&[
            "criminal responsibility",
            "juvenile offender",
            "minimum age of criminal",
        ]),
    },
    TopicRule {
        topic: Topic::MandatoryRotc,
        triggers: TriggerSet::AnyOf(&["rotc", "reserve officers", "military training"]),
    },
    TopicRule {
        topic: Topic::Federalism,
        triggers: TriggerSet::AnyOf(&[
            "federalism",
            "federal form of government",
            "charter change",
        ]),
    },
    TopicRule {
        topic: Topic::ForeignLandOwnership,
        triggers: TriggerSet::AllOf(&["foreign", "land", "ownership"]),
    },
];

/// Map a free-text quiz question to its stance topic, if any.
pub fn resolve_topic(question: &str) -> Option<Topic> {
    let normalized = normalize_text(question);
    TOPIC_RULES
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map(|rule| rule.topic)
}

#[cfg(test)]
#[path = "tests/topics_tests.rs"]
mod tests;
