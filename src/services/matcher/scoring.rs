//! Candidate scoring and ranking over a finished quiz run.

use rand::Rng;

use crate::services::candidates::CandidateRepository;
use crate::services::matcher::alignment::ResponseAligner;
use crate::services::matcher::topics::resolve_topic;
use crate::types::{MatchResult, QuizItem, Topic, NO_DATA};

/// Number of ranked results handed back to the presentation layer.
pub const TOP_MATCHES: usize = 5;

/// Score every candidate against the quiz run and return the top
/// [`TOP_MATCHES`], sorted by descending match fraction.
///
/// The sort is stable, so candidates with equal fractions keep their
/// repository enumeration order. An empty quiz gives every candidate a
/// fraction of `0.0` (never NaN); an empty repository gives an empty
/// result list. Fresh [`MatchResult`]s are built per run — nothing shared
/// is mutated.
pub fn score_quiz<R: Rng>(
    items: &[QuizItem],
    repo: &CandidateRepository,
    aligner: &mut ResponseAligner<R>,
) -> Vec<MatchResult> {
    // Topics depend only on question text; resolve once per run.
    let topics: Vec<Option<Topic>> = items
        .iter()
        .map(|item| resolve_topic(&item.question))
        .collect();

    let mut results: Vec<MatchResult> = repo
        .all_candidates()
        .iter()
        .map(|candidate| {
            let mut matched_question_indices = Vec::new();

            for (index, item) in items.iter().enumerate() {
                let Some(topic) = topics[index] else {
                    continue;
                };
                let stance = repo.stance(&candidate.name, topic);
                if stance == NO_DATA {
                    continue;
                }
                if aligner.align(&item.response, stance) {
                    matched_question_indices.push(index);
                }
            }

            let match_fraction = if items.is_empty() {
                0.0
            } else {
                matched_question_indices.len() as f32 / items.len() as f32
            };

            #[cfg(feature = "debug_matcher")]
            log::debug!(
                "[MATCHER_CALIBRATION] score_quiz: candidate='{}' matched={:?} fraction={:.2}",
                candidate.name,
                matched_question_indices,
                match_fraction
            );

            MatchResult {
                candidate: candidate.clone(),
                match_fraction,
                matched_question_indices,
            }
        })
        .collect();

    // Stable sort: ties keep repository enumeration order.
    results.sort_by(|a, b| {
        b.match_fraction
            .partial_cmp(&a.match_fraction)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results.truncate(TOP_MATCHES);

    log::debug!(
        "score_quiz: {} items x {} candidates -> {} results (best {:.2})",
        items.len(),
        repo.len(),
        results.len(),
        results.first().map(|r| r.match_fraction).unwrap_or(0.0)
    );

    results
}

#[cfg(test)]
#[path = "tests/scoring_tests.rs"]
mod tests;
