use super::*;
use crate::types::Candidate;

fn candidate(name: &str, stances: &[(Topic, &str)]) -> Candidate {
    Candidate {
        name: name.to_string(),
        party: "Independent".to_string(),
        stances: stances
            .iter()
            .map(|(topic, text)| (*topic, text.to_string()))
            .collect(),
    }
}

fn items(pairs: &[(&str, &str)]) -> Vec<QuizItem> {
    pairs
        .iter()
        .map(|(question, response)| QuizItem::new(*question, *response))
        .collect()
}

#[test]
fn test_agree_versus_oppose_scores_zero() {
    let repo = CandidateRepository::new(vec![candidate(
        "Juana Dela Cruz",
        &[(Topic::DeathPenalty, "Oppose")],
    )]);
    let quiz = items(&[("Do you support the death penalty?", "Agree")]);

    let results = score_quiz(&quiz, &repo, &mut ResponseAligner::seeded(1));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].match_fraction, 0.0);
    assert!(results[0].matched_question_indices.is_empty());
}

#[test]
fn test_aligned_answers_raise_the_fraction_and_record_indices() {
    let repo = CandidateRepository::new(vec![candidate(
        "Juana Dela Cruz",
        &[
            (Topic::DeathPenalty, "Oppose"),
            (Topic::LegalizationOfDivorce, "Support"),
        ],
    )]);
    let quiz = items(&[
        ("Do you support the death penalty?", "Disagree"),
        ("Should divorce be legalized?", "Agree"),
        ("Should ROTC be mandatory?", "Agree"),
    ]);

    let results = score_quiz(&quiz, &repo, &mut ResponseAligner::seeded(1));
    let top = &results[0];
    // Questions 0 and 1 align; question 2 has no stance data for this candidate.
    assert_eq!(top.matched_question_indices, vec![0, 1]);
    assert!((top.match_fraction - 2.0 / 3.0).abs() < f32::EPSILON);
}

#[test]
fn test_no_data_everywhere_scores_zero() {
    let repo = CandidateRepository::new(vec![candidate(
        "Juana Dela Cruz",
        &[
            (Topic::DeathPenalty, "No Data"),
            (Topic::LegalizationOfDivorce, ""),
        ],
    )]);
    let quiz = items(&[
        ("Do you support the death penalty?", "Agree"),
        ("Should divorce be legalized?", "Agree"),
    ]);

    let results = score_quiz(&quiz, &repo, &mut ResponseAligner::seeded(1));
    assert_eq!(results[0].match_fraction, 0.0);
}

#[test]
fn test_unresolved_questions_are_excluded_from_alignment() {
    let repo = CandidateRepository::new(vec![candidate(
        "Juana Dela Cruz",
        &[(Topic::DeathPenalty, "Support")],
    )]);
    let quiz = items(&[
        ("What is your favorite color?", "Agree"),
        ("Do you support the death penalty?", "Agree"),
    ]);

    let results = score_quiz(&quiz, &repo, &mut ResponseAligner::seeded(1));
    assert_eq!(results[0].matched_question_indices, vec![1]);
    assert_eq!(results[0].match_fraction, 0.5);
}

#[test]
fn test_empty_quiz_scores_everyone_zero_in_enumeration_order() {
    let repo = CandidateRepository::new(vec![
        candidate("Alpha", &[]),
        candidate("Bravo", &[]),
        candidate("Charlie", &[]),
    ]);

    let results = score_quiz(&[], &repo, &mut ResponseAligner::seeded(1));
    assert_eq!(results.len(), 3);
    let names: Vec<&str> = results.iter().map(|r| r.candidate.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Bravo", "Charlie"]);
    assert!(results.iter().all(|r| r.match_fraction == 0.0));
}

#[test]
fn test_empty_repository_yields_empty_results() {
    let repo = CandidateRepository::new(Vec::new());
    let quiz = items(&[("Do you support the death penalty?", "Agree")]);

    let results = score_quiz(&quiz, &repo, &mut ResponseAligner::seeded(1));
    assert!(results.is_empty());
}

#[test]
fn test_non_neutral_scoring_is_idempotent() {
    let repo = CandidateRepository::new(vec![
        candidate("Alpha", &[(Topic::DeathPenalty, "Support")]),
        candidate("Bravo", &[(Topic::DeathPenalty, "Oppose")]),
    ]);
    let quiz = items(&[
        ("Do you support the death penalty?", "Agree"),
        ("Should divorce be legalized?", "Disagree"),
    ]);

    // Different seeds: without neutral answers the RNG is never drawn.
    let first = score_quiz(&quiz, &repo, &mut ResponseAligner::seeded(1));
    let second = score_quiz(&quiz, &repo, &mut ResponseAligner::seeded(999));

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.candidate.name, b.candidate.name);
        assert_eq!(a.match_fraction, b.match_fraction);
        assert_eq!(a.matched_question_indices, b.matched_question_indices);
    }
}

#[test]
fn test_top_five_truncation_with_stable_ties() {
    // Ten questions, one per topic, all answered "Agree". Candidate k
    // supports the first k topics and opposes the rest, so fractions are
    // distinct except for the deliberate 0.8 tie.
    let quiz = items(&[
        ("Should divorce be legalized?", "Agree"),
        ("Do you support the death penalty?", "Agree"),
        ("Do you support same-sex marriage?", "Agree"),
        ("Should the SOGIE bill pass?", "Agree"),
        ("Should abortion be legal?", "Agree"),
        ("Should foreign land ownership be permitted?", "Agree"),
        ("Should the age of criminal responsibility be lowered?", "Agree"),
        ("Should ROTC be mandatory?", "Agree"),
        ("Do you support medical marijuana?", "Agree"),
        ("Do you favor a shift to federalism?", "Agree"),
    ]);

    let supports = |count: usize| -> Vec<(Topic, &'static str)> {
        crate::types::ALL_TOPICS
            .iter()
            .enumerate()
            .map(|(i, topic)| (*topic, if i < count { "Support" } else { "Oppose" }))
            .collect()
    };

    let repo = CandidateRepository::new(vec![
        candidate("Ninety", &supports(9)),
        candidate("EightyA", &supports(8)),
        candidate("EightyB", &supports(8)),
        candidate("Seventy", &supports(7)),
        candidate("Sixty", &supports(6)),
        candidate("Fifty", &supports(5)),
        candidate("Forty", &supports(4)),
    ]);

    let results = score_quiz(&quiz, &repo, &mut ResponseAligner::seeded(1));

    assert_eq!(results.len(), TOP_MATCHES);
    let names: Vec<&str> = results.iter().map(|r| r.candidate.name.as_str()).collect();
    assert_eq!(names, vec!["Ninety", "EightyA", "EightyB", "Seventy", "Sixty"]);
    for window in results.windows(2) {
        assert!(window[0].match_fraction >= window[1].match_fraction);
    }
    assert!((results[0].match_fraction - 0.9).abs() < 1e-6);
}

#[test]
fn test_output_never_exceeds_top_matches() {
    let repo = CandidateRepository::new(
        (0..12)
            .map(|i| candidate(&format!("Candidate {i}"), &[(Topic::DeathPenalty, "Support")]))
            .collect(),
    );
    let quiz = items(&[("Do you support the death penalty?", "Agree")]);

    let results = score_quiz(&quiz, &repo, &mut ResponseAligner::seeded(1));
    assert_eq!(results.len(), TOP_MATCHES);
}
