//! Response-to-stance alignment.
//!
//! Decides whether a user's quiz response is compatible with a candidate's
//! recorded stance text for the same topic. Neutral answers deliberately
//! resolve by coin flip to diversify results, so the random source is
//! injected and seedable for reproducible tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::NO_DATA;

const AGREE_SYNONYMS: &[&str] = &["agree", "support", "favor", "yes"];
const DISAGREE_SYNONYMS: &[&str] = &["disagree", "oppose", "against", "no"];

const AGREE_STANCE_MARKERS: &[&str] = &["agree", "support", "favor", "yes", "for", "approve"];
const DISAGREE_STANCE_MARKERS: &[&str] =
    &["disagree", "oppose", "against", "no", "reject", "disapprove"];

pub struct ResponseAligner<R: Rng> {
    rng: R,
}

impl ResponseAligner<StdRng> {
    /// Entropy-seeded aligner for normal app use.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed-seed aligner so neutral-response handling is reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ResponseAligner<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ResponseAligner<R> {
    /// Wrap an arbitrary random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Is `response` compatible with the candidate's `stance` text?
    ///
    /// Missing stance data (empty or the `"No Data"` sentinel) never
    /// aligns. A "Neutral" response aligns with probability 0.5. Anything
    /// else is classified by synonym substrings into an agree or disagree
    /// polarity and checked against the matching stance marker set; a
    /// response in neither synonym set never aligns.
    pub fn align(&mut self, response: &str, stance: &str) -> bool {
        if stance.is_empty() || stance == NO_DATA {
            return false;
        }

        let response = response.trim().to_lowercase();
        let stance = stance.to_lowercase();

        if response == "neutral" {
            return self.rng.gen_bool(0.5);
        }

        // "disagree" contains the substring "agree", so the negative
        // synonym set must be tested first.
        if contains_any(&response, DISAGREE_SYNONYMS) {
            return contains_any(&stance, DISAGREE_STANCE_MARKERS);
        }
        if contains_any(&response, AGREE_SYNONYMS) {
            return contains_any(&stance, AGREE_STANCE_MARKERS);
        }

        false
    }
}

fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| text.contains(phrase))
}

#[cfg(test)]
#[path = "tests/alignment_tests.rs"]
mod tests;
