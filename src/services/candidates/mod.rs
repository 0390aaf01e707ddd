//! Candidate repository: session-scoped, read-only store of candidate
//! records served to the matcher.
//!
//! Constructed once when the app starts and passed by reference to
//! consumers; there is no process-wide candidate cache.

mod parser;

use std::collections::HashMap;
use std::path::Path;

use crate::types::errors::RepositoryResult;
use crate::types::{Candidate, Topic, NO_DATA};

#[derive(Debug, Clone)]
pub struct CandidateRepository {
    entries: Vec<Candidate>,
    /// Pre-computed: lowercase name -> index into `entries`.
    by_name: HashMap<String, usize>,
}

impl CandidateRepository {
    /// Build a repository from already-parsed records.
    ///
    /// Duplicate names collapse to the record seen last; enumeration order
    /// otherwise follows the input order.
    pub fn new(records: Vec<Candidate>) -> Self {
        let mut entries: Vec<Candidate> = Vec::with_capacity(records.len());
        let mut by_name: HashMap<String, usize> = HashMap::with_capacity(records.len());

        for candidate in records {
            let key = candidate.name.to_lowercase();
            match by_name.get(&key) {
                Some(&index) => {
                    log::warn!(
                        "Duplicate candidate record for '{}'; keeping the later one",
                        candidate.name
                    );
                    entries[index] = candidate;
                }
                None => {
                    by_name.insert(key, entries.len());
                    entries.push(candidate);
                }
            }
        }

        Self { entries, by_name }
    }

    /// Load from the flat-file record format (see [`parser`] for the layout).
    pub fn from_text(text: &str) -> Self {
        let records = parser::parse_records(text);
        if records.is_empty() {
            log::warn!("Candidate data contained no parseable records");
        }
        Self::new(records)
    }

    /// Read and parse a candidate data file.
    pub fn from_path(path: &Path) -> RepositoryResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    /// All candidates, in file order.
    pub fn all_candidates(&self) -> &[Candidate] {
        &self.entries
    }

    /// Look up a candidate by name (case-insensitive).
    pub fn candidate(&self, name: &str) -> Option<&Candidate> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&index| &self.entries[index])
    }

    /// Stance text for a candidate on a topic, or the `"No Data"` sentinel
    /// when either the candidate or the stance is missing.
    pub fn stance(&self, name: &str, topic: Topic) -> &str {
        self.candidate(name)
            .and_then(|candidate| candidate.stances.get(&topic))
            .map(String::as_str)
            .unwrap_or(NO_DATA)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
#[path = "tests/repository_tests.rs"]
mod tests;
