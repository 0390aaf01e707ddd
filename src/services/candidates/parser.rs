//! Flat-file candidate record parsing.
//!
//! The ingestion format is a plain text file of record blocks separated by
//! blank lines. Each block starts with a `Name:` line; `Party:` sets the
//! party; each `Social Stance: <Topic> - <Stance>` line adds one stance map
//! entry. Example:
//!
//! ```text
//! Name: Juana Dela Cruz
//! Party: Partido ng Pag-asa
//! Social Stance: Legalization of Divorce - Strongly support
//! Social Stance: Reinstating the Death Penalty - Oppose
//! ```
//!
//! Malformed content never errors out of the parser: blocks without a
//! leading `Name:` line, unknown topic labels and stance lines missing the
//! `-` separator are logged and skipped.

use std::collections::HashMap;

use crate::types::{Candidate, Topic};

const NAME_KEY: &str = "Name:";
const PARTY_KEY: &str = "Party:";
const STANCE_KEY: &str = "Social Stance:";

/// Separates `<Topic>` from `<Stance>` on a stance line.
const STANCE_SEPARATOR: &str = " - ";

pub(super) fn parse_records(text: &str) -> Vec<Candidate> {
    let mut records = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !block.is_empty() {
                if let Some(candidate) = parse_record(&block) {
                    records.push(candidate);
                }
                block.clear();
            }
        } else {
            block.push(line);
        }
    }
    if !block.is_empty() {
        if let Some(candidate) = parse_record(&block) {
            records.push(candidate);
        }
    }

    records
}

fn parse_record(lines: &[&str]) -> Option<Candidate> {
    // A record must open with its Name line.
    let first = lines.first()?.trim();
    let Some(name) = first.strip_prefix(NAME_KEY) else {
        log::warn!("Skipping record block that does not start with '{NAME_KEY}': '{first}'");
        return None;
    };
    let name = name.trim();
    if name.is_empty() {
        log::warn!("Skipping record block with an empty candidate name");
        return None;
    }

    let mut party = String::new();
    let mut stances: HashMap<Topic, String> = HashMap::new();

    for line in &lines[1..] {
        let line = line.trim();
        if let Some(value) = line.strip_prefix(PARTY_KEY) {
            party = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix(STANCE_KEY) {
            parse_stance_line(name, value, &mut stances);
        }
        // Other record fields (age, platform, ...) are irrelevant to matching.
    }

    Some(Candidate {
        name: name.to_string(),
        party,
        stances,
    })
}

/// Parse the `<Topic> - <Stance>` payload of a `Social Stance:` line.
fn parse_stance_line(candidate: &str, value: &str, stances: &mut HashMap<Topic, String>) {
    let Some((label, stance)) = value.split_once(STANCE_SEPARATOR) else {
        log::warn!("Malformed stance line for '{candidate}': '{}'", value.trim());
        return;
    };

    match Topic::from_label(label) {
        Some(topic) => {
            stances.insert(topic, stance.trim().to_string());
        }
        None => log::warn!(
            "Unknown stance topic '{}' for '{candidate}', skipping",
            label.trim()
        ),
    }
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod tests;
