//! Question text normalization for the topic resolver.

use deunicode::deunicode;
use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex for stripping non-alphanumeric characters.
static RE_NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("Invalid regex"));

/// Preprocess question text into a normalized form for trigger matching.
///
/// Pipeline:
/// 1. Transliterate non-Latin characters via deunicode
/// 2. Replace non-alphanumeric symbols with spaces (so "same-sex" and
///    "same sex" read the same)
/// 3. Lowercase and collapse runs of whitespace
pub fn normalize_text(text: &str) -> String {
    let latin = deunicode(text);
    let clean = RE_NON_ALNUM.replace_all(&latin, " ");
    clean
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
