//! Free-text doctor name matching over the schedule catalog.
//!
//! Queries and catalog names are normalized the same way: lower-cased,
//! split on whitespace, honorifics dropped. An entry matches when every
//! query word appears in the entry's name word-set, so word order does not
//! matter ("ali mehdi" matches "Dr. Mehdi Ali").

fn is_honorific(word: &str) -> bool {
    matches!(word.trim_end_matches('.'), "dr" | "prof")
}

/// Lower-cased name words with honorific tokens removed.
pub fn normalize_name(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split_whitespace()
        .filter(|word| !is_honorific(word))
        .map(str::to_string)
        .collect()
}

/// Whole-word-set containment. An empty query (or one that is nothing but
/// honorifics) matches nothing rather than everything.
pub fn name_matches(query: &str, doctor_name: &str) -> bool {
    let query_words = normalize_name(query);
    if query_words.is_empty() {
        return false;
    }
    let name_words = normalize_name(doctor_name);
    query_words.iter().all(|word| name_words.contains(word))
}

/// Case-insensitive substring match. Specialty labels are long multi-word
/// strings, so callers pass exact or partial substrings of them.
pub fn specialty_matches(query: &str, specialty: &str) -> bool {
    specialty.to_lowercase().contains(&query.to_lowercase())
}
