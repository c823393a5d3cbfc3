// ABOUTME: Food-name cleanup and normalization for matching directive foods to profiles
// ABOUTME: Exact match first, then normalized containment in either direction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

use regex::Regex;
use std::sync::LazyLock;

/// Parenthetical and bracketed qualifiers: （皮なし）, (raw), 【国産】, [冷凍]
/// Stored as Option to handle compilation failures gracefully
static QUALIFIER_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[（(【\[][^）)】\]]*[）)】\]]").ok());

/// Words that qualify a food without changing which profile it is
const SEARCH_NOISE: [&str; 2] = ["サイズ", "生"];

/// Remove filler words (を, 追加, ...) and surrounding whitespace from a parsed name
#[must_use]
pub fn clean_food_name(name: &str, filler_words: &[String]) -> String {
    let mut cleaned = name.to_owned();
    for word in filler_words.iter().filter(|w| !w.is_empty()) {
        cleaned = cleaned.replace(word.as_str(), "");
    }
    cleaned.trim().to_owned()
}

/// Search key: qualifiers, whitespace, and noise words removed, lowercased
#[must_use]
pub fn normalize_for_search(name: &str) -> String {
    let stripped = QUALIFIER_PATTERN
        .as_ref()
        .map_or_else(|| name.to_owned(), |re| re.replace_all(name, "").into_owned());
    let mut key: String = stripped.chars().filter(|c| !c.is_whitespace()).collect();
    for noise in SEARCH_NOISE {
        key = key.replace(noise, "");
    }
    key.to_lowercase()
}

/// Pick the candidate a query refers to
///
/// Stage one is exact equality. Stage two compares normalized keys and
/// accepts containment in either direction; the first candidate in input
/// order wins.
#[must_use]
pub fn best_match<'a, I>(query: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let candidates: Vec<&'a str> = candidates.into_iter().collect();
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    if let Some(exact) = candidates.iter().copied().find(|c| c.trim() == query) {
        return Some(exact);
    }

    let key = normalize_for_search(query);
    if key.is_empty() {
        return None;
    }
    candidates.into_iter().find(|candidate| {
        let candidate_key = normalize_for_search(candidate);
        !candidate_key.is_empty() && (candidate_key.contains(&key) || key.contains(&candidate_key))
    })
}
