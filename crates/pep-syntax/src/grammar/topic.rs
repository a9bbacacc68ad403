//! Topic: sorted, unique, Title Case tags from a closed vocabulary.
//!
//! The four checks are independent; one list may trip all of them.

use crate::diagnostic::Diagnostics;
use std::collections::HashSet;

/// Sub-indices a PEP may be filed under (lower case).
pub const TOPICS: [&str; 4] = ["governance", "packaging", "release", "typing"];

pub fn check_topic(line: usize, value: &str, diags: &mut Diagnostics) {
    let topics: Vec<&str> = value.split(", ").collect();

    let mut seen = HashSet::new();
    if !topics.iter().all(|t| seen.insert(t.to_lowercase())) {
        diags.push(line, "Topic must not contain duplicates");
    }
    if topics.iter().any(|t| *t != title_case(t)) {
        diags.push(line, "Topic must be properly capitalised (Title Case)");
    }
    if topics
        .iter()
        .any(|t| !TOPICS.contains(&t.to_lowercase().as_str()))
    {
        diags.push(line, "Topic must be for a valid sub-index");
    }
    if !topics.windows(2).all(|w| w[0] <= w[1]) {
        diags.push(line, "Topic must be sorted lexicographically");
    }
}

/// Parse a Topic value into its tags, without judging them.
pub fn parse_topics(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Upper-case the first letter of every word, lower-case the rest.
/// A word is a run of alphabetic characters.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(value: &str) -> Vec<String> {
        let mut diags = Diagnostics::new();
        check_topic(13, value, &mut diags);
        diags.into_iter().map(|d| d.message).collect()
    }

    #[test]
    fn valid_topics() {
        assert!(check("Packaging").is_empty());
        assert!(check("Governance, Packaging, Typing").is_empty());
    }

    #[test]
    fn every_check_fires_independently() {
        assert_eq!(
            check("Inquisiting, Governance, Governance, packaging"),
            [
                "Topic must not contain duplicates",
                "Topic must be properly capitalised (Title Case)",
                "Topic must be for a valid sub-index",
                "Topic must be sorted lexicographically",
            ]
        );
    }

    #[test]
    fn duplicates_ignore_case() {
        assert_eq!(
            check("Governance, governance"),
            [
                "Topic must not contain duplicates",
                "Topic must be properly capitalised (Title Case)",
            ]
        );
        assert_eq!(check("Governance, Governance"), ["Topic must not contain duplicates"]);
    }

    #[test]
    fn unsorted() {
        assert_eq!(check("Typing, Packaging"), ["Topic must be sorted lexicographically"]);
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("packaging"), "Packaging");
        assert_eq!(title_case("tYPING and-more"), "Typing And-More");
    }

    #[test]
    fn parse_list() {
        assert_eq!(parse_topics("Governance, Packaging,"), ["Governance", "Packaging"]);
    }
}
