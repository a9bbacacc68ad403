//! Author header: line layout rules and citation extraction.
//!
//! Three citation styles are tried in priority order; the first that yields
//! any match wins for the whole value:
//!
//! - `Name <email>, ...`
//! - `email (Name), ...`
//! - `Name, ...` (no email)

use super::names::check_name_email;
use super::FieldBody;
use crate::diagnostic::Diagnostics;
use regex::Regex;
use std::sync::LazyLock;

static RE_ANGLED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<author>.+?) <(?P<email>.+?)>(,\s*)?").unwrap());

static RE_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<email>.+?) \((?P<author>.+?)\)(,\s*)?").unwrap());

static RE_SIMPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<author>[^,]+)(,\s*)?").unwrap());

/// Continuation lines indented this far (or further) are over-indented.
/// `"Author: "` is eight characters wide.
const MAX_INDENT: usize = 9;

/// Check the Author header's layout and every entry in it.
pub fn check_author(body: &FieldBody, diags: &mut Diagnostics) {
    let lines = body.lines();
    let last = lines.len() - 1;
    for (offset, (line, text)) in lines.into_iter().enumerate() {
        if offset >= 1 && is_over_indented(text) {
            diags.push(line, "Author line must not be over-indented");
        }
        if offset < last && !text.ends_with(',') {
            diags.push(line, "Author continuation lines must end with a comma");
        }
        for part in text.strip_suffix(',').unwrap_or(text).split(", ") {
            check_name_email(line, part, "Author", diags);
        }
    }
}

fn is_over_indented(text: &str) -> bool {
    let head: Vec<char> = text.chars().take(MAX_INDENT).collect();
    !head.is_empty() && head.iter().all(|c| c.is_whitespace())
}

/// Author citation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitationStyle {
    /// `Name <email>`
    Angled,
    /// `email (Name)`
    Paren,
    /// `Name`
    Simple,
}

impl CitationStyle {
    pub const PRIORITY: [CitationStyle; 3] = [Self::Angled, Self::Paren, Self::Simple];

    fn regex(self) -> &'static Regex {
        match self {
            Self::Angled => &RE_ANGLED,
            Self::Paren => &RE_PAREN,
            Self::Simple => &RE_SIMPLE,
        }
    }

    /// All `(name, email)` pairs this style finds in `value`.
    fn extract(self, value: &str) -> Vec<Citation> {
        let mut found: Vec<Citation> = Vec::new();
        for caps in self.regex().captures_iter(value) {
            let mut name = caps["author"].to_string();
            let email = caps
                .name("email")
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            // A lone "Jr."-style fragment belongs to the previous name
            if !name.contains(' ') && name.ends_with('.') {
                if let Some(prev) = found.pop() {
                    name = format!("{}, {}", prev.name, name);
                }
            }
            found.push(Citation { name, email });
        }
        found
    }
}

/// One raw author citation, before lookup resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub name: String,
    pub email: String,
}

/// Extract author citations from an unfolded Author value.
pub fn parse_citations(value: &str) -> (Option<CitationStyle>, Vec<Citation>) {
    for style in CitationStyle::PRIORITY {
        let found = style.extract(value);
        if !found.is_empty() {
            return (Some(style), found);
        }
    }
    (None, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(value: &str) -> Vec<String> {
        parse_citations(value).1.into_iter().map(|c| c.name).collect()
    }

    #[test]
    fn angled_style() {
        let (style, found) = parse_citations("Jane Doe <jane@x.com>, John Smith Jr. <john@x.com>");
        assert_eq!(style, Some(CitationStyle::Angled));
        assert_eq!(
            found,
            [
                Citation { name: "Jane Doe".into(), email: "jane@x.com".into() },
                Citation { name: "John Smith Jr.".into(), email: "john@x.com".into() },
            ]
        );
    }

    #[test]
    fn paren_style() {
        let (style, found) = parse_citations("barry@python.org (Barry Warsaw), guido@python.org (Guido van Rossum)");
        assert_eq!(style, Some(CitationStyle::Paren));
        assert_eq!(found[1].name, "Guido van Rossum");
        assert_eq!(found[1].email, "guido@python.org");
    }

    #[test]
    fn simple_style_without_email() {
        let (style, found) = parse_citations("Cardinal Biggles, Cardinal Fang");
        assert_eq!(style, Some(CitationStyle::Simple));
        assert_eq!(found[0].email, "");
        assert_eq!(names("Cardinal Biggles, Cardinal Fang"), ["Cardinal Biggles", "Cardinal Fang"]);
    }

    #[test]
    fn suffix_merges_into_previous_name() {
        assert_eq!(names("Martin von Löwis, Jr., Tim Peters"), ["Martin von Löwis, Jr.", "Tim Peters"]);
    }

    #[test]
    fn suffix_without_previous_name_stands_alone() {
        assert_eq!(names("Aahz."), ["Aahz."]);
    }

    #[test]
    fn first_matching_style_wins() {
        // the bare name is dropped: styles are never mixed
        assert_eq!(names("Jane Doe <jane@x.com>, Cardinal Fang"), ["Jane Doe"]);
    }

    #[test]
    fn empty_value_has_no_citations() {
        assert_eq!(parse_citations(""), (None, Vec::new()));
    }

    #[test]
    fn layout_rules() {
        let body = FieldBody::new(
            3,
            vec![
                (3, "Cardinal Ximénez <Cardinal.Ximenez@spanish.inquisition>,".into()),
                (4, "        Cardinal Biggles".into()),
                (5, "            Cardinal Fang".into()),
            ],
        );
        let mut diags = Diagnostics::new();
        check_author(&body, &mut diags);
        assert_eq!(
            diags.to_pairs(),
            [
                (4, "Author continuation lines must end with a comma".to_string()),
                (5, "Author line must not be over-indented".to_string()),
            ]
        );
    }

    #[test]
    fn empty_author() {
        let mut diags = Diagnostics::new();
        check_author(&FieldBody::single(3, ""), &mut diags);
        assert_eq!(
            diags.to_pairs(),
            [(3, "Author entries must begin with a valid 'Name': ''".to_string())]
        );
    }
}
