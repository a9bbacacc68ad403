//! Field grammars: one checker per header that needs structured parsing.
//!
//! Grammars never fail: malformed input is the normal case and becomes
//! diagnostics. Each accepted header is handed a [`FieldBody`] that spans
//! from its own line up to the next accepted header.

pub mod author;
pub mod date;
pub mod names;
pub mod reference;
pub mod status;
pub mod thread;
pub mod topic;
pub mod version;

use crate::diagnostic::Diagnostics;
use crate::model::PepType;
use crate::schema::{Accepted, HeaderKind};
use crate::tokenizer::{HeaderBlock, HeaderRecord};
use chrono::NaiveDate;

/// Text of one accepted header, line by line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBody {
    /// Line of the header itself.
    pub line: usize,
    lines: Vec<(usize, String)>,
}

impl FieldBody {
    pub fn new(line: usize, lines: Vec<(usize, String)>) -> Self {
        Self { line, lines }
    }

    /// Single-line body, mostly for tests.
    pub fn single(line: usize, value: &str) -> Self {
        Self::new(line, vec![(line, value.to_string())])
    }

    /// Body of one record alone: its value and its own continuation lines.
    pub fn from_record(record: &HeaderRecord) -> Self {
        let mut lines = vec![(record.line, record.value.clone())];
        for cont in &record.continuations {
            lines.push((cont.line, cont.text.clone()));
        }
        Self::new(record.line, lines)
    }

    /// Body of `accepted[position]`: its record plus any rejected records
    /// (duplicates, unknown names) that follow before the next accepted one.
    pub fn from_block(block: &HeaderBlock, accepted: &[Accepted], position: usize) -> Self {
        let start = accepted[position].index;
        let end = accepted
            .get(position + 1)
            .map_or(block.records.len(), |next| next.index);

        let mut body = Self::from_record(&block.records[start]);
        for record in &block.records[start + 1..end] {
            body.lines.push((record.line, record.source.clone()));
            for cont in &record.continuations {
                body.lines.push((cont.line, cont.text.clone()));
            }
        }
        body
    }

    /// Whole body joined with `\n`, leading whitespace removed.
    pub fn text(&self) -> String {
        let joined: Vec<&str> = self.lines.iter().map(|(_, t)| t.as_str()).collect();
        joined.join("\n").trim_start().to_string()
    }

    /// Body lines with their line numbers. Leading blank lines are dropped
    /// and the first remaining line loses its indentation, mirroring `text()`.
    pub fn lines(&self) -> Vec<(usize, &str)> {
        let mut out = Vec::new();
        for (line, text) in &self.lines {
            if out.is_empty() {
                if text.trim().is_empty() {
                    continue;
                }
                out.push((*line, text.trim_start()));
            } else {
                out.push((*line, text.as_str()));
            }
        }
        if out.is_empty() {
            out.push((self.line, ""));
        }
        out
    }

    /// Lines trimmed and joined with single spaces (RFC-822 unfolding).
    pub fn unfolded(&self) -> String {
        self.lines()
            .iter()
            .map(|(_, t)| t.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Read-only inputs shared by the grammars of one document.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext {
    /// Reference date for the "not in the future" rule.
    pub today: NaiveDate,
    /// Parsed `Type` header, for the Status cross-field rules.
    pub pep_type: Option<PepType>,
}

/// Run the grammar for `kind` over `body`.
pub fn check_field(kind: HeaderKind, body: &FieldBody, ctx: &FieldContext, diags: &mut Diagnostics) {
    tracing::trace!(header = kind.name(), line = body.line, "checking field");
    let line = body.line;
    match kind {
        HeaderKind::Pep | HeaderKind::Version | HeaderKind::LastModified => {}
        HeaderKind::Title => check_title(line, &body.text(), diags),
        HeaderKind::Author => author::check_author(body, diags),
        HeaderKind::Sponsor => names::check_sponsor(line, &body.text(), diags),
        HeaderKind::BdflDelegate => names::check_delegate(line, &body.text(), diags),
        HeaderKind::DiscussionsTo => thread::check_discussions_to(line, &body.text(), diags),
        HeaderKind::Status => status::check_status(line, &body.text(), ctx.pep_type, diags),
        HeaderKind::Type => status::check_type(line, &body.text(), diags),
        HeaderKind::Topic => topic::check_topic(line, &body.text(), diags),
        HeaderKind::ContentType => check_content_type(line, &body.text(), diags),
        HeaderKind::Requires | HeaderKind::Replaces | HeaderKind::SupersededBy => {
            reference::check_references(line, &body.text(), diags)
        }
        HeaderKind::Created => {
            date::check_date(line, body.text().trim_end(), "Created", ctx.today, diags)
        }
        HeaderKind::PythonVersion => version::check_python_version(line, &body.text(), diags),
        HeaderKind::PostHistory => thread::check_post_history(body, ctx.today, diags),
        HeaderKind::Resolution => thread::check_resolution(line, &body.text(), diags),
    }
}

fn check_title(line: usize, title: &str, diags: &mut Diagnostics) {
    if title.is_empty() {
        diags.push(line, "PEP must have a title");
    } else if title.chars().count() > 79 {
        diags.push(line, "PEP title must be less than 80 characters");
    }
}

fn check_content_type(line: usize, value: &str, diags: &mut Diagnostics) {
    if value != "text/x-rst" {
        diags.push(line, "Content-Type must be 'text/x-rst'");
    }
}

/// Non-empty run of ASCII digits.
pub(crate) fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Non-empty and alphanumeric throughout.
pub(crate) fn is_alnum(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphanumeric)
}
