//! Header tokenizer. Splits the leading RFC-822-style block into records.
//!
//! A header line is `Name:` followed by a space or the end of the line.
//! Every other non-blank line inside the block continues the current record
//! and keeps its own line number, so grammars can point at it directly.
//! The block ends at the first blank line (after any leading blanks).

use crate::error::{PepError, Result};
use regex::Regex;
use std::sync::LazyLock;

static RE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z\-]+):(?: |$)(.*)$").unwrap());

// Loose `Name:` shape, used only to decide whether a block is there at all
static RE_HEADER_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\-]+:").unwrap());

/// A line that extends the record above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Continuation {
    pub line: usize,
    /// Line text exactly as written, indentation included.
    pub text: String,
}

/// One logical header: its name, first-line value and continuation lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRecord {
    pub name: String,
    /// Text after the colon on the header line, leading whitespace removed.
    pub value: String,
    /// Line number of the `Name:` line.
    pub line: usize,
    pub continuations: Vec<Continuation>,
    /// The header line as written.
    pub source: String,
}

impl HeaderRecord {
    /// First-line value and continuation lines joined with `\n`.
    pub fn raw_value(&self) -> String {
        let mut raw = self.value.clone();
        for cont in &self.continuations {
            raw.push('\n');
            raw.push_str(&cont.text);
        }
        raw
    }

    /// Render back to header text (`Name: value` plus continuation lines).
    pub fn to_header_text(&self) -> String {
        format!("{}: {}", self.name, self.raw_value())
    }
}

/// The tokenized header block of one document.
#[derive(Debug, Clone, Default)]
pub struct HeaderBlock {
    /// Non-blank lines that precede the first header line.
    pub preamble: Vec<Continuation>,
    pub records: Vec<HeaderRecord>,
}

/// Tokenize the header block at the top of `text`.
///
/// `document` identifies the source in the fatal error.
pub fn tokenize(document: &str, text: &str) -> Result<HeaderBlock> {
    let mut block = HeaderBlock::default();
    let mut started = false;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            if started {
                break;
            }
            continue;
        }
        if !started {
            if !RE_HEADER_SHAPE.is_match(line) {
                return Err(PepError::malformed(
                    document,
                    format!("line {} is not a 'Name: value' header line", line_no),
                ));
            }
            started = true;
        }

        if let Some(caps) = RE_HEADER.captures(line) {
            block.records.push(HeaderRecord {
                name: caps[1].to_string(),
                value: caps[2].trim_start().to_string(),
                line: line_no,
                continuations: Vec::new(),
                source: line.to_string(),
            });
            continue;
        }

        let cont = Continuation {
            line: line_no,
            text: line.to_string(),
        };
        match block.records.last_mut() {
            Some(record) => record.continuations.push(cont),
            None => block.preamble.push(cont),
        }
    }

    if !started {
        return Err(PepError::malformed(document, "document is empty"));
    }
    if block.records.is_empty() {
        return Err(PepError::malformed(document, "no headers found"));
    }

    tracing::debug!(
        document,
        headers = block.records.len(),
        preamble = block.preamble.len(),
        "tokenized header block"
    );
    Ok(block)
}
