//! Fatal errors: conditions that abort processing of a single document.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PepError {
    /// The document has no parseable header block.
    #[error("({document}): {reason}")]
    MalformedHeader { document: String, reason: String },

    /// An author citation names someone absent from the lookup table.
    #[error("{}({document}): author {name:?} is not in the authors lookup", pep_prefix(.number))]
    UnknownAuthor {
        document: String,
        number: Option<u32>,
        name: String,
    },

    #[error("invalid authors lookup: {0}")]
    Lookup(#[from] csv::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn pep_prefix(number: &Option<u32>) -> String {
    match number {
        Some(n) => format!("PEP {} ", n),
        None => String::new(),
    }
}

impl PepError {
    pub(crate) fn malformed(document: &str, reason: impl Into<String>) -> Self {
        Self::MalformedHeader {
            document: document.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PepError>;
