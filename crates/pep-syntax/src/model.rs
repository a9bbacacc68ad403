//! Typed document model handed to rendering and index code.

use crate::authors::{Author, AuthorLookup};
use crate::error::{PepError, Result};
use crate::grammar::author::parse_citations;
use crate::grammar::reference::parse_references;
use crate::grammar::topic::parse_topics;
use crate::grammar::FieldBody;
use crate::schema::{Accepted, HeaderKind};
use crate::tokenizer::HeaderBlock;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PepType {
    #[serde(rename = "Standards Track")]
    StandardsTrack,
    Informational,
    Process,
}

impl PepType {
    pub const ALL: [PepType; 3] = [Self::StandardsTrack, Self::Informational, Self::Process];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::StandardsTrack => "Standards Track",
            Self::Informational => "Informational",
            Self::Process => "Process",
        }
    }
}

impl fmt::Display for PepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PepStatus {
    Accepted,
    Provisional,
    Rejected,
    Withdrawn,
    Deferred,
    Final,
    Active,
    Draft,
    Superseded,
}

/// Historical status (PEP 401) read as Rejected.
const APRIL_FOOL: &str = "April Fool!";

impl PepStatus {
    pub const ALL: [PepStatus; 9] = [
        Self::Accepted,
        Self::Provisional,
        Self::Rejected,
        Self::Withdrawn,
        Self::Deferred,
        Self::Final,
        Self::Active,
        Self::Draft,
        Self::Superseded,
    ];

    /// Parse a Status value. `April Fool!` is coerced to `Rejected`.
    pub fn parse(value: &str) -> Option<Self> {
        if value == APRIL_FOOL {
            return Some(Self::Rejected);
        }
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::Provisional => "Provisional",
            Self::Rejected => "Rejected",
            Self::Withdrawn => "Withdrawn",
            Self::Deferred => "Deferred",
            Self::Final => "Final",
            Self::Active => "Active",
            Self::Draft => "Draft",
            Self::Superseded => "Superseded",
        }
    }
}

impl fmt::Display for PepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best-effort metadata of one PEP. Fields whose header is missing or
/// malformed are `None` (or empty); the diagnostics say why.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Pep {
    pub number: Option<u32>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub pep_type: Option<PepType>,
    pub status: Option<PepStatus>,
    pub authors: Vec<Author>,
    pub topics: Vec<String>,
    pub requires: Vec<u32>,
    pub replaces: Vec<u32>,
    pub superseded_by: Vec<u32>,
}

/// Accepted header records of one document, looked up by kind.
///
/// Bodies here are the record alone; rejected records that follow an
/// accepted one are never read as its value.
pub(crate) struct Fields<'a> {
    block: &'a HeaderBlock,
    accepted: &'a [Accepted],
}

impl<'a> Fields<'a> {
    pub(crate) fn new(block: &'a HeaderBlock, accepted: &'a [Accepted]) -> Self {
        Self { block, accepted }
    }

    pub(crate) fn body(&self, kind: HeaderKind) -> Option<FieldBody> {
        let accepted = self.accepted.iter().find(|a| a.kind == kind)?;
        Some(FieldBody::from_record(&self.block.records[accepted.index]))
    }

    pub(crate) fn text(&self, kind: HeaderKind) -> Option<String> {
        self.body(kind).map(|b| b.text())
    }

    pub(crate) fn pep_type(&self) -> Option<PepType> {
        self.text(HeaderKind::Type).and_then(|t| PepType::parse(&t))
    }
}

impl Pep {
    /// Build the model from checked headers, resolving authors in `lookup`.
    ///
    /// Fails only when a cited author is missing from the lookup.
    pub(crate) fn from_fields(document: &str, fields: &Fields<'_>, lookup: &AuthorLookup) -> Result<Self> {
        let number = fields
            .text(HeaderKind::Pep)
            .and_then(|t| t.trim().parse::<u32>().ok());

        let mut authors = Vec::new();
        if let Some(body) = fields.body(HeaderKind::Author) {
            let (_, citations) = parse_citations(&body.unfolded());
            for citation in &citations {
                let author = lookup.resolve(citation).ok_or_else(|| PepError::UnknownAuthor {
                    document: document.to_string(),
                    number,
                    name: citation.name.trim().to_string(),
                })?;
                authors.push(author);
            }
        }

        let refs = |kind: HeaderKind| {
            fields
                .text(kind)
                .map(|t| parse_references(&t))
                .unwrap_or_default()
        };

        Ok(Self {
            number,
            title: fields.text(HeaderKind::Title).filter(|t| !t.is_empty()),
            pep_type: fields.pep_type(),
            status: fields
                .text(HeaderKind::Status)
                .and_then(|s| PepStatus::parse(&s)),
            authors,
            topics: fields
                .text(HeaderKind::Topic)
                .map(|t| parse_topics(&t))
                .unwrap_or_default(),
            requires: refs(HeaderKind::Requires),
            replaces: refs(HeaderKind::Replaces),
            superseded_by: refs(HeaderKind::SupersededBy),
        })
    }
}
