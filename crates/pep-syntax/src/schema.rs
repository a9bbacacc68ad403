//! The closed header schema and the checks run against it.

use crate::diagnostic::Diagnostics;
use crate::tokenizer::HeaderBlock;

/// Every header a PEP may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderKind {
    Pep,
    Title,
    Version,
    LastModified,
    Author,
    Sponsor,
    BdflDelegate,
    DiscussionsTo,
    Status,
    Type,
    Topic,
    ContentType,
    Requires,
    Created,
    PythonVersion,
    PostHistory,
    Replaces,
    SupersededBy,
    Resolution,
}

#[derive(Debug, Clone, Copy)]
pub struct SchemaEntry {
    pub kind: HeaderKind,
    pub name: &'static str,
    pub required: bool,
}

const fn entry(kind: HeaderKind, name: &'static str, required: bool) -> SchemaEntry {
    SchemaEntry {
        kind,
        name,
        required,
    }
}

/// Canonical header order (PEP 12).
pub static SCHEMA: [SchemaEntry; 19] = [
    entry(HeaderKind::Pep, "PEP", true),
    entry(HeaderKind::Title, "Title", true),
    entry(HeaderKind::Version, "Version", false),
    entry(HeaderKind::LastModified, "Last-Modified", false),
    entry(HeaderKind::Author, "Author", true),
    entry(HeaderKind::Sponsor, "Sponsor", false),
    entry(HeaderKind::BdflDelegate, "BDFL-Delegate", false),
    entry(HeaderKind::DiscussionsTo, "Discussions-To", false),
    entry(HeaderKind::Status, "Status", true),
    entry(HeaderKind::Type, "Type", true),
    entry(HeaderKind::Topic, "Topic", false),
    entry(HeaderKind::ContentType, "Content-Type", false),
    entry(HeaderKind::Requires, "Requires", false),
    entry(HeaderKind::Created, "Created", true),
    entry(HeaderKind::PythonVersion, "Python-Version", false),
    entry(HeaderKind::PostHistory, "Post-History", false),
    entry(HeaderKind::Replaces, "Replaces", false),
    entry(HeaderKind::SupersededBy, "Superseded-By", false),
    entry(HeaderKind::Resolution, "Resolution", false),
];

impl HeaderKind {
    pub fn from_name(name: &str) -> Option<Self> {
        SCHEMA.iter().find(|e| e.name == name).map(|e| e.kind)
    }

    pub fn name(self) -> &'static str {
        SCHEMA[self.position()].name
    }

    /// Index in the canonical order.
    pub fn position(self) -> usize {
        SCHEMA
            .iter()
            .position(|e| e.kind == self)
            .unwrap_or(SCHEMA.len())
    }
}

/// A record that passed the schema: the first occurrence of a known header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accepted {
    pub kind: HeaderKind,
    /// Index into `HeaderBlock::records`.
    pub index: usize,
}

/// Check a header block against [`SCHEMA`].
///
/// Emits, in this order: duplicate and invalid headers (line order),
/// missing required headers (schema order, line 1), and at most one
/// ordering diagnostic (line 1). Returns the accepted records so field
/// grammars can run regardless of what was reported.
pub fn check_schema(block: &HeaderBlock, diags: &mut Diagnostics) -> Vec<Accepted> {
    let mut accepted: Vec<Accepted> = Vec::new();

    for (index, record) in block.records.iter().enumerate() {
        match HeaderKind::from_name(&record.name) {
            None => diags.push(
                record.line,
                format!("Must not have invalid header: {}", record.name),
            ),
            Some(kind) if accepted.iter().any(|a| a.kind == kind) => diags.push(
                record.line,
                format!("Must not have duplicate header: {} ", record.name),
            ),
            Some(kind) => accepted.push(Accepted { kind, index }),
        }
    }

    for schema_entry in SCHEMA.iter().filter(|e| e.required) {
        if !accepted.iter().any(|a| a.kind == schema_entry.kind) {
            diags.push(
                1,
                format!("Must have required header: {}", schema_entry.name),
            );
        }
    }

    if !in_canonical_order(&accepted) {
        let order: Vec<&str> = SCHEMA
            .iter()
            .filter(|e| accepted.iter().any(|a| a.kind == e.kind))
            .map(|e| e.name)
            .collect();
        diags.push(
            1,
            format!(
                "Headers must be in PEP 12 order. Correct order: {}",
                order.join(", ")
            ),
        );
    }

    tracing::debug!(
        accepted = accepted.len(),
        records = block.records.len(),
        "schema checked"
    );
    accepted
}

/// Walk the schema with a cursor: each accepted header must be found at or
/// after the cursor. Running off the end means something came too late.
fn in_canonical_order(accepted: &[Accepted]) -> bool {
    let mut cursor = 0;
    for header in accepted {
        loop {
            if cursor == SCHEMA.len() {
                return false;
            }
            let expected = SCHEMA[cursor].kind;
            cursor += 1;
            if expected == header.kind {
                break;
            }
        }
    }
    true
}
