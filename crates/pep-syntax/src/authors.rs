//! Authors lookup table and resolved [`Author`] records.
//!
//! The table maps an author's display name, exactly as cited in PEP headers,
//! to the surname-first and short forms used by index pages. It is loaded
//! once per run from a CSV file with the columns `Full Name`,
//! `Surname First` and `Name Reference`.

use crate::error::{PepError, Result};
use crate::grammar::author::Citation;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::io;
use std::path::Path;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical forms of one author's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorNames {
    /// e.g. `"van Rossum, Guido (GvR)"`
    pub surname_first: String,
    /// e.g. `"GvR"`
    pub short_name: String,
}

#[derive(Debug, Deserialize)]
struct LookupRow {
    #[serde(rename = "Full Name")]
    full_name: String,
    #[serde(rename = "Surname First")]
    surname_first: String,
    #[serde(rename = "Name Reference")]
    name_reference: String,
}

/// Read-only display name → canonical names table.
#[derive(Debug, Clone, Default)]
pub struct AuthorLookup {
    entries: HashMap<String, AuthorNames>,
}

impl AuthorLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        full_name: impl Into<String>,
        surname_first: impl Into<String>,
        short_name: impl Into<String>,
    ) {
        self.entries.insert(
            full_name.into(),
            AuthorNames {
                surname_first: surname_first.into(),
                short_name: short_name.into(),
            },
        );
    }

    /// Load the table from CSV text with a header row.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut csv = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut lookup = Self::new();
        for row in csv.deserialize() {
            let row: LookupRow = row?;
            lookup.insert(row.full_name, row.surname_first, row.name_reference);
        }
        tracing::debug!(authors = lookup.len(), "loaded authors lookup");
        Ok(lookup)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|source| PepError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(io::BufReader::new(file))
    }

    pub fn get(&self, full_name: &str) -> Option<&AuthorNames> {
        self.entries.get(full_name.trim())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a raw citation; `None` when the name is not in the table.
    pub fn resolve(&self, citation: &Citation) -> Option<Author> {
        let names = self.get(&citation.name)?;
        Some(Author::new(
            citation.name.trim(),
            &citation.email,
            names.surname_first.clone(),
            names.short_name.clone(),
        ))
    }
}

/// A PEP author resolved against the lookup table.
///
/// Equality and hashing use `display_name` only.
#[derive(Debug, Clone, Serialize)]
pub struct Author {
    pub display_name: String,
    /// Lower-cased; empty when the citation carried no address.
    pub email: String,
    pub surname_first: String,
    pub short_name: String,
    pub sort_key: String,
}

impl Author {
    pub fn new(display_name: &str, email: &str, surname_first: String, short_name: String) -> Self {
        let sort_key = sort_key(&surname_first);
        Self {
            display_name: display_name.to_string(),
            email: email.to_lowercase(),
            surname_first,
            short_name,
            sort_key,
        }
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.display_name == other.display_name
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.display_name.hash(state);
    }
}

/// Sort key from a surname-first name: the surname from its first
/// capitalised word on (so "van Rossum" sorts under R), lower-cased, with
/// diacritics removed.
pub fn sort_key(surname_first: &str) -> String {
    let surname = surname_first.split(',').next().unwrap_or("");
    let parts: Vec<&str> = surname.split_whitespace().collect();
    let base = match parts
        .iter()
        .position(|p| p.chars().next().is_some_and(char::is_uppercase))
    {
        Some(i) => parts[i..].join(" ").to_lowercase(),
        None => surname.to_lowercase(),
    };
    base.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}
