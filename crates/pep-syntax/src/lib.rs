//! PEP header parsing and validation.
//!
//! A PEP starts with an RFC-822-style header block. [`lint`] tokenizes that
//! block, checks it against the fixed header schema, runs the grammar of
//! every accepted header and collects every problem as a line-numbered
//! [`Diagnostic`]. [`validate`] does the same and also builds the typed
//! [`Pep`] model, resolving authors in an [`AuthorLookup`].
//!
//! Only a document without a header block, or one citing an author missing
//! from the lookup, fails outright; everything else is a diagnostic.

pub mod authors;
pub mod diagnostic;
pub mod error;
pub mod grammar;
pub mod links;
pub mod model;
pub mod schema;
pub mod tokenizer;

pub use authors::{Author, AuthorLookup};
pub use diagnostic::{Diagnostic, Diagnostics};
pub use error::{PepError, Result};
pub use model::{Pep, PepStatus, PepType};

use chrono::NaiveDate;
use grammar::reference::check_pep_number;
use grammar::{check_field, FieldBody, FieldContext};
use model::Fields;
use schema::check_schema;
use tokenizer::tokenize;

/// Per-run settings shared by every document.
#[derive(Debug, Clone, Copy)]
pub struct LintOptions {
    /// Reference date for the "must not be in the future" rule.
    pub today: NaiveDate,
    /// Check the whole text for direct PEP/RFC links.
    pub check_links: bool,
}

impl LintOptions {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            check_links: true,
        }
    }
}

impl Default for LintOptions {
    fn default() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }
}

/// A validated document: best-effort model plus everything found wrong.
#[derive(Debug, Clone)]
pub struct Validated {
    pub pep: Pep,
    pub diagnostics: Diagnostics,
}

/// Lint one document. `document` names it in fatal errors.
pub fn lint(document: &str, text: &str, options: &LintOptions) -> Result<Diagnostics> {
    let (diagnostics, _) = run(document, text, options, None)?;
    Ok(diagnostics)
}

/// Lint one document and build its [`Pep`] model.
pub fn validate(
    document: &str,
    text: &str,
    lookup: &AuthorLookup,
    options: &LintOptions,
) -> Result<Validated> {
    let (diagnostics, pep) = run(document, text, options, Some(lookup))?;
    Ok(Validated {
        pep: pep.unwrap_or_default(),
        diagnostics,
    })
}

fn run(
    document: &str,
    text: &str,
    options: &LintOptions,
    lookup: Option<&AuthorLookup>,
) -> Result<(Diagnostics, Option<Pep>)> {
    let mut diags = Diagnostics::new();

    let first_line = text.lines().next().unwrap_or("");
    match first_line.strip_prefix("PEP: ") {
        Some(number) => check_pep_number(1, number.trim(), "PEP number", &mut diags),
        None => diags.push(1, "PEP must begin with the 'PEP:' header"),
    }

    let block = tokenize(document, text)?;
    let accepted = check_schema(&block, &mut diags);
    let fields = Fields::new(&block, &accepted);

    let ctx = FieldContext {
        today: options.today,
        pep_type: fields.pep_type(),
    };
    for (position, header) in accepted.iter().enumerate() {
        let body = FieldBody::from_block(&block, &accepted, position);
        check_field(header.kind, &body, &ctx, &mut diags);
    }

    if options.check_links {
        links::check_links(text, &mut diags);
    }

    let pep = match lookup {
        Some(lookup) => Some(Pep::from_fields(document, &fields, lookup)?),
        None => None,
    };

    tracing::debug!(document, diagnostics = diags.len(), "document linted");
    Ok((diags, pep))
}
