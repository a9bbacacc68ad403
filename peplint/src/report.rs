//! Per-document lint result handed to the renderers.

use pep_syntax::{Diagnostics, Pep};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report {
    /// Path as given on the command line, or `<stdin>`.
    pub path: String,
    pub diagnostics: Diagnostics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pep: Option<Pep>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
