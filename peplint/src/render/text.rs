//! Text renderer: one `path:line: message` line per diagnostic.
//!
//! When the document model is present a summary line for it comes first.

use crate::render::Renderer;
use crate::report::Report;
use pep_syntax::Pep;

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, report: &Report) -> String {
        let mut out = String::new();
        if let Some(ref pep) = report.pep {
            out.push_str(&format!("{}: {}\n", report.path, summary(pep)));
        }
        for diag in &report.diagnostics {
            out.push_str(&format!("{}:{}: {}\n", report.path, diag.line, diag.message));
        }
        out
    }
}

/// `PEP 8: Title [Process, Active] by GvR, Warsaw`
fn summary(pep: &Pep) -> String {
    let number = pep
        .number
        .map_or_else(|| "PEP ?".to_string(), |n| format!("PEP {}", n));
    let title = pep.title.as_deref().unwrap_or("(untitled)");
    let pep_type = pep.pep_type.map_or("?", |t| t.as_str());
    let status = pep.status.map_or("?", |s| s.as_str());
    let authors: Vec<&str> = pep.authors.iter().map(|a| a.short_name.as_str()).collect();

    let mut line = format!("{}: {} [{}, {}]", number, title, pep_type, status);
    if !authors.is_empty() {
        line.push_str(" by ");
        line.push_str(&authors.join(", "));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use pep_syntax::{Author, Diagnostics, PepStatus, PepType};

    #[test]
    fn one_line_per_diagnostic() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(1, "Must have required header: PEP");
        diagnostics.push(12, "Status must be a valid PEP status");
        let report = Report {
            path: "peps/pep-9002.rst".into(),
            diagnostics,
            pep: None,
        };
        assert_eq!(
            TextRenderer.render(&report),
            "peps/pep-9002.rst:1: Must have required header: PEP\n\
             peps/pep-9002.rst:12: Status must be a valid PEP status\n"
        );
    }

    #[test]
    fn clean_report_renders_nothing() {
        let report = Report {
            path: "pep-0008.rst".into(),
            diagnostics: Diagnostics::new(),
            pep: None,
        };
        assert_eq!(TextRenderer.render(&report), "");
    }

    #[test]
    fn summary_line() {
        let pep = Pep {
            number: Some(8),
            title: Some("Style Guide for Python Code".into()),
            pep_type: Some(PepType::Process),
            status: Some(PepStatus::Active),
            authors: vec![Author::new(
                "Guido van Rossum",
                "guido@python.org",
                "van Rossum, Guido (GvR)".into(),
                "GvR".into(),
            )],
            ..Pep::default()
        };
        assert_eq!(
            summary(&pep),
            "PEP 8: Style Guide for Python Code [Process, Active] by GvR"
        );
        assert_eq!(summary(&Pep::default()), "PEP ?: (untitled) [?, ?]");
    }
}
