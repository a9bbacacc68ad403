//! Body link checks: direct links to PEP and RFC pages should use roles.

use crate::diagnostic::Diagnostics;

const PEP_LINKS: [&str; 2] = ["dev/peps/pep-", "peps.python.org/pep-"];
const RFC_LINKS: [&str; 2] = ["rfc-editor.org/rfc/", "ietf.org/doc/html/rfc"];

/// Check every line of the document, header block included.
pub fn check_links(text: &str, diags: &mut Diagnostics) {
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let lower = line.trim_start().to_lowercase();
        if PEP_LINKS.iter().any(|l| lower.contains(l)) {
            diags.push(line_no, "Use the :pep:`NNN` role to refer to PEPs");
        }
        if RFC_LINKS.iter().any(|l| lower.contains(l)) {
            diags.push(line_no, "Use the :rfc:`NNN` role to refer to RFCs");
        }
    }
}
