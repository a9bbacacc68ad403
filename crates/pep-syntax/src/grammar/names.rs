//! `Name <email@example.com>` entries: Author, Sponsor and delegate fields.

use crate::diagnostic::{py_repr, Diagnostics};
use regex::Regex;
use std::sync::LazyLock;

static RE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[^\W\d_]|[ ',\-.])+(?: \(.+\))?$").unwrap());

static RE_EMAIL_LOCAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w!#$%&'*+\-/=?\^\{\|\}~.]+$").unwrap());

/// Check a single `Name` or `Name <email>` entry.
pub fn check_name_email(line: usize, entry: &str, prefix: &str, diags: &mut Diagnostics) {
    let entry = entry.trim();

    for c in ['<', '>', '@'] {
        if entry.matches(c).count() > 1 {
            diags.push(
                line,
                format!(
                    "{} entries must not contain multiple '{}': {}",
                    prefix,
                    c,
                    py_repr(entry)
                ),
            );
        }
    }

    let name = entry.split('<').next().unwrap_or("").trim_end();
    if !RE_NAME.is_match(name) {
        diags.push(
            line,
            format!(
                "{} entries must begin with a valid 'Name': {}",
                prefix,
                py_repr(entry)
            ),
        );
        return;
    }

    let email = &entry[name.len()..];
    if email.is_empty() {
        return;
    }

    if !email.starts_with(" <") || !email.ends_with('>') {
        diags.push(
            line,
            format!(
                "{} entries must be formatted as 'Name <email@example.com>': {}",
                prefix,
                py_repr(entry)
            ),
        );
    }
    let email = email.strip_prefix(" <").unwrap_or(email);
    let email = email.strip_suffix('>').unwrap_or(email);

    let invalid = match email.rsplit_once('@').or_else(|| email.rsplit_once(" at ")) {
        Some((local, domain)) => !RE_EMAIL_LOCAL.is_match(local) || invalid_domain(domain),
        None => true,
    };
    if invalid {
        diags.push(
            line,
            format!(
                "{} entries must contain a valid email address: {}",
                prefix,
                py_repr(entry)
            ),
        );
    }
}

fn invalid_domain(domain: &str) -> bool {
    let mut labels: Vec<&str> = domain.split('.').collect();
    let root = labels.pop().unwrap_or("");
    if labels
        .iter()
        .any(|label| !super::is_alnum(&label.replace('-', "")))
    {
        return true;
    }
    !super::is_alnum(root) || !root.is_ascii()
}

pub fn check_sponsor(line: usize, value: &str, diags: &mut Diagnostics) {
    check_name_email(line, value, "Sponsor", diags);
}

/// BDFL-Delegate: optional; a `, `-separated list is allowed.
pub fn check_delegate(line: usize, value: &str, diags: &mut Diagnostics) {
    if value.is_empty() {
        return;
    }
    if value.contains(", ") {
        for part in value.strip_suffix(',').unwrap_or(value).split(", ") {
            check_name_email(line, part, "Delegate", diags);
        }
        return;
    }
    check_name_email(line, value, "Delegate", diags);
}
