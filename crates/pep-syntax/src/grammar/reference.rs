//! PEP numbers and cross-references (Requires, Replaces, Superseded-By).

use super::is_digits;
use crate::diagnostic::{py_repr, Diagnostics};

const MAX_PEP_NUMBER: u64 = 9999;

/// Check one PEP number: plain digits, no leading zeros, 0..=9999.
pub fn check_pep_number(line: usize, number: &str, prefix: &str, diags: &mut Diagnostics) {
    if number.is_empty() {
        diags.push(line, format!("{} must not be blank: {}", prefix, py_repr(number)));
        return;
    }
    if number.starts_with('0') && number != "0" {
        diags.push(
            line,
            format!("{} must not contain leading zeros: {}", prefix, py_repr(number)),
        );
    }
    if !is_digits(number) {
        diags.push(line, format!("{} must be numeric: {}", prefix, py_repr(number)));
    } else if number.parse::<u64>().map_or(true, |n| n > MAX_PEP_NUMBER) {
        diags.push(
            line,
            format!(
                "{} must be between 0 and {}: {}",
                prefix,
                MAX_PEP_NUMBER,
                py_repr(number)
            ),
        );
    }
}

/// Check a comma-space separated list of PEP numbers.
pub fn check_references(line: usize, value: &str, diags: &mut Diagnostics) {
    let value = value.strip_suffix(',').unwrap_or(value).trim_end();
    if value.matches(", ").count() != value.matches(',').count() {
        diags.push(line, "PEP references must be separated by comma-spaces (', ')");
        return;
    }
    for reference in value.split(", ") {
        check_pep_number(line, reference, "PEP reference", diags);
    }
}

/// Numbers of a well-formed reference list; malformed entries are skipped.
pub fn parse_references(value: &str) -> Vec<u32> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| is_digits(s))
        .filter_map(|s| s.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(value: &str) -> Vec<(usize, String)> {
        let mut diags = Diagnostics::new();
        check_references(14, value, &mut diags);
        diags.to_pairs()
    }

    #[test]
    fn valid_lists() {
        assert!(refs("1").is_empty());
        assert!(refs("440, 517, 518").is_empty());
        assert!(refs("440, 517,").is_empty());
    }

    #[test]
    fn comma_without_space() {
        assert_eq!(
            refs("0020,1,2,3, 7, 8"),
            [(14, "PEP references must be separated by comma-spaces (', ')".to_string())]
        );
    }

    #[test]
    fn bad_numbers() {
        assert_eq!(
            refs("007, abc, 10000"),
            [
                (14, "PEP reference must not contain leading zeros: '007'".to_string()),
                (14, "PEP reference must be numeric: 'abc'".to_string()),
                (14, "PEP reference must be between 0 and 9999: '10000'".to_string()),
            ]
        );
    }

    #[test]
    fn pep_number_rules() {
        let mut diags = Diagnostics::new();
        check_pep_number(1, "", "PEP number", &mut diags);
        check_pep_number(1, "0", "PEP number", &mut diags);
        check_pep_number(1, "0x1", "PEP number", &mut diags);
        assert_eq!(
            diags.to_pairs(),
            [
                (1, "PEP number must not be blank: ''".to_string()),
                (1, "PEP number must not contain leading zeros: '0x1'".to_string()),
                (1, "PEP number must be numeric: '0x1'".to_string()),
            ]
        );
    }

    #[test]
    fn parse_reference_numbers() {
        assert_eq!(parse_references("440, 517,x, 518"), [440, 517, 518]);
    }
}
