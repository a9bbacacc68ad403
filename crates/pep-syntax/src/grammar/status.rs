//! Status and Type: closed enumerations plus the cross-field rules.

use crate::diagnostic::Diagnostics;
use crate::model::{PepStatus, PepType};

pub fn check_status(line: usize, value: &str, pep_type: Option<PepType>, diags: &mut Diagnostics) {
    let Some(status) = PepStatus::parse(value) else {
        diags.push(line, "Status must be a valid PEP status");
        return;
    };
    match (status, pep_type) {
        (PepStatus::Active, Some(PepType::StandardsTrack)) => diags.push(
            line,
            "Only Process and Informational PEPs may have an Active status",
        ),
        (PepStatus::Provisional, Some(t)) if t != PepType::StandardsTrack => diags.push(
            line,
            "Only Standards Track PEPs may have a Provisional status",
        ),
        _ => {}
    }
}

pub fn check_type(line: usize, value: &str, diags: &mut Diagnostics) {
    if PepType::parse(value).is_none() {
        diags.push(line, "Type must be a valid PEP type");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(value: &str, pep_type: Option<PepType>) -> Vec<String> {
        let mut diags = Diagnostics::new();
        check_status(12, value, pep_type, &mut diags);
        diags.into_iter().map(|d| d.message).collect()
    }

    #[test]
    fn every_status_value_is_accepted() {
        for value in [
            "Accepted", "Active", "Deferred", "Draft", "Final", "Provisional", "Rejected",
            "Superseded", "Withdrawn",
        ] {
            assert!(status(value, None).is_empty(), "{value}");
        }
    }

    #[test]
    fn april_fool_is_not_an_error() {
        assert!(status("April Fool!", Some(PepType::Process)).is_empty());
    }

    #[test]
    fn unknown_status() {
        assert_eq!(status("Draught", None), ["Status must be a valid PEP status"]);
        assert_eq!(status("draft", None), ["Status must be a valid PEP status"]);
    }

    #[test]
    fn active_needs_process_or_informational() {
        assert_eq!(
            status("Active", Some(PepType::StandardsTrack)),
            ["Only Process and Informational PEPs may have an Active status"]
        );
        assert!(status("Active", Some(PepType::Process)).is_empty());
        assert!(status("Active", Some(PepType::Informational)).is_empty());
    }

    #[test]
    fn provisional_needs_standards_track() {
        assert_eq!(
            status("Provisional", Some(PepType::Process)),
            ["Only Standards Track PEPs may have a Provisional status"]
        );
        assert!(status("Provisional", Some(PepType::StandardsTrack)).is_empty());
    }

    #[test]
    fn type_values() {
        let mut diags = Diagnostics::new();
        check_type(9, "Standards Track", &mut diags);
        check_type(9, "Informational", &mut diags);
        check_type(9, "Process", &mut diags);
        assert!(diags.is_empty());
        check_type(9, "Humour", &mut diags);
        assert_eq!(diags.to_pairs(), [(9, "Type must be a valid PEP type".to_string())]);
    }
}
