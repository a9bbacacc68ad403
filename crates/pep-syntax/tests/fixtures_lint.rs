use chrono::NaiveDate;
use pep_syntax::{lint, validate, AuthorLookup, LintOptions, PepError, PepStatus, PepType};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).unwrap()
}

fn options() -> LintOptions {
    LintOptions::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
}

fn lookup() -> AuthorLookup {
    AuthorLookup::from_path(&fixture_path("authors.csv")).unwrap()
}

#[test]
fn pep_9002_reports_everything_in_order() {
    let diags = lint("pep-9002.rst", &fixture("pep-9002.rst"), &options()).unwrap();
    let expected: Vec<(usize, &str)> = vec![
        (1, "PEP must begin with the 'PEP:' header"),
        (8, "Must not have duplicate header: Sponsor "),
        (9, "Must not have invalid header: Horse-Guards"),
        (1, "Must have required header: PEP"),
        (1, "Must have required header: Type"),
        (
            1,
            "Headers must be in PEP 12 order. Correct order: Title, Author, Sponsor, \
             BDFL-Delegate, Discussions-To, Status, Topic, Requires, Created, \
             Python-Version, Post-History, Resolution",
        ),
        (4, "Author continuation lines must end with a comma"),
        (5, "Author line must not be over-indented"),
        (6, "Python-Version major part must be 1, 2, or 3: 4.0"),
        (
            7,
            "Sponsor entries must begin with a valid 'Name': 'Sponsor:\\nHorse-Guards: Parade'",
        ),
        (10, "Created must be a 'DD-mmm-YYYY' date: '1-Jan-1989'"),
        (11, "Delegate entries must begin with a valid 'Name': 'Barry!'"),
        (12, "Status must be a valid PEP status"),
        (13, "Topic must not contain duplicates"),
        (13, "Topic must be properly capitalised (Title Case)"),
        (13, "Topic must be for a valid sub-index"),
        (13, "Topic must be sorted lexicographically"),
        (14, "PEP references must be separated by comma-spaces (', ')"),
        (15, "Discussions-To must be a valid thread URL or mailing list"),
        (16, "Post-History must be a 'DD-mmm-YYYY' date: '2-Feb-2000'"),
        (16, "Post-History must be a valid thread URL"),
        (17, "Post-History must be a 'DD-mmm-YYYY' date: '3-Mar-2001'"),
        (17, "Post-History must be a valid thread URL"),
        (18, "Resolution must be a valid thread URL"),
        (21, "Use the :pep:`NNN` role to refer to PEPs"),
    ];
    let actual = diags.to_pairs();
    let actual: Vec<(usize, &str)> = actual.iter().map(|(l, m)| (*l, m.as_str())).collect();
    assert_eq!(actual, expected);
}

#[test]
fn pep_9002_model_is_best_effort() {
    let validated = validate("pep-9002.rst", &fixture("pep-9002.rst"), &lookup(), &options()).unwrap();
    assert_eq!(validated.diagnostics.len(), 25);

    let pep = validated.pep;
    assert_eq!(pep.number, None);
    assert_eq!(pep.title.as_deref(), Some("Nobody expects the example PEP!"));
    assert_eq!(pep.status, None);
    assert_eq!(pep.pep_type, None);
    assert_eq!(pep.requires, [20, 1, 2, 3, 7, 8]);
    // Only the angled citation is extracted from the mixed Author value
    assert_eq!(pep.authors.len(), 1);
    assert_eq!(pep.authors[0].sort_key, "ximenez");
    assert_eq!(pep.authors[0].email, "cardinal.ximenez@spanish.inquisition");
}

#[test]
fn unknown_author_aborts_the_document() {
    let text = fixture("pep-9001.rst").replace("Jane Doe", "Jane Roe");
    let err = validate("pep-9001.rst", &text, &lookup(), &options()).unwrap_err();
    assert!(matches!(err, PepError::UnknownAuthor { ref name, number: Some(9001), .. } if name == "Jane Roe"));
}

#[test]
fn pep_9001_is_clean() {
    let validated = validate("pep-9001.rst", &fixture("pep-9001.rst"), &lookup(), &options()).unwrap();
    assert!(
        validated.diagnostics.is_empty(),
        "{:?}",
        validated.diagnostics.to_pairs()
    );

    let pep = validated.pep;
    assert_eq!(pep.number, Some(9001));
    assert_eq!(pep.pep_type, Some(PepType::StandardsTrack));
    assert_eq!(pep.status, Some(PepStatus::Draft));
    assert_eq!(pep.topics, ["Governance", "Packaging"]);
    assert_eq!(pep.replaces, [9000]);

    let names: Vec<&str> = pep.authors.iter().map(|a| a.display_name.as_str()).collect();
    assert_eq!(names, ["Jane Doe", "John Smith Jr."]);
    assert_eq!(pep.authors[1].email, "john@example.com");
    assert_eq!(pep.authors[1].surname_first, "Smith, John, Jr.");
    assert_eq!(pep.authors[1].sort_key, "smith");
}
