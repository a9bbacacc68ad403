//! peplint: check PEP header blocks and report every problem found.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `peplint < pep-0008.rst`
//! - **file mode**: `peplint peps/` or `peplint 'peps/pep-0*.rst' -f json`
//!
//! Exits with status 1 when any document has diagnostics or could not be
//! processed at all.

mod render;
mod report;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use pep_syntax::grammar::date::parse_date;
use pep_syntax::{AuthorLookup, LintOptions};
use report::Report;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "PEPLINT_LOG";

#[derive(Parser)]
#[command(
    name = "peplint",
    about = "Check PEP header blocks and extract their metadata"
)]
struct Cli {
    /// Input files, directories or glob patterns. If omitted, reads from stdin.
    files: Vec<String>,

    /// Authors lookup CSV (Full Name, Surname First, Name Reference).
    /// Every cited author must be listed.
    #[arg(short = 'a', long)]
    authors: Option<PathBuf>,

    /// Output format: text (default), json
    #[arg(short = 'f', long, default_value = "text")]
    format: String,

    /// Include the parsed document model in the output
    #[arg(long, requires = "authors")]
    metadata: bool,

    /// Skip the checks for direct PEP and RFC links in the body
    #[arg(long)]
    no_links: bool,

    /// Reference date (DD-mmm-YYYY) for the "not in the future" rule.
    /// Defaults to today.
    #[arg(long, value_parser = parse_today)]
    today: Option<NaiveDate>,
}

fn parse_today(value: &str) -> std::result::Result<NaiveDate, String> {
    parse_date(value).ok_or_else(|| format!("expected a DD-mmm-YYYY date, got {:?}", value))
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let renderer = render::create_renderer(&cli.format)?;

    let mut options = LintOptions::default();
    if let Some(today) = cli.today {
        options.today = today;
    }
    options.check_links = !cli.no_links;

    let lookup = match cli.authors {
        Some(ref path) => Some(
            AuthorLookup::from_path(path)
                .with_context(|| format!("failed to load authors lookup: {}", path.display()))?,
        ),
        None => None,
    };

    let linter = Linter {
        options,
        lookup: lookup.as_ref(),
        metadata: cli.metadata,
    };

    let documents = if cli.files.is_empty() {
        vec![stdin_document()?]
    } else {
        file_documents(&cli.files)?
    };

    let mut stdout = io::stdout().lock();
    let mut failed = false;
    for (path, text) in documents {
        let Some(text) = text else {
            failed = true;
            continue;
        };
        match linter.check(&path, &text) {
            Ok(report) => {
                failed |= !report.is_clean();
                stdout
                    .write_all(renderer.render(&report).as_bytes())
                    .context("failed to write report")?;
            }
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path, e);
                failed = true;
            }
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

struct Linter<'a> {
    options: LintOptions,
    lookup: Option<&'a AuthorLookup>,
    metadata: bool,
}

impl Linter<'_> {
    /// Lint one document; with a lookup, also build (and check) its model.
    fn check(&self, path: &str, text: &str) -> pep_syntax::Result<Report> {
        match self.lookup {
            Some(lookup) => {
                let validated = pep_syntax::validate(path, text, lookup, &self.options)?;
                Ok(Report {
                    path: path.to_string(),
                    diagnostics: validated.diagnostics,
                    pep: self.metadata.then_some(validated.pep),
                })
            }
            None => Ok(Report {
                path: path.to_string(),
                diagnostics: pep_syntax::lint(path, text, &self.options)?,
                pep: None,
            }),
        }
    }
}

/// stdin mode: a single document named `<stdin>`.
fn stdin_document() -> Result<(String, Option<String>)> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    Ok(("<stdin>".to_string(), Some(input)))
}

/// file mode: every matched file, `None` for those that could not be read.
fn file_documents(patterns: &[String]) -> Result<Vec<(String, Option<String>)>> {
    let files = expand_globs(patterns)?;
    tracing::debug!(files = files.len(), "expanded inputs");
    Ok(files
        .into_iter()
        .map(|path| {
            let text = match fs::read_to_string(&path) {
                Ok(text) => Some(text),
                Err(e) => {
                    eprintln!("warning: skipping {}: {}", path.display(), e);
                    None
                }
            };
            (path.display().to_string(), text)
        })
        .collect())
}

/// File extensions of PEP sources.
const SUPPORTED_EXTENSIONS: &[&str] = &["rst", "txt"];

/// Whether a directory entry looks like a PEP source (`pep-NNNN.rst`).
fn is_pep_file(path: &Path) -> bool {
    let stem_ok = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with("pep-"));
    let ext_ok = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| SUPPORTED_EXTENSIONS.contains(&e));
    stem_ok && ext_ok
}

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for PEP sources.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // If it's a directory, scan for PEP sources (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && is_pep_file(&p) {
                    files.push(p);
                }
            }
            continue;
        }
        // Try as glob
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pep_file_names() {
        assert!(is_pep_file(Path::new("peps/pep-0008.rst")));
        assert!(is_pep_file(Path::new("pep-0001.txt")));
        assert!(!is_pep_file(Path::new("peps/conf.py")));
        assert!(!is_pep_file(Path::new("peps/README.rst")));
        assert!(!is_pep_file(Path::new("pep-0008.md")));
    }

    #[test]
    fn today_flag_format() {
        assert_eq!(
            parse_today("01-Jan-2020"),
            Ok(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
        );
        assert!(parse_today("2020-01-01").is_err());
    }
}
