//! Core CLI commands for doctidy: check, log, normalize.

use std::path::PathBuf;
use std::process::ExitCode;

use crate::config;
use crate::error;
use crate::history;
use crate::normalize;
use crate::scanner;

/// Scan the tree for internal markdown links that resolve to nothing.
/// Prints the scan report and maps the outcome to an exit status:
/// 0 when every link resolved, 2 when at least one did not.
///
/// # Errors
///
/// Returns errors from config loading, traversal, or file reading.
pub fn check() -> Result<ExitCode, error::Error> {
    let root = PathBuf::from(".");
    let config = config::Config::load(&root)?;
    let result = scanner::scan(&root, &config)?;

    if result.missing.is_empty() {
        println!(
            "Checked {} links: no missing internal markdown links found.",
            result.checked
        );
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "Checked {} links: {} missing internal links:",
        result.checked,
        result.missing.len()
    );
    println!();
    for link in &result.missing {
        println!(
            "In {}: -> {}  (resolved: {})",
            link.source.display(),
            link.target,
            link.candidate.display()
        );
    }
    return Ok(ExitCode::from(2));
}

/// Append a timestamped entry to the prompt history log.
///
/// # Errors
///
/// Returns `Error::HistoryNotFound` if the log is missing, or I/O errors
/// from the append.
pub fn log(paraphrase: &str, outcome: Option<&str>) -> Result<(), error::Error> {
    let root = PathBuf::from(".");
    history::append(&root, paraphrase, outcome)?;
    println!("Appended prompt to PROMPT_HISTORY.md");
    return Ok(());
}

/// Strip emoji and trailing whitespace from every markdown file, backing up
/// changed files first, then print what was rewritten.
///
/// # Errors
///
/// Returns errors from config loading, traversal, or file I/O.
pub fn normalize() -> Result<(), error::Error> {
    let root = PathBuf::from(".");
    let config = config::Config::load(&root)?;
    let report = normalize::normalize_tree(&root, &config)?;

    println!(
        "Processed {} files, removed {} emoji characters.",
        report.modified.len(),
        report.emoji_removed
    );
    if !report.modified.is_empty() {
        println!("Modified files (first 200):");
        for path in report.modified.iter().take(200) {
            println!("{}", path.display());
        }
    }
    return Ok(());
}
