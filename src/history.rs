//! Prompt history log: timestamped append-only entries.

use std::io::Write as _;
use std::path::Path;

use chrono::Utc;

use crate::error::Error;

/// Name of the append-only log expected in the repository root.
const HISTORY_FILE: &str = "PROMPT_HISTORY.md";

/// Append one timestamped entry to `PROMPT_HISTORY.md` under `root`.
/// The file must already exist; this never creates it.
///
/// # Errors
///
/// Returns `Error::HistoryNotFound` if the log file is missing,
/// or `Error::Io` if the append fails.
pub fn append(root: &Path, paraphrase: &str, outcome: Option<&str>) -> Result<(), Error> {
    let path = root.join(HISTORY_FILE);
    if !path.is_file() {
        return Err(Error::HistoryNotFound { path });
    }

    let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let entry = format_entry(&timestamp, paraphrase.trim(), outcome.map(str::trim));

    let mut file = std::fs::OpenOptions::new().append(true).open(&path)?;
    writeln!(file, "\n{entry}")?;
    Ok(())
}

/// Render one log bullet. A non-empty outcome is appended to the same line.
fn format_entry(timestamp: &str, paraphrase: &str, outcome: Option<&str>) -> String {
    let mut entry = format!("- [{timestamp}] \"{paraphrase}\"");
    if let Some(outcome) = outcome.filter(|o| !o.is_empty()) {
        entry.push_str(&format!(" — Outcome: {outcome}"));
    }
    entry
}
