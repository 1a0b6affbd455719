//! Markdown normalization: emoji removal and trailing-whitespace cleanup,
//! with a backup-before-write step for every rewritten file.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Error;
use crate::scanner;
use crate::types::NormalizeReport;

/// Unicode ranges treated as emoji. Every character in these blocks is
/// dropped from normalized documents.
const EMOJI_RANGES: [(u32, u32); 7] = [
    (0x1F300, 0x1F5FF),
    (0x1F600, 0x1F64F),
    (0x1F680, 0x1F6FF),
    (0x2600, 0x26FF),
    (0x1F900, 0x1F9FF),
    (0x1F1E6, 0x1F1FF),
    (0x2700, 0x27BF),
];

/// Rewrite every markdown file under `root`, dropping emoji and trimming
/// trailing whitespace from each line. A file that changes is first copied
/// to `<path>.bak`, then overwritten; unchanged files are never touched.
///
/// # Errors
///
/// Returns `Error::Walk` if traversal fails, or `Error::Io` if a file
/// cannot be read or written.
pub fn normalize_tree(root: &Path, config: &Config) -> Result<NormalizeReport, Error> {
    let mut report = NormalizeReport::default();

    for path in scanner::markdown_files(root, config)? {
        let original = std::fs::read_to_string(&path)?;
        let (rewritten, removed) = rewrite_content(&original);
        report.emoji_removed += removed;

        if rewritten == original {
            continue;
        }
        std::fs::write(backup_path(&path), &original)?;
        std::fs::write(&path, rewritten)?;
        report.modified.push(path);
    }

    Ok(report)
}

/// `<path>.bak`, appended to the full name so `guide.md` backs up to
/// `guide.md.bak`.
fn backup_path(path: &Path) -> PathBuf {
    let mut appended = path.as_os_str().to_os_string();
    appended.push(".bak");
    PathBuf::from(appended)
}

/// True when the character falls in one of the emoji blocks.
fn is_emoji(ch: char) -> bool {
    let code = u32::from(ch);
    EMOJI_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&code))
}

/// Drop emoji and trim trailing whitespace from every line. Preserves the
/// final newline when the original had one. Returns the rewritten text and
/// the number of emoji characters dropped.
fn rewrite_content(text: &str) -> (String, usize) {
    let mut kept = String::with_capacity(text.len());
    let mut removed = 0;
    for ch in text.chars() {
        if is_emoji(ch) {
            removed += 1;
        } else {
            kept.push(ch);
        }
    }

    let mut out = kept
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");
    if text.ends_with('\n') && !out.ends_with('\n') {
        out.push('\n');
    }
    (out, removed)
}
