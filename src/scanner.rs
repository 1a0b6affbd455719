use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::Error;
use crate::resolver::{self, Classification};
use crate::types::{LinkReference, ScanResult};

/// Scan all markdown files under `root` and resolve every internal link.
/// Unresolved links are accumulated in discovery order; they are recorded,
/// never raised.
///
/// # Errors
///
/// Returns `Error::Walk` if traversal fails, or `Error::Io` if a markdown
/// file cannot be read.
///
/// # Panics
///
/// Panics if the hardcoded link regex is invalid (compile-time invariant).
pub fn scan(root: &Path, config: &Config) -> Result<ScanResult, Error> {
    let pattern = Regex::new(r"\[[^\]]*\]\(([^)]+)\)").expect("valid regex");
    let mut result = ScanResult::default();

    for path in markdown_files(root, config)? {
        let content = std::fs::read_to_string(&path)?;
        scan_document(&path, &content, root, &pattern, &mut result);
    }

    Ok(result)
}

/// Collect every `.md` file under `root` in name-sorted traversal order, so
/// repeated runs over an unchanged tree produce byte-identical reports.
/// Directories whose name is in the config's exclusion set are pruned and
/// never descended into.
///
/// # Errors
///
/// Returns `Error::Walk` if traversal fails.
pub fn markdown_files(root: &Path, config: &Config) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e, config));

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == "md")
        {
            files.push(entry.path().to_path_buf());
        }
    }

    Ok(files)
}

/// True for directories below the root whose name is in the exclusion set.
fn is_excluded_dir(entry: &DirEntry, config: &Config) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry.file_name().to_str().is_some_and(|name| config.is_excluded(name))
}

/// Extract every `[label](target)` occurrence from one document and resolve
/// the internal ones, accumulating into `result` in appearance order.
fn scan_document(
    doc: &Path,
    content: &str,
    root: &Path,
    pattern: &Regex,
    result: &mut ScanResult,
) {
    let source_dir = doc.parent().unwrap_or(Path::new(""));
    for cap in pattern.captures_iter(content) {
        let Some(raw) = cap.get(1) else { continue };
        let target = raw.as_str().trim();

        let Classification::Internal(candidate) = resolver::classify(target, source_dir, root)
        else {
            continue;
        };

        result.checked += 1;
        if !resolver::target_exists(&candidate) {
            result.missing.push(LinkReference {
                candidate,
                source: doc.to_path_buf(),
                target: target.to_string(),
            });
        }
    }
}
