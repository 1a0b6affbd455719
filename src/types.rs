/// Core domain types for doctidy scans and reports.
use std::path::PathBuf;

/// One markdown link that failed to resolve to anything on disk.
/// Built by the scanner; carries everything needed to locate and fix
/// the link by hand.
#[derive(Debug, Clone)]
pub struct LinkReference {
    /// Filesystem path the target resolved to, which does not exist.
    pub candidate: PathBuf,
    /// Markdown file containing the link.
    pub source: PathBuf,
    /// Raw link target as written, trimmed.
    pub target: String,
}

/// Aggregate outcome of one normalize pass.
#[derive(Debug, Default)]
pub struct NormalizeReport {
    /// Total emoji characters dropped across all rewritten files.
    pub emoji_removed: usize,
    /// Files that were rewritten, in traversal order.
    pub modified: Vec<PathBuf>,
}

/// Aggregate outcome of one link scan. `missing` keeps discovery order:
/// traversal order first, then in-document appearance order.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Number of internal links resolved against the filesystem.
    pub checked: usize,
    /// Links that failed every resolution fallback.
    pub missing: Vec<LinkReference>,
}
