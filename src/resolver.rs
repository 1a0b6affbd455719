//! Link target classification and filesystem resolution.

use std::path::{Component, Path, PathBuf};

/// URL schemes that mark a link target as external to the repository.
const EXTERNAL_SCHEMES: [&str; 4] = ["http://", "https://", "mailto:", "javascript:"];

/// What a raw link target turned out to be. Only `Internal` targets are
/// resolved against the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Intra-document anchor with no file component.
    Anchor,
    /// External URL, outside the repository.
    External,
    /// Image-link variant.
    Image,
    /// Local target with its normalized resolution candidate.
    Internal(PathBuf),
}

/// Classify a trimmed link target and compute its resolution candidate.
///
/// The rules run in a fixed order and each assumes the earlier ones already
/// filtered their cases; fragment stripping in particular must not run
/// before the external-scheme check.
pub fn classify(target: &str, source_dir: &Path, root: &Path) -> Classification {
    if EXTERNAL_SCHEMES.iter().any(|scheme| target.starts_with(scheme)) {
        return Classification::External;
    }
    if target.starts_with('!') {
        return Classification::Image;
    }

    // Everything after the first `#` is an in-document fragment.
    let path = target.split('#').next().unwrap_or("");
    if path.is_empty() || target.starts_with('#') {
        return Classification::Anchor;
    }

    let candidate = if let Some(rooted) = path.strip_prefix('/') {
        root.join(rooted.trim_start_matches('/'))
    } else {
        source_dir.join(path)
    };
    Classification::Internal(normalize_path(&candidate))
}

/// Collapse `.` and `..` components in a path without touching the filesystem.
/// Preserves leading `..` when there is nothing left to pop.
fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => {
                if matches!(parts.last(), Some(Component::Normal(_))) {
                    parts.pop();
                } else {
                    parts.push(component);
                }
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}

/// Check whether a resolution candidate exists on disk.
///
/// Three fallbacks, in order: the candidate is a regular file, the candidate
/// with a literal `.md` suffix appended is a regular file, or the candidate
/// is a directory containing a `README.md`.
pub fn target_exists(candidate: &Path) -> bool {
    if candidate.is_file() {
        return true;
    }
    if with_md_suffix(candidate).is_file() {
        return true;
    }
    candidate.is_dir() && candidate.join("README.md").is_file()
}

/// Append `.md` to the full path. `Path::with_extension` would replace an
/// existing extension instead of appending to it.
fn with_md_suffix(path: &Path) -> PathBuf {
    let mut appended = path.as_os_str().to_os_string();
    appended.push(".md");
    PathBuf::from(appended)
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn external_schemes_win_over_fragment_stripping() {
        let docs = Path::new("docs");
        let root = Path::new(".");
        assert_eq!(
            classify("https://example.com/page#section", docs, root),
            Classification::External
        );
        assert_eq!(classify("http://example.com", docs, root), Classification::External);
        assert_eq!(classify("mailto:team@example.com", docs, root), Classification::External);
        assert_eq!(classify("javascript:void(0)", docs, root), Classification::External);
    }

    #[test]
    fn image_variant_is_skipped() {
        assert_eq!(
            classify("!logo.png", Path::new("docs"), Path::new(".")),
            Classification::Image
        );
    }

    #[test]
    fn bare_fragment_is_an_anchor() {
        assert_eq!(
            classify("#usage", Path::new("docs"), Path::new(".")),
            Classification::Anchor
        );
    }

    #[test]
    fn fragment_is_stripped_from_internal_targets() {
        assert_eq!(
            classify("guide.md#setup", Path::new("docs"), Path::new(".")),
            Classification::Internal(PathBuf::from("docs/guide.md"))
        );
    }

    #[test]
    fn relative_targets_resolve_against_the_source_directory() {
        assert_eq!(
            classify("../install", Path::new("docs/howto"), Path::new(".")),
            Classification::Internal(PathBuf::from("docs/install"))
        );
    }

    #[test]
    fn rooted_targets_resolve_against_the_scan_root() {
        assert_eq!(
            classify("/guide", Path::new("docs/howto"), Path::new(".")),
            Classification::Internal(PathBuf::from("guide"))
        );
    }

    #[test]
    fn parent_components_collapse_lexically() {
        assert_eq!(normalize_path(Path::new("./a/b/../c")), PathBuf::from("a/c"));
    }

    #[test]
    fn leading_parent_components_survive() {
        assert_eq!(normalize_path(Path::new("../x")), PathBuf::from("../x"));
        assert_eq!(normalize_path(Path::new("a/../../x")), PathBuf::from("../x"));
    }

    #[test]
    fn md_suffix_appends_rather_than_replaces() {
        assert_eq!(with_md_suffix(Path::new("guide.v2")), PathBuf::from("guide.v2.md"));
    }

    #[test]
    fn existence_fallbacks_cover_file_md_and_readme_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("plain.txt"), "x").unwrap();
        std::fs::write(dir.path().join("guide.md"), "x").unwrap();
        std::fs::create_dir(dir.path().join("section")).unwrap();
        std::fs::write(dir.path().join("section").join("README.md"), "x").unwrap();
        std::fs::create_dir(dir.path().join("empty")).unwrap();

        assert!(target_exists(&dir.path().join("plain.txt")));
        assert!(target_exists(&dir.path().join("guide")));
        assert!(target_exists(&dir.path().join("section")));
        assert!(!target_exists(&dir.path().join("empty")));
        assert!(!target_exists(&dir.path().join("missing")));
    }
}
