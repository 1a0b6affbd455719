use std::path::Path;

use crate::error::Error;

/// Directory names pruned during traversal when the config does not override
/// them. `db` is the generated documentation-output directory.
const DEFAULT_EXCLUDE: [&str; 3] = [".git", "node_modules", "db"];

/// Project configuration loaded from `.doctidy.toml`.
/// The exclude list holds directory names, matched exactly against every
/// directory met during traversal; matched subtrees are never descended into.
pub struct Config {
    exclude: Vec<String>,
}

/// Raw TOML structure for `.doctidy.toml`.
#[derive(serde::Deserialize)]
struct DoctidyTomlConfig {
    #[serde(default = "default_exclude")]
    exclude: Vec<String>,
}

/// The exclusion set used when no config file overrides it.
fn default_exclude() -> Vec<String> {
    DEFAULT_EXCLUDE.iter().map(|d| (*d).to_string()).collect()
}

impl Config {
    /// Load config from `.doctidy.toml` in the given root directory.
    /// Returns the default exclusion set if the file doesn't exist.
    /// Returns an error if the file exists but is malformed rather than
    /// silently falling back to defaults when the user wrote a config file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails (other than not-found),
    /// or `Error::TomlDe` if the TOML is malformed.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = root.join(".doctidy.toml");
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self { exclude: default_exclude() });
            },
            Err(e) => return Err(Error::Io(e)),
        };

        let raw: DoctidyTomlConfig = toml::from_str(&content)?;
        Ok(Self { exclude: raw.exclude })
    }

    /// Check whether a directory name is pruned from traversal.
    ///
    /// Matches names exactly, never path substrings, so an excluded `db`
    /// prunes `docs/db` but not `docs/dbase`.
    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.exclude.iter().any(|d| d == dir_name)
    }
}
