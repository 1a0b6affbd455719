/// Crate-level error types for doctidy diagnostics.
use std::path::PathBuf;

/// All errors in doctidy carry enough context to produce a useful diagnostic
/// without a debugger. Each variant names the file or failure involved.
#[allow(clippy::error_impl_error, reason = "crate-internal error type in binary")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The prompt history log does not exist in the root.
    #[error("history log not found: {}", path.display())]
    HistoryNotFound {
        /// Path where the log was expected.
        path: PathBuf,
    },

    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// TOML deserialization failed.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),

    /// Directory traversal failed below the root.
    #[error("walk: {0}")]
    Walk(
        /// The wrapped traversal error.
        #[from]
        walkdir::Error,
    ),
}
