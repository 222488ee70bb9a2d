//!
//! The external query error.
//!

use std::path::PathBuf;

///
/// The external query error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The query executable cannot be resolved.
    #[error("The `{}` executable not found in ${{PATH}}: {error}", executable.display())]
    ExecutableNotFound {
        /// The query executable.
        executable: PathBuf,
        /// The underlying resolution error.
        error: which::Error,
    },
    /// The query subprocess cannot be spawned or awaited.
    #[error("`{}` subprocess error: {error}", executable.display())]
    Spawning {
        /// The query executable.
        executable: PathBuf,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// The query subprocess exited with a non-zero status.
    #[error("Running `{}` failed ({status}): {}", executable.display(), stderr.trim())]
    Failure {
        /// The query executable.
        executable: PathBuf,
        /// The subprocess exit status.
        status: std::process::ExitStatus,
        /// The subprocess standard error output.
        stderr: String,
    },
    /// The query subprocess output is not an integer.
    #[error("Unable to parse `{}` output {output:?} as an integer: {error}", executable.display())]
    OutputParsing {
        /// The query executable.
        executable: PathBuf,
        /// The trimmed subprocess output.
        output: String,
        /// The underlying parsing error.
        error: std::num::ParseIntError,
    },
}

impl Error {
    ///
    /// Whether the error happened before the query executable could run.
    ///
    pub fn is_unexpected(&self) -> bool {
        matches!(
            self,
            Self::ExecutableNotFound { .. } | Self::Spawning { .. }
        )
    }
}
