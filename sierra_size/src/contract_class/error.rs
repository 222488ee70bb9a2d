//!
//! The contract class reading error.
//!

use std::path::PathBuf;

///
/// The contract class reading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The contract class file does not exist.
    #[error("File '{}' not found", path.display())]
    NotFound {
        /// The path to the contract class file.
        path: PathBuf,
    },
    /// Any other error reading the contract class file.
    #[error("Reading file '{}': {error}", path.display())]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the contract class file.
        path: PathBuf,
    },
    /// The contract class file is not valid JSON.
    #[error("File '{}' is not valid JSON: {error}", path.display())]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the contract class file.
        path: PathBuf,
    },
    /// The contract class has no Sierra program.
    #[error("No '{}' found in JSON file '{}'", crate::SIERRA_PROGRAM_FIELD, path.display())]
    MissingField {
        /// The path to the contract class file.
        path: PathBuf,
    },
    /// The Sierra program is not an array of strings.
    #[error("Invalid '{}' in JSON file '{}': {error}", crate::SIERRA_PROGRAM_FIELD, path.display())]
    InvalidProgram {
        /// The underlying JSON decoding error.
        error: serde_json::Error,
        /// The path to the contract class file.
        path: PathBuf,
    },
}

impl Error {
    ///
    /// Whether the error is not one of the anticipated input problems, that is a missing file,
    /// malformed JSON, or a missing Sierra program.
    ///
    pub fn is_unexpected(&self) -> bool {
        matches!(self, Self::Reading { .. } | Self::InvalidProgram { .. })
    }
}
