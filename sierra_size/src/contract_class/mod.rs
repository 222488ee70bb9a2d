//!
//! The Starknet contract class artifact.
//!

pub mod error;

use std::path::Path;

use crate::program::Program;

use self::error::Error as ContractClassError;

///
/// The Starknet contract class artifact, as emitted by the Cairo compiler.
///
/// Only the Sierra program is decoded, the rest of the document is ignored.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractClass {
    /// The Sierra program.
    pub sierra_program: Program,
}

impl ContractClass {
    ///
    /// Decodes the contract class from JSON `text`.
    ///
    /// The `path` is only used for error reporting.
    ///
    pub fn from_json_str(text: &str, path: &Path) -> Result<Self, ContractClassError> {
        let mut document: serde_json::Value =
            serde_json::from_str(text).map_err(|error| ContractClassError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;

        let sierra_program = document
            .as_object_mut()
            .and_then(|object| object.remove(crate::SIERRA_PROGRAM_FIELD))
            .ok_or_else(|| ContractClassError::MissingField {
                path: path.to_path_buf(),
            })?;
        let sierra_program: Program = serde_json::from_value(sierra_program).map_err(|error| {
            ContractClassError::InvalidProgram {
                error,
                path: path.to_path_buf(),
            }
        })?;

        Ok(Self { sierra_program })
    }
}

impl TryFrom<&Path> for ContractClass {
    type Error = ContractClassError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| match error.kind() {
            std::io::ErrorKind::NotFound => ContractClassError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ContractClassError::Reading {
                error,
                path: path.to_path_buf(),
            },
        })?;
        Self::from_json_str(text.as_str(), path)
    }
}
