//!
//! The size report.
//!

use std::path::Path;
use std::path::PathBuf;

use colored::Colorize;
use num_format::ToFormattedString;

use crate::contract_class::ContractClass;
use crate::program::strip_mode::StripMode;
use crate::query::ProgramLengthQuery;

///
/// The size report of a single contract class.
///
/// Both measurements are always attempted. A failure of either is printed and does not affect
/// the other one.
///
pub struct Report<Q>
where
    Q: ProgramLengthQuery,
{
    /// The contract class file path.
    pub path: PathBuf,
    /// The felt stripping mode.
    pub strip_mode: StripMode,
    /// The external felt count query.
    pub query: Q,
}

///
/// The measurements that succeeded.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// The Sierra program size in bytes.
    pub size: Option<usize>,
    /// The Sierra program felt count reported by the external query.
    pub length: Option<usize>,
}

impl<Q> Report<Q>
where
    Q: ProgramLengthQuery,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(path: PathBuf, strip_mode: StripMode, query: Q) -> Self {
        Self {
            path,
            strip_mode,
            query,
        }
    }

    ///
    /// Runs both measurements and prints their results.
    ///
    pub fn run(&self) -> Summary {
        let size = sierra_size(self.path.as_path(), self.strip_mode);
        if let Some(size) = size {
            println!(
                "{} {}",
                "Sierra program bytecode size:".bright_green().bold(),
                format_bytes(size),
            );
        }

        let length = program_length(&self.query, self.path.as_path());
        if let Some(length) = length {
            println!("{} {length}", "Bytecode length:".bright_green().bold());
        }

        Summary { size, length }
    }
}

///
/// Computes the Sierra program size in bytes of the contract class at `path`.
///
/// Errors are printed and result in `None`.
///
pub fn sierra_size(path: &Path, strip_mode: StripMode) -> Option<usize> {
    match ContractClass::try_from(path) {
        Ok(contract_class) => {
            println!(
                "Sierra program length: {}",
                contract_class.sierra_program.len()
            );
            Some(contract_class.sierra_program.byte_size(strip_mode))
        }
        Err(error) => {
            print_error(&error, error.is_unexpected());
            None
        }
    }
}

///
/// Counts the Sierra program felts of the contract class at `path` with `query`.
///
/// Errors are printed and result in `None`.
///
pub fn program_length<Q>(query: &Q, path: &Path) -> Option<usize>
where
    Q: ProgramLengthQuery,
{
    query
        .program_length(path)
        .map_err(|error| print_error(&error, error.is_unexpected()))
        .ok()
}

///
/// Formats the size in bytes with digits grouped by thousands.
///
fn format_bytes(size: usize) -> String {
    format!("{} bytes", size.to_formatted_string(crate::LOCALE))
}

///
/// Returns the label an error is printed with.
///
fn error_label(is_unexpected: bool) -> &'static str {
    if is_unexpected {
        "Unexpected error"
    } else {
        "Error"
    }
}

///
/// Prints the error to the standard output.
///
fn print_error(error: &dyn std::fmt::Display, is_unexpected: bool) {
    let label = error_label(is_unexpected);
    println!("{}: {error}", label.bright_red().bold());
}
