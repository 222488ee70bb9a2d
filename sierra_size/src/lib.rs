//!
//! The Sierra program size reporter library.
//!

pub mod contract_class;
pub mod program;
pub mod query;
pub mod report;

pub use crate::contract_class::error::Error as ContractClassError;
pub use crate::contract_class::ContractClass;
pub use crate::program::byte_size;
pub use crate::program::strip_mode::StripMode;
pub use crate::program::Program;
pub use crate::query::error::Error as QueryError;
pub use crate::query::Jq;
pub use crate::query::ProgramLengthQuery;
pub use crate::report::Report;
pub use crate::report::Summary;

/// The contract class field holding the Sierra program.
pub const SIERRA_PROGRAM_FIELD: &str = "sierra_program";

/// The hex prefix of felts.
pub const HEX_PREFIX: &str = "0x";

/// The contract class path used if no path is provided.
pub const DEFAULT_CONTRACT_CLASS_PATH: &str = "target/dev/contract.contract_class.json";

/// The locale used to group digits of printed sizes.
pub const LOCALE: &num_format::Locale = &num_format::Locale::en;
