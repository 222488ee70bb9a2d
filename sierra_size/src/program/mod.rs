//!
//! The Sierra program.
//!

pub mod strip_mode;

use self::strip_mode::StripMode;

///
/// The Sierra program, that is the sequence of hex-encoded felts of a contract class.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(transparent)]
pub struct Program {
    /// The hex-encoded felts.
    pub felts: Vec<String>,
}

impl Program {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(felts: Vec<String>) -> Self {
        Self { felts }
    }

    ///
    /// Returns the number of felts in the program.
    ///
    pub fn len(&self) -> usize {
        self.felts.len()
    }

    ///
    /// Whether the program has no felts.
    ///
    pub fn is_empty(&self) -> bool {
        self.felts.is_empty()
    }

    ///
    /// Returns the size of the program in bytes.
    ///
    pub fn byte_size(&self, mode: StripMode) -> usize {
        byte_size(self.felts.iter(), mode)
    }
}

///
/// Computes the total byte size of hex `tokens`.
///
/// Every token contributes half of its character count left after stripping with `mode`.
/// Odd counts are truncated, so a dangling half-byte is dropped. The characters are not
/// validated to be hex digits.
///
pub fn byte_size<I>(tokens: I, mode: StripMode) -> usize
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| mode.strip(token.as_ref()).chars().count() / 2)
        .sum()
}
