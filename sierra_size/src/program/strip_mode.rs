//!
//! The hex token stripping mode.
//!

///
/// The hex token stripping mode.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StripMode {
    /// Removes every occurrence of `0x` from the token, wherever it appears.
    #[default]
    Global,
    /// Removes a single leading `0x` or `0X`.
    Prefix,
}

impl StripMode {
    ///
    /// Returns the hex digits of `token` left after stripping.
    ///
    pub fn strip<'a>(&self, token: &'a str) -> std::borrow::Cow<'a, str> {
        match self {
            Self::Global => {
                if token.contains(crate::HEX_PREFIX) {
                    std::borrow::Cow::Owned(token.replace(crate::HEX_PREFIX, ""))
                } else {
                    std::borrow::Cow::Borrowed(token)
                }
            }
            Self::Prefix => {
                let prefix_length = crate::HEX_PREFIX.len();
                match token.get(..prefix_length) {
                    Some(prefix) if prefix.eq_ignore_ascii_case(crate::HEX_PREFIX) => {
                        std::borrow::Cow::Borrowed(&token[prefix_length..])
                    }
                    _ => std::borrow::Cow::Borrowed(token),
                }
            }
        }
    }
}

impl std::str::FromStr for StripMode {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "global" => Ok(Self::Global),
            "prefix" => Ok(Self::Prefix),
            string => anyhow::bail!(
                "Unknown strip mode `{string}`. Supported modes: {}",
                [Self::Global, Self::Prefix]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for StripMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Prefix => write!(f, "prefix"),
        }
    }
}
