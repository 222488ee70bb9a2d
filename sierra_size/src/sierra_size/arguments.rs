//!
//! The Sierra size reporter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The Sierra size reporter arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// The contract class JSON file emitted by the Cairo compiler.
    #[arg(default_value = sierra_size::DEFAULT_CONTRACT_CLASS_PATH)]
    pub path: PathBuf,

    /// Path to the `jq` executable used to cross-check the felt count.
    /// Is set to `jq` by default.
    #[arg(long)]
    pub jq: Option<PathBuf>,

    /// The felt hex prefix stripping mode: `global` (default) or `prefix`.
    #[arg(long = "strip-mode", default_value_t = sierra_size::StripMode::Global)]
    pub strip_mode: sierra_size::StripMode,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::Arguments;

    #[test]
    fn defaults() {
        let arguments = Arguments::try_parse_from(["sierra-size"]).expect("Always valid");

        assert_eq!(
            arguments.path,
            PathBuf::from(sierra_size::DEFAULT_CONTRACT_CLASS_PATH)
        );
        assert_eq!(arguments.jq, None);
        assert_eq!(arguments.strip_mode, sierra_size::StripMode::Global);
    }

    #[test]
    fn overrides() {
        let arguments = Arguments::try_parse_from([
            "sierra-size",
            "verifier.contract_class.json",
            "--jq",
            "/opt/bin/jq",
            "--strip-mode",
            "prefix",
        ])
        .expect("Always valid");

        assert_eq!(
            arguments.path,
            PathBuf::from("verifier.contract_class.json")
        );
        assert_eq!(arguments.jq, Some(PathBuf::from("/opt/bin/jq")));
        assert_eq!(arguments.strip_mode, sierra_size::StripMode::Prefix);
    }

    #[test]
    fn error_unknown_strip_mode() {
        assert!(Arguments::try_parse_from(["sierra-size", "--strip-mode", "suffix"]).is_err());
    }
}
