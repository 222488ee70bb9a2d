//!
//! The external structured query tools.
//!

pub mod error;

use std::path::Path;
use std::path::PathBuf;

use self::error::Error as QueryError;

///
/// Counts the Sierra program felts of a contract class file without decoding it in-process.
///
pub trait ProgramLengthQuery {
    ///
    /// Returns the number of felts in the Sierra program of the contract class at `path`.
    ///
    fn program_length(&self, path: &Path) -> Result<usize, QueryError>;
}

///
/// The `jq` command-line JSON processor.
///
#[derive(Debug, Clone)]
pub struct Jq {
    /// The executable path.
    pub executable: PathBuf,
    /// The arguments passed before the filter and the file path.
    pub arguments: Vec<String>,
}

impl Default for Jq {
    fn default() -> Self {
        Self::new(PathBuf::from(Self::DEFAULT_EXECUTABLE_NAME))
    }
}

impl Jq {
    /// The default executable name.
    pub const DEFAULT_EXECUTABLE_NAME: &'static str = "jq";

    /// The filter computing the Sierra program length.
    pub const FILTER_PROGRAM_LENGTH: &'static str = ".sierra_program | length";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(executable: PathBuf) -> Self {
        Self {
            executable,
            arguments: Vec::new(),
        }
    }

    ///
    /// Sets the arguments passed before the filter and the file path.
    ///
    pub fn with_arguments<I, S>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arguments = arguments.into_iter().map(Into::into).collect();
        self
    }

    ///
    /// Parses the felt count from the subprocess standard output.
    ///
    pub fn parse_length(&self, stdout: &str) -> Result<usize, QueryError> {
        let output = stdout.trim();
        output
            .parse::<usize>()
            .map_err(|error| QueryError::OutputParsing {
                executable: self.executable.clone(),
                output: output.to_owned(),
                error,
            })
    }
}

impl ProgramLengthQuery for Jq {
    fn program_length(&self, path: &Path) -> Result<usize, QueryError> {
        if let Err(error) = which::which(self.executable.as_path()) {
            return Err(QueryError::ExecutableNotFound {
                executable: self.executable.clone(),
                error,
            });
        }

        let mut command = std::process::Command::new(self.executable.as_path());
        command.stdin(std::process::Stdio::null());
        command.args(self.arguments.iter());
        command.arg(Self::FILTER_PROGRAM_LENGTH);
        command.arg(path);

        let output = command.output().map_err(|error| QueryError::Spawning {
            executable: self.executable.clone(),
            error,
        })?;
        if !output.status.success() {
            return Err(QueryError::Failure {
                executable: self.executable.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(output.stderr.as_slice()).to_string(),
            });
        }

        self.parse_length(String::from_utf8_lossy(output.stdout.as_slice()).as_ref())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::path::PathBuf;

    use super::Jq;
    use super::ProgramLengthQuery;
    use super::QueryError;

    #[test]
    fn parse_length_trims_whitespace() {
        let jq = Jq::default();
        assert_eq!(jq.parse_length("42\n").ok(), Some(42));
        assert_eq!(jq.parse_length("  7 \r\n").ok(), Some(7));
    }

    #[test]
    fn error_parse_length() {
        let jq = Jq::default();
        for output in ["", "null\n", "-1", "4.2"] {
            let error = jq.parse_length(output).expect_err("Must be invalid");
            assert!(matches!(error, QueryError::OutputParsing { .. }));
        }
    }

    #[test]
    fn error_executable_not_found() {
        let jq = Jq::new(PathBuf::from("sierra-size-definitely-missing-jq"));

        let error = jq
            .program_length(Path::new("contract.json"))
            .expect_err("Must be missing");
        assert!(matches!(error, QueryError::ExecutableNotFound { .. }));
        assert!(error.is_unexpected());
    }

    #[cfg(unix)]
    #[test]
    fn stub_printing_length() {
        let arguments = ["-c", "printf '42\\n'"];
        let jq = Jq::new(PathBuf::from("sh")).with_arguments(arguments);

        let length = jq
            .program_length(Path::new("contract.json"))
            .expect("Must be valid");
        assert_eq!(length, 42);
    }

    #[cfg(unix)]
    #[test]
    fn stub_receives_filter_and_path() {
        let script =
            r#"[ "$0" = '.sierra_program | length' ] && [ "$1" = 'contract.json' ] && echo 1"#;
        let jq = Jq::new(PathBuf::from("sh")).with_arguments(["-c", script]);

        let length = jq
            .program_length(Path::new("contract.json"))
            .expect("Must be valid");
        assert_eq!(length, 1);
    }

    #[cfg(unix)]
    #[test]
    fn error_stub_exiting_with_failure() {
        let arguments = ["-c", "echo 'parse error' >&2; exit 2"];
        let jq = Jq::new(PathBuf::from("sh")).with_arguments(arguments);

        let error = jq
            .program_length(Path::new("contract.json"))
            .expect_err("Must fail");
        match &error {
            QueryError::Failure { status, stderr, .. } => {
                assert_eq!(status.code(), Some(2));
                assert_eq!(stderr.trim(), "parse error");
            }
            error => panic!("Unexpected error: {error}"),
        }
        assert!(!error.is_unexpected());
        assert!(error.to_string().starts_with("Running `sh` failed"));
    }

    #[cfg(unix)]
    #[test]
    fn error_stub_printing_garbage() {
        let arguments = ["-c", "echo 'not a number'"];
        let jq = Jq::new(PathBuf::from("sh")).with_arguments(arguments);

        let error = jq
            .program_length(Path::new("contract.json"))
            .expect_err("Must fail");
        assert!(matches!(
            error,
            QueryError::OutputParsing { ref output, .. } if output == "not a number"
        ));
    }
}
