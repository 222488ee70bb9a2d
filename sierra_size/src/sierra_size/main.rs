//!
//! The Sierra size reporter binary.
//!

pub(crate) mod arguments;

use clap::Parser;

use self::arguments::Arguments;

///
/// The application entry point.
///
/// The exit code does not depend on whether the measurements have succeeded.
///
fn main() {
    let arguments = Arguments::parse();

    let query = arguments.jq.map(sierra_size::Jq::new).unwrap_or_default();
    sierra_size::Report::new(arguments.path, arguments.strip_mode, query).run();
}
