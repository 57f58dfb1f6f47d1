// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{CliArgs, LogFormat};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// Every option can also come from a `MONEY_TRANSFER_*` environment variable.
/// On invalid arguments or `--help`, clap prints a message and exits.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
