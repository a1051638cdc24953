//! Command-line interface module

mod args;

pub use args::{parse_args, print_usage, CliConfig, VERSION};
