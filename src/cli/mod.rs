pub mod commands;
pub mod output;

pub use commands::{BuildArgs, CliArgs, Commands, DetectArgs};
pub use output::{OutputFormat, OutputFormatter};
