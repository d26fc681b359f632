//! Command implementations behind the CLI.

pub mod convert;
pub mod prompt;

pub use convert::cmd_convert;
