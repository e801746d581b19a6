//! Command-line interface.

mod args;
pub mod process;

pub use args::{Cli, Commands, ProcessArgs};
