//! Command-line interface.
//!
//! Each subcommand drives one screen controller against the live backend and
//! prints what it ended up showing.

mod commands;
mod common;
pub mod completions;

pub use commands::{Cli, Commands, ProfileCommand, VehicleCommand};
pub use common::*;
