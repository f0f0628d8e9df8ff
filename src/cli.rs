mod check;

use clap::{Parser, Subcommand};

pub use self::check::{CheckArgs, OutputFormat};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check the battery readings against the operating limits.
    #[clap(name = "check")]
    Check(Box<CheckArgs>),

    /// Print the operating limits.
    #[clap(name = "limits")]
    Limits,
}
