use clap::{Parser, Subcommand};

use crate::cmd::*;

mod args;

pub mod number;

/// The CLI interface for the mediaprim application.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// The selected command.
    #[clap(subcommand)]
    pub command: MediaprimCommand,

    #[clap(flatten)]
    pub verbosity: args::Verbosity,
}

/// The top-level commands supported by mediaprim.
#[derive(Debug, Subcommand)]
pub enum MediaprimCommand {
    Bits(bits::Bits),
    Flags(flags::Flags),
}

impl Command for MediaprimCommand {
    fn handle(self) -> eyre::Result<()> {
        match self {
            Self::Bits(bits) => bits.handle(),
            Self::Flags(flags) => flags.handle(),
        }
    }
}
