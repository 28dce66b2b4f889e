use clap::{Args, Subcommand};
use mediaprim_flags::{has_any_flag, has_flag};

use super::Command;
use crate::cli::number::parse_u64;

/// Subcommand for testing flag masks against values.
#[derive(Debug, Args)]
pub struct Flags {
    #[clap(subcommand)]
    command: FlagsCommand,
}

#[derive(Debug, Subcommand)]
enum FlagsCommand {
    /// Checks whether all bits of the mask are set in the value.
    All {
        #[clap(value_parser = parse_u64)]
        value: u64,

        #[clap(value_parser = parse_u64)]
        mask: u64,
    },

    /// Checks whether any bit of the mask is set in the value.
    Any {
        #[clap(value_parser = parse_u64)]
        value: u64,

        #[clap(value_parser = parse_u64)]
        mask: u64,
    },
}

impl FlagsCommand {
    fn matches(&self) -> bool {
        match *self {
            Self::All { value, mask } => {
                if mask == 0 {
                    log::warn!("An empty mask is contained in every value");
                }

                has_flag(value, mask)
            }

            Self::Any { value, mask } => has_any_flag(value, mask),
        }
    }
}

impl Command for Flags {
    fn handle(self) -> eyre::Result<()> {
        println!("{}", self.command.matches());
        Ok(())
    }
}
