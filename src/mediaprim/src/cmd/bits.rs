use clap::{Args, Subcommand, ValueEnum};
use eyre::eyre;
use mediaprim_bits::{BitField, BitWord, try_get_bits, try_set_bits, try_sign_extend};

use super::Command;
use crate::cli::number::parse_u64;

/// Subcommand for extracting and composing bit fields.
#[derive(Debug, Args)]
pub struct Bits {
    #[clap(subcommand)]
    command: BitsCommand,
}

#[derive(Debug, Subcommand)]
enum BitsCommand {
    /// Extracts a right-aligned bit field from a value.
    Get {
        /// The value to extract from.
        #[clap(value_parser = parse_u64)]
        value: u64,

        /// Index of the field's least significant bit.
        index: u32,

        /// Width of the field in bits.
        #[clap(short, long, default_value_t = 1)]
        count: u32,

        /// The width of the value in bits.
        #[clap(short, long, value_enum, default_value_t = Width::W32)]
        width: Width,
    },

    /// Replaces a bit field in a value.
    ///
    /// Bits of the new field contents above the field width are discarded.
    Set {
        /// The value to modify.
        #[clap(value_parser = parse_u64)]
        value: u64,

        /// Index of the field's least significant bit.
        index: u32,

        /// The new contents of the field.
        #[clap(value_parser = parse_u64)]
        field: u64,

        /// Width of the field in bits.
        #[clap(short, long, default_value_t = 1)]
        count: u32,

        /// The width of the value in bits.
        #[clap(short, long, value_enum, default_value_t = Width::W32)]
        width: Width,
    },

    /// Interprets the low bits of a value as a two's complement number.
    Sext {
        /// The value to sign-extend.
        #[clap(value_parser = parse_u64)]
        value: u64,

        /// The number of significant bits in the value.
        nbits: u32,
    },
}

/// The width of the value operated on.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Width {
    #[value(name = "8")]
    W8,
    #[value(name = "16")]
    W16,
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
}

fn narrow<T: BitWord + TryFrom<u64>>(value: u64) -> eyre::Result<T> {
    T::try_from(value).map_err(|_| eyre!("value {value:#x} does not fit into {} bits", T::BITS))
}

fn get<T>(value: u64, index: u32, count: u32) -> eyre::Result<u64>
where
    T: BitWord + TryFrom<u64> + Into<u64>,
{
    log::debug!("Extracting {count} bits at index {index} from {value:#x}");

    let value = narrow::<T>(value)?;
    Ok(try_get_bits(value, index, count)?.into())
}

fn set<T>(value: u64, index: u32, count: u32, field: u64) -> eyre::Result<u64>
where
    T: BitWord + TryFrom<u64> + Into<u64>,
{
    log::debug!("Storing {field:#x} in {count} bits at index {index} of {value:#x}");

    // Reject bad layouts before truncating the field.
    BitField::for_word::<T>(index, count)?;

    // `count` is at most 64 here, so the field fits a u64 after masking.
    let truncated = match count {
        u64::BITS => field,
        _ => field & ((1 << count) - 1),
    };
    if truncated != field {
        log::warn!("Field value {field:#x} is wider than {count} bits; truncating it");
    }

    let value = narrow::<T>(value)?;
    let field = narrow::<T>(truncated)?;
    Ok(try_set_bits(value, index, count, field)?.into())
}

impl Command for Bits {
    fn handle(self) -> eyre::Result<()> {
        let result = match self.command {
            BitsCommand::Get {
                value,
                index,
                count,
                width,
            } => match width {
                Width::W8 => get::<u8>(value, index, count),
                Width::W16 => get::<u16>(value, index, count),
                Width::W32 => get::<u32>(value, index, count),
                Width::W64 => get::<u64>(value, index, count),
            }?,

            BitsCommand::Set {
                value,
                index,
                field,
                count,
                width,
            } => match width {
                Width::W8 => set::<u8>(value, index, count, field),
                Width::W16 => set::<u16>(value, index, count, field),
                Width::W32 => set::<u32>(value, index, count, field),
                Width::W64 => set::<u64>(value, index, count, field),
            }?,

            BitsCommand::Sext { value, nbits } => {
                let extended = try_sign_extend(value, nbits)?;
                println!("{extended}");
                return Ok(());
            }
        };

        println!("{result} ({result:#b})");
        Ok(())
    }
}
