//! Parsing of integer arguments written in binary, octal, hex or decimal.

use std::num::ParseIntError;

/// Parses an unsigned integer in decimal, `0x` hexadecimal, `0o` octal or
/// `0b` binary notation.
///
/// Underscores may be used as digit separators.
pub fn parse_u64(input: &str) -> Result<u64, ParseIntError> {
    let cleaned = input.trim().replace('_', "");
    let lower = cleaned.to_ascii_lowercase();

    let (radix, digits) = if let Some(hex) = lower.strip_prefix("0x") {
        (16, hex)
    } else if let Some(oct) = lower.strip_prefix("0o") {
        (8, oct)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        (2, bin)
    } else {
        (10, lower.as_str())
    };

    u64::from_str_radix(digits, radix)
}
