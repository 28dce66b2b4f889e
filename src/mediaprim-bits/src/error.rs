use thiserror::Error;

/// Precondition violations for bit field descriptors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BitFieldError {
    /// A field was requested with a width of zero bits.
    #[error("bit field must be at least one bit wide")]
    ZeroWidth,

    /// A field extends past the most significant bit of the value.
    #[error("bit field at index {index} with width {count} exceeds a {width}-bit value")]
    OutOfRange { index: u32, count: u32, width: u32 },
}
