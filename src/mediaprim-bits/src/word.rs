//! Unsigned integer widths that bit fields can be addressed in.

use std::{
    fmt,
    ops::{BitAnd, BitOr, Not},
};

mod private {
    pub trait Sealed {}
}

/// An unsigned integer treated as an ordered sequence of bits.
///
/// Bit 0 is the least significant bit. This trait is sealed and
/// implemented for all unsigned primitive integers.
pub trait BitWord:
    private::Sealed
    + Copy
    + Eq
    + fmt::Debug
    + fmt::Binary
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
{
    /// The width of the integer in bits.
    const BITS: u32;

    /// The value with no bits set.
    const ZERO: Self;

    /// The value with only bit 0 set.
    const ONE: Self;

    /// The value with all bits set.
    const MAX: Self;

    /// Shift left, masking `rhs` to the width of the type.
    fn wrapping_shl(self, rhs: u32) -> Self;

    /// Logical shift right, masking `rhs` to the width of the type.
    fn wrapping_shr(self, rhs: u32) -> Self;
}

macro_rules! bit_word_impl {
    ($($ty:ty),* $(,)*) => {
        $(
            impl private::Sealed for $ty {}

            impl BitWord for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$ty>::MAX;

                #[inline(always)]
                fn wrapping_shl(self, rhs: u32) -> Self {
                    <$ty>::wrapping_shl(self, rhs)
                }

                #[inline(always)]
                fn wrapping_shr(self, rhs: u32) -> Self {
                    <$ty>::wrapping_shr(self, rhs)
                }
            }
        )*
    };
}

bit_word_impl!(u8, u16, u32, u64, u128, usize);
