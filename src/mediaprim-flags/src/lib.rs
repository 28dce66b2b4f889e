//! Tests flag masks against values, for plain integers as well as
//! symbolic flag types backed by an integer.
//!
//! Both operands of [`has_flag`] only need to agree on their backing
//! integer type, so raw integers, [`bitflags`] types and fieldless
//! `#[repr]` enums can be mixed freely:
//!
//! ```
//! use bitflags::bitflags;
//! use mediaprim_flags::{flag_set, has_flag};
//!
//! bitflags! {
//!     #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//!     pub struct Caps: u8 {
//!         const AUDIO = 1 << 0;
//!         const VIDEO = 1 << 1;
//!     }
//! }
//! flag_set!(bitflags Caps);
//!
//! assert!(has_flag(Caps::all(), Caps::VIDEO));
//! assert!(has_flag(0b11_u8, Caps::AUDIO));
//! assert!(!has_flag(Caps::AUDIO, 0b10_u8));
//! ```

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use bitflags::Bits;

pub use bitflags;

/// A value that can be viewed as a bit mask of flags.
///
/// Implemented for all primitive integers. For [`bitflags`] types and
/// fieldless enums with an integer representation, use [`flag_set!`].
pub trait FlagSet: Copy {
    /// The integer type backing the flags.
    type Bits: Bits;

    /// Gets the raw bits of this value.
    fn flag_bits(self) -> Self::Bits;
}

macro_rules! int_flag_set_impl {
    ($($ty:ty),* $(,)*) => {
        $(
            impl FlagSet for $ty {
                type Bits = $ty;

                #[inline(always)]
                fn flag_bits(self) -> Self::Bits {
                    self
                }
            }
        )*
    };
}

int_flag_set_impl! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
}

/// Implements [`FlagSet`] for integer-backed symbolic flag types.
///
/// Types generated by [`bitflags::bitflags!`] are backed by their
/// declared bits type:
///
/// ```ignore
/// flag_set!(bitflags PropertyFlags, SerializerFlags);
/// ```
///
/// Fieldless enums name their `#[repr]` integer, and must be [`Copy`]:
///
/// ```ignore
/// flag_set!(enum ChunkFlag as u8, PortFlag as u32);
/// ```
#[macro_export]
macro_rules! flag_set {
    (bitflags $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::FlagSet for $ty {
                type Bits = <$ty as $crate::bitflags::Flags>::Bits;

                #[inline(always)]
                fn flag_bits(self) -> Self::Bits {
                    $crate::bitflags::Flags::bits(&self)
                }
            }
        )+
    };

    (enum $($ty:ty as $repr:ty),+ $(,)?) => {
        $(
            impl $crate::FlagSet for $ty {
                type Bits = $repr;

                #[inline(always)]
                fn flag_bits(self) -> Self::Bits {
                    self as $repr
                }
            }
        )+
    };
}

/// Whether every bit set in `mask` is also set in `value`.
///
/// An empty `mask` is trivially contained in every value, so this
/// returns `true` for it.
#[inline]
pub fn has_flag<V, M>(value: V, mask: M) -> bool
where
    V: FlagSet,
    M: FlagSet<Bits = V::Bits>,
{
    let mask = mask.flag_bits();
    value.flag_bits() & mask == mask
}

/// Whether at least one bit set in `mask` is also set in `value`.
///
/// Unlike [`has_flag`], an empty `mask` never matches.
#[inline]
pub fn has_any_flag<V, M>(value: V, mask: M) -> bool
where
    V: FlagSet,
    M: FlagSet<Bits = V::Bits>,
{
    value.flag_bits() & mask.flag_bits() != V::Bits::EMPTY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_integers() {
        assert!(has_flag(0b0110_u32, 0b0010_u32));
        assert!(!has_flag(0b0110_u32, 0b1000_u32));
        assert!(has_flag(-1_i32, 0x7000_0000_i32));
    }

    #[test]
    fn any_flag() {
        assert!(has_any_flag(0b0110_u8, 0b1010_u8));
        assert!(!has_flag(0b0110_u8, 0b1010_u8));
        assert!(!has_any_flag(0b0110_u8, 0_u8));
    }
}
