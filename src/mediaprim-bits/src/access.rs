//! Free functions for reading and writing bit fields.

use crate::{BitField, BitFieldError, BitWord};

#[inline(always)]
fn is_valid_field<T: BitWord>(index: u32, count: u32) -> bool {
    count != 0 && index.checked_add(count).is_some_and(|end| end <= T::BITS)
}

/// Gets a right-aligned mask of `count` set bits.
#[inline]
pub(crate) fn field_mask<T: BitWord>(count: u32) -> T {
    T::MAX.wrapping_shr(T::BITS.wrapping_sub(count))
}

/// Gets bit `index` of `value`, which is either `0` or `1`.
///
/// # Panics
///
/// Panics in debug mode when `index` is not less than the width of `T`.
#[inline]
pub fn get_bit<T: BitWord>(value: T, index: u32) -> T {
    debug_assert!(index < T::BITS, "bit {index} out of range for {} bits", T::BITS);
    value.wrapping_shr(index) & T::ONE
}

/// Gets the `count` bits of `value` starting at bit `index`.
///
/// The result is right-aligned, so bit 0 of the result is bit `index`
/// of `value`. It is always zero-extended.
///
/// # Panics
///
/// Panics in debug mode when the field is empty or does not fit into `T`.
#[inline]
pub fn get_bits<T: BitWord>(value: T, index: u32, count: u32) -> T {
    debug_assert!(
        is_valid_field::<T>(index, count),
        "bit field {index}+{count} out of range for {} bits",
        T::BITS
    );

    // Move the field's MSB into the MSB of the word, then right-align it.
    let msb_shift = T::BITS.wrapping_sub(index.wrapping_add(count));
    value
        .wrapping_shl(msb_shift)
        .wrapping_shr(T::BITS.wrapping_sub(count))
}

/// Returns `value` with bit `index` set to `on`.
///
/// # Panics
///
/// Panics in debug mode when `index` is not less than the width of `T`.
#[inline]
pub fn set_bit<T: BitWord>(value: T, index: u32, on: bool) -> T {
    debug_assert!(index < T::BITS, "bit {index} out of range for {} bits", T::BITS);

    let bit = T::ONE.wrapping_shl(index);
    if on { value | bit } else { value & !bit }
}

/// Returns `value` with the `count` bits starting at bit `index` replaced
/// by the low `count` bits of `field`.
///
/// Bits of `field` above `count` are discarded and bits of `value` outside
/// the field are preserved.
///
/// # Panics
///
/// Panics in debug mode when the field is empty or does not fit into `T`.
#[inline]
pub fn set_bits<T: BitWord>(value: T, index: u32, count: u32, field: T) -> T {
    debug_assert!(
        is_valid_field::<T>(index, count),
        "bit field {index}+{count} out of range for {} bits",
        T::BITS
    );

    let mask = field_mask::<T>(count);
    (value & !mask.wrapping_shl(index)) | (field & mask).wrapping_shl(index)
}

/// Interprets the low `nbits` bits of `value` as a two's complement number
/// and sign-extends it to [`i64`].
///
/// # Panics
///
/// Panics in debug mode when `nbits` is not in `1..=64`.
#[inline]
pub fn sign_extend(value: u64, nbits: u32) -> i64 {
    debug_assert!((1..=u64::BITS).contains(&nbits), "cannot sign-extend {nbits} bits");

    let shift = u64::BITS.wrapping_sub(nbits);
    (value.wrapping_shl(shift) as i64).wrapping_shr(shift)
}

/// Checked version of [`get_bit`].
#[inline]
pub fn try_get_bit<T: BitWord>(value: T, index: u32) -> Result<T, BitFieldError> {
    BitField::for_word::<T>(index, 1).map(|_| get_bit(value, index))
}

/// Checked version of [`get_bits`].
#[inline]
pub fn try_get_bits<T: BitWord>(value: T, index: u32, count: u32) -> Result<T, BitFieldError> {
    BitField::for_word::<T>(index, count).map(|_| get_bits(value, index, count))
}

/// Checked version of [`set_bits`].
#[inline]
pub fn try_set_bits<T: BitWord>(
    value: T,
    index: u32,
    count: u32,
    field: T,
) -> Result<T, BitFieldError> {
    BitField::for_word::<T>(index, count).map(|_| set_bits(value, index, count, field))
}

/// Checked version of [`sign_extend`].
#[inline]
pub fn try_sign_extend(value: u64, nbits: u32) -> Result<i64, BitFieldError> {
    BitField::for_word::<u64>(0, nbits).map(|_| sign_extend(value, nbits))
}
