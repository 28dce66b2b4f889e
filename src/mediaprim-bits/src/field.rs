use crate::{BitFieldError, BitWord, access};

/// A validated descriptor for a contiguous run of bits.
///
/// The field starts at bit `index` (counting from the least significant
/// bit) and spans `count` bits towards the most significant bit.
///
/// Construction through [`BitField::new`] only checks the descriptor
/// against the widest supported integer, [`u128`]. Whether it fits a
/// narrower word is checked when the field is applied to a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawBitField")
)]
pub struct BitField {
    index: u32,
    count: u32,
}

impl BitField {
    /// Creates a new [`BitField`] from its `index` and `count`.
    pub fn new(index: u32, count: u32) -> Result<Self, BitFieldError> {
        Self::check(index, count, u128::BITS)
    }

    /// Creates a new [`BitField`] that is guaranteed to fit into `T`.
    pub fn for_word<T: BitWord>(index: u32, count: u32) -> Result<Self, BitFieldError> {
        Self::check(index, count, T::BITS)
    }

    fn check(index: u32, count: u32, width: u32) -> Result<Self, BitFieldError> {
        if count == 0 {
            log::debug!("Rejecting zero-width bit field at index {index}");
            return Err(BitFieldError::ZeroWidth);
        }

        match index.checked_add(count) {
            Some(end) if end <= width => Ok(Self { index, count }),
            _ => {
                log::debug!("Rejecting bit field {index}+{count} for {width}-bit word");
                Err(BitFieldError::OutOfRange {
                    index,
                    count,
                    width,
                })
            }
        }
    }

    /// Gets the index of the field's least significant bit.
    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Gets the width of the field in bits.
    #[inline]
    pub const fn count(self) -> u32 {
        self.count
    }

    /// Gets the index one past the field's most significant bit.
    #[inline]
    pub const fn end(self) -> u32 {
        self.index + self.count
    }

    /// Whether the field lies entirely within a value of type `T`.
    #[inline]
    pub fn fits<T: BitWord>(self) -> bool {
        self.end() <= T::BITS
    }

    fn ensure_fits<T: BitWord>(self) -> Result<(), BitFieldError> {
        Self::check(self.index, self.count, T::BITS).map(|_| ())
    }

    /// Gets a mask with exactly the bits of this field set in place.
    pub fn mask<T: BitWord>(self) -> Result<T, BitFieldError> {
        self.ensure_fits::<T>()?;
        Ok(access::field_mask::<T>(self.count).wrapping_shl(self.index))
    }

    /// Extracts this field from `value`, right-aligned.
    pub fn extract<T: BitWord>(self, value: T) -> Result<T, BitFieldError> {
        self.ensure_fits::<T>()?;
        Ok(access::get_bits(value, self.index, self.count))
    }

    /// Replaces this field in `value` with the low bits of `field`.
    pub fn insert<T: BitWord>(self, value: T, field: T) -> Result<T, BitFieldError> {
        self.ensure_fits::<T>()?;
        Ok(access::set_bits(value, self.index, self.count, field))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBitField {
    index: u32,
    count: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBitField> for BitField {
    type Error = BitFieldError;

    fn try_from(raw: RawBitField) -> Result<Self, Self::Error> {
        Self::new(raw.index, raw.count)
    }
}
