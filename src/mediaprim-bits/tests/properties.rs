//! Property-based tests for bit field access.

use mediaprim_bits::*;
use proptest::prelude::*;

/// Generates a valid `(index, count)` pair for a `width`-bit word.
fn field(width: u32) -> impl Strategy<Value = (u32, u32)> {
    (0..width).prop_flat_map(move |index| (Just(index), 1..=width - index))
}

fn interesting_u32() -> impl Strategy<Value = u32> {
    prop_oneof![
        Just(0),
        Just(u32::MAX),
        (0..32_u32).prop_map(|i| 1_u32 << i),
        any::<u32>(),
    ]
}

proptest! {
    #[test]
    fn get_bit_matches_binary_expansion(value in any::<u64>(), index in 0..64_u32) {
        let bit = get_bit(value, index);

        prop_assert!(bit == 0 || bit == 1);
        prop_assert_eq!(bit == 1, format!("{value:064b}").as_bytes()[63 - index as usize] == b'1');
    }

    #[test]
    fn get_bits_matches_mask_definition(value in interesting_u32(), (index, count) in field(32)) {
        let reference = ((value as u64) >> index) & ((1_u64 << count) - 1);
        prop_assert_eq!(get_bits(value, index, count) as u64, reference);
    }

    #[test]
    fn get_bits_u8_matches_mask_definition(value in any::<u8>(), (index, count) in field(8)) {
        let reference = ((value as u32) >> index) & ((1_u32 << count) - 1);
        prop_assert_eq!(get_bits(value, index, count) as u32, reference);
    }

    #[test]
    fn single_bit_field_is_get_bit(value in any::<u16>(), index in 0..16_u32) {
        prop_assert_eq!(get_bits(value, index, 1), get_bit(value, index));
    }

    #[test]
    fn set_then_get(
        value in any::<u32>(),
        field_value in any::<u32>(),
        (index, count) in field(32),
    ) {
        let composed = set_bits(value, index, count, field_value);
        let mask = BitField::new(index, count).unwrap().mask::<u32>().unwrap();

        prop_assert_eq!(get_bits(composed, index, count), get_bits(field_value, 0, count));
        prop_assert_eq!(composed & !mask, value & !mask);
    }

    #[test]
    fn checked_agrees_with_unchecked(value in any::<u64>(), (index, count) in field(64)) {
        prop_assert_eq!(try_get_bits(value, index, count), Ok(get_bits(value, index, count)));
    }

    #[test]
    fn checked_rejects_overlong_fields(index in 0..64_u32, extra in 1..64_u32) {
        let count = 64 - index + extra;
        prop_assert!(try_get_bits(0_u64, index, count).is_err());
    }
}
