//! Provides extraction and composition of bit fields inside fixed-width
//! unsigned integers.
//!
//! Binary protocol headers (RTP, RTCP, RTMP chunk headers, container
//! bitstreams) pack many small fields into a handful of machine words.
//! This crate gives a uniform way of addressing such a field by the
//! position of its least significant bit and its width in bits.
//!
//! # Implementation
//!
//! Fields are extracted without any mask constants. The value is first
//! shifted left so that the most significant bit of the field lands in
//! the most significant bit of the word, discarding everything above it.
//! A right shift by `W - count` then right-aligns and zero-extends it:
//!
//! ```
//! use mediaprim_bits::get_bits;
//!
//! // 0b00111100 << 1 = 0b01111000
//! // 0b01111000 >> 6 = 0b00000001
//! assert_eq!(get_bits(0b0011_1100_u8, 5, 2), 0b01);
//! ```
//!
//! # Checked and permissive access
//!
//! The plain functions ([`get_bits`], [`set_bits`], ...) leave the
//! validity of a field to the caller. Debug builds assert on it, release
//! builds follow the wrapping shift semantics of the host width. The
//! `try_` variants and [`BitField`] report a [`BitFieldError`] instead.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod access;
pub use access::*;

mod error;
pub use error::BitFieldError;

mod field;
pub use field::BitField;

mod word;
pub use word::BitWord;
