//! Channel word codec.
//!
//! Each color channel is stored as a 4-byte word holding the top 16 bits of a
//! big-endian `f32`, byte-swapped, followed by two zero bytes. For a channel
//! value `v` with `(v as f32).to_be_bytes() == [f0, f1, f2, f3]` the on-disk
//! word is `[f1, f0, 0, 0]`.
//!
//! ```text
//! on disk      [b0, b1, b2, b3]
//! swapped      [b3, b2, b1, b0]    (read big-endian, re-emit little-endian)
//! narrowed     [b1, b0, 00, 00]    (top two bytes of the swapped word + zeros)
//! channel      f32::from_be_bytes(narrowed) truncated toward zero
//! ```
//!
//! The low 16 bits of the float are always discarded. For integers in
//! `0..=255` they are zero anyway, so those values round-trip exactly.
//!
//! The hex helpers render words the way the scanner and save logs print them
//! ([`word_to_hex`]) and parse such dumps back ([`word_from_hex`],
//! [`channel_from_hex`]); malformed dumps are Format errors.

use crate::file::AnmColorError;

/// A raw 4-byte channel word
pub type Word = [u8; 4];

/// Byte order of a 4-byte word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
	/// Most significant byte first
	Big,
	/// Least significant byte first
	Little,
}

impl Endianness {
	/// Returns the opposite byte order.
	pub const fn opposite(self) -> Self {
		match self {
			Self::Big => Self::Little,
			Self::Little => Self::Big,
		}
	}
}

/// Reads `word` as a `u32` in the `from` byte order and re-emits it in the opposite order.
///
/// # Examples
///
/// ```
/// use anmcolor_types::file::anm::codec::{Endianness, swap_endianness};
///
/// let swapped = swap_endianness([0x01, 0x02, 0x03, 0x04], Endianness::Big);
/// assert_eq!(swapped, [0x04, 0x03, 0x02, 0x01]);
/// ```
pub fn swap_endianness(word: Word, from: Endianness) -> Word {
	let value = match from {
		Endianness::Big => u32::from_be_bytes(word),
		Endianness::Little => u32::from_le_bytes(word),
	};
	match from.opposite() {
		Endianness::Big => value.to_be_bytes(),
		Endianness::Little => value.to_le_bytes(),
	}
}

/// Narrows an on-disk word to the big-endian float bytes it encodes.
///
/// Keeps the top two bytes of the big-endian-swapped word and pads with zeros.
pub fn narrow_word(word: Word) -> Word {
	let swapped = swap_endianness(word, Endianness::Big);
	[swapped[2], swapped[3], 0x00, 0x00]
}

/// Decodes an on-disk channel word into its integer value.
///
/// Non-finite floats saturate: NaN decodes to 0, infinities to `i32::MIN`/`i32::MAX`.
///
/// # Examples
///
/// ```
/// use anmcolor_types::file::anm::codec::decode_channel;
///
/// // 1.0f32 is 0x3F800000; on disk it is stored as 80 3F 00 00
/// assert_eq!(decode_channel([0x80, 0x3F, 0x00, 0x00]), 1);
/// ```
pub fn decode_channel(word: Word) -> i32 {
	f32::from_be_bytes(narrow_word(word)) as i32
}

/// Encodes an integer channel value into its on-disk word.
///
/// Only the top 16 bits of the float survive. Values outside `0..=255` are not
/// rejected here; they lose precision in the same way the format does.
///
/// # Examples
///
/// ```
/// use anmcolor_types::file::anm::codec::{decode_channel, encode_channel};
///
/// let word = encode_channel(255);
/// assert_eq!(word, [0x7F, 0x43, 0x00, 0x00]);
/// assert_eq!(decode_channel(word), 255);
/// ```
pub fn encode_channel(value: i32) -> Word {
	let float_bytes = (value as f32).to_be_bytes();
	let swapped = swap_endianness(float_bytes, Endianness::Little);
	[swapped[2], swapped[3], 0x00, 0x00]
}

/// Parses exactly 8 hex digits into a word.
///
/// # Errors
///
/// Returns [`AnmColorError::InvalidHex`] for odd-length or non-hex input, and
/// [`AnmColorError::InvalidWordLength`] when the input does not decode to 4 bytes.
pub fn word_from_hex(text: &str) -> Result<Word, AnmColorError> {
	let bytes = hex::decode(text)?;
	let actual = bytes.len();
	bytes.try_into().map_err(|_| AnmColorError::InvalidWordLength {
		expected: 4,
		actual,
	})
}

/// Formats a word (or any run of bytes) as lowercase hex digits.
pub fn word_to_hex(word: impl AsRef<[u8]>) -> String {
	hex::encode(word)
}

/// Interprets 8 hex digits as a big-endian `f32` and truncates it toward zero.
///
/// # Examples
///
/// ```
/// use anmcolor_types::file::anm::codec::channel_from_hex;
///
/// assert_eq!(channel_from_hex("437f0000").unwrap(), 255);
/// assert!(channel_from_hex("437f00").is_err());
/// ```
pub fn channel_from_hex(text: &str) -> Result<i32, AnmColorError> {
	Ok(f32::from_be_bytes(word_from_hex(text)?) as i32)
}

/// Formats an integer channel as the 8 hex digits of its big-endian `f32`.
pub fn channel_to_hex(value: i32) -> String {
	word_to_hex((value as f32).to_be_bytes())
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_swap_endianness_reverses_bytes() {
		let word = [0xAA, 0xBB, 0xCC, 0xDD];
		assert_eq!(swap_endianness(word, Endianness::Big), [0xDD, 0xCC, 0xBB, 0xAA]);
		assert_eq!(swap_endianness(word, Endianness::Little), [0xDD, 0xCC, 0xBB, 0xAA]);
	}

	#[test]
	fn test_channel_roundtrip_for_every_byte_value() {
		for value in 0..=255 {
			assert_eq!(decode_channel(encode_channel(value)), value, "value {value}");
		}
	}

	#[test]
	fn test_encoded_words_have_zero_tail() {
		for value in 0..=255 {
			let word = encode_channel(value);
			assert_eq!(&word[2..], &[0x00, 0x00], "value {value}");
		}
	}

	#[test]
	fn test_golden_words() {
		assert_eq!(encode_channel(0), [0x00, 0x00, 0x00, 0x00]);
		assert_eq!(encode_channel(1), [0x80, 0x3F, 0x00, 0x00]);
		assert_eq!(encode_channel(128), [0x00, 0x43, 0x00, 0x00]);
		assert_eq!(encode_channel(255), [0x7F, 0x43, 0x00, 0x00]);
		assert_eq!(decode_channel([0x80, 0x3F, 0x00, 0x00]), 1);
	}

	#[test]
	fn test_raw_big_endian_one_decodes_to_zero() {
		// 3F 80 00 00 narrows to 0x803F0000, a negative subnormal
		assert_eq!(narrow_word([0x3F, 0x80, 0x00, 0x00]), [0x80, 0x3F, 0x00, 0x00]);
		assert_eq!(decode_channel([0x3F, 0x80, 0x00, 0x00]), 0);
	}

	#[test]
	fn test_decode_ignores_low_bytes() {
		assert_eq!(decode_channel([0x7F, 0x43, 0x12, 0x34]), decode_channel([0x7F, 0x43, 0, 0]));
	}

	#[test]
	fn test_decode_saturates_non_finite() {
		// 0x7F800000 is +inf, 0x7FC00000 is NaN
		assert_eq!(decode_channel([0x80, 0x7F, 0x00, 0x00]), i32::MAX);
		assert_eq!(decode_channel([0xC0, 0x7F, 0x00, 0x00]), 0);
	}

	#[test]
	fn test_hex_helpers() {
		assert_eq!(channel_to_hex(1), "3f800000");
		assert_eq!(channel_from_hex("3f800000").unwrap(), 1);
		assert_eq!(channel_from_hex("C0000000").unwrap(), -2);
		assert_eq!(word_from_hex("aabbccdd").unwrap(), [0xAA, 0xBB, 0xCC, 0xDD]);
		assert_eq!(word_to_hex([0x7F, 0x43, 0x00, 0x00]), "7f430000");
	}

	#[test]
	fn test_record_dump_parses_back() {
		let record = super::super::color::ColorRecord::new(255, 128, 0, 200);
		let bytes = record.to_bytes();
		let dumped: Vec<String> = bytes.chunks_exact(4).map(word_to_hex).collect();
		assert_eq!(dumped[0], "7f430000");

		let channels: Vec<i32> =
			dumped.iter().map(|text| decode_channel(word_from_hex(text).unwrap())).collect();
		assert_eq!(channels, record.channels());
	}

	#[test]
	fn test_hex_helpers_reject_malformed_input() {
		assert!(matches!(channel_from_hex("3f80000"), Err(AnmColorError::InvalidHex(_))));
		assert!(matches!(channel_from_hex("3f80zz00"), Err(AnmColorError::InvalidHex(_))));
		assert!(matches!(
			word_from_hex("3f80"),
			Err(AnmColorError::InvalidWordLength {
				expected: 4,
				actual: 2
			})
		));
	}

	proptest! {
		#[test]
		fn prop_swap_is_an_involution(word in any::<[u8; 4]>()) {
			let once = swap_endianness(word, Endianness::Big);
			prop_assert_eq!(swap_endianness(once, Endianness::Little), word);
		}

		#[test]
		fn prop_decoding_is_stable(word in any::<[u8; 4]>()) {
			let value = decode_channel(word);
			prop_assert_eq!(decode_channel(encode_channel(value)), value);
		}
	}
}
