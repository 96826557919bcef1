//! Color record and hex color types.

use std::fmt;
use std::str::FromStr;

use crate::file::AnmColorError;

use super::codec::{self, Word};
use super::constants::{RECORD_SIZE, WORD_SIZE};

/// A decoded RGBA color record.
///
/// Channels are stored as `i32` because a decoded float is not guaranteed to
/// fall inside `0..=255`; well-formed files only contain values in that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorRecord {
	/// Red channel
	pub r: i32,
	/// Green channel
	pub g: i32,
	/// Blue channel
	pub b: i32,
	/// Alpha channel
	pub a: i32,
}

impl ColorRecord {
	/// Creates a new color record.
	pub const fn new(r: i32, g: i32, b: i32, a: i32) -> Self {
		Self {
			r,
			g,
			b,
			a,
		}
	}

	/// Decodes a 16-byte on-disk record (R, G, B, A words in that order).
	pub fn from_bytes(bytes: &[u8; RECORD_SIZE]) -> Self {
		let channel = |index: usize| {
			let start = index * WORD_SIZE;
			let mut word: Word = [0u8; WORD_SIZE];
			word.copy_from_slice(&bytes[start..start + WORD_SIZE]);
			codec::decode_channel(word)
		};

		Self {
			r: channel(0),
			g: channel(1),
			b: channel(2),
			a: channel(3),
		}
	}

	/// Encodes the record into its 16-byte on-disk form.
	pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
		let mut bytes = [0u8; RECORD_SIZE];
		for (chunk, value) in bytes.chunks_exact_mut(WORD_SIZE).zip(self.channels()) {
			chunk.copy_from_slice(&codec::encode_channel(value));
		}
		bytes
	}

	/// Returns the channels as `[r, g, b, a]`.
	pub const fn channels(&self) -> [i32; 4] {
		[self.r, self.g, self.b, self.a]
	}

	/// Returns a copy with R, G, B taken from `color` and alpha kept.
	pub fn with_rgb(&self, color: HexColor) -> Self {
		Self {
			r: i32::from(color.r),
			g: i32::from(color.g),
			b: i32::from(color.b),
			a: self.a,
		}
	}
}

impl fmt::Display for ColorRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// The `#rrggbb` projection of a color record's R, G, B channels.
///
/// Always rendered lowercase, so two projections are equal exactly when their
/// strings are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HexColor {
	/// Red component (0-255)
	pub r: u8,
	/// Green component (0-255)
	pub g: u8,
	/// Blue component (0-255)
	pub b: u8,
}

impl HexColor {
	/// Creates a new hex color.
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self {
			r,
			g,
			b,
		}
	}

	/// Parses `#RRGGBB` or `RRGGBB` (either case).
	///
	/// # Errors
	///
	/// Returns [`AnmColorError::InvalidColor`] for any other shape.
	///
	/// # Examples
	///
	/// ```
	/// use anmcolor_types::file::anm::HexColor;
	///
	/// assert_eq!(HexColor::parse("#FF8000").unwrap(), HexColor::new(255, 128, 0));
	/// assert_eq!(HexColor::parse("ff8000").unwrap(), HexColor::new(255, 128, 0));
	/// assert!(HexColor::parse("12x456").is_err());
	/// ```
	pub fn parse(input: &str) -> Result<Self, AnmColorError> {
		let invalid = || AnmColorError::InvalidColor {
			input: input.to_string(),
		};

		let digits = input.strip_prefix('#').unwrap_or(input);
		if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
			return Err(invalid());
		}

		let mut rgb = [0u8; 3];
		hex::decode_to_slice(digits, &mut rgb).map_err(|_| invalid())?;
		Ok(Self::new(rgb[0], rgb[1], rgb[2]))
	}

	/// Returns the components as `[r, g, b]`.
	pub const fn to_array(self) -> [u8; 3] {
		[self.r, self.g, self.b]
	}
}

impl From<&ColorRecord> for HexColor {
	/// Projects R, G, B, clamping each channel to `0..=255`.
	fn from(record: &ColorRecord) -> Self {
		let clamp = |value: i32| value.clamp(0, 255) as u8;
		Self::new(clamp(record.r), clamp(record.g), clamp(record.b))
	}
}

impl From<ColorRecord> for HexColor {
	fn from(record: ColorRecord) -> Self {
		Self::from(&record)
	}
}

impl FromStr for HexColor {
	type Err = AnmColorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for HexColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}
