//! Editable set of color records loaded from an ANM file.
//!
//! A [`ColorSet`] keeps, for every scanned record, its offset, the record as
//! decoded from disk and the current `#rrggbb` value. Edits only ever touch the
//! current value; saving re-encodes R, G, B from it and takes alpha from the
//! decoded record, then writes the 16 bytes twice (at the offset and 48 bytes
//! later).

use std::{
	fs::{self, OpenOptions},
	io::{Cursor, Read, Seek, SeekFrom, Write},
	path::Path,
};

use log::{debug, info, warn};

use crate::file::AnmColorError;

use super::{
	codec,
	color::{ColorRecord, HexColor},
	constants::{RECORD_SIZE, WORD_SIZE},
	scanner::{self, RecordOffset},
};

/// One color record of a [`ColorSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorEntry {
	offset: RecordOffset,
	original: ColorRecord,
	color: HexColor,
}

impl ColorEntry {
	/// Creates an entry whose current color is the projection of `original`.
	pub fn new(offset: RecordOffset, original: ColorRecord) -> Self {
		Self {
			offset,
			original,
			color: HexColor::from(&original),
		}
	}

	/// Offset of the primary copy of this record
	pub fn offset(&self) -> RecordOffset {
		self.offset
	}

	/// The record as decoded from the file
	pub fn original(&self) -> ColorRecord {
		self.original
	}

	/// The current (possibly edited) color
	pub fn color(&self) -> HexColor {
		self.color
	}

	/// Returns `true` if the current color differs from the decoded one.
	pub fn is_modified(&self) -> bool {
		self.color != HexColor::from(&self.original)
	}

	/// The record that will be written on save.
	///
	/// Alpha always comes from the decoded record.
	pub fn record(&self) -> ColorRecord {
		self.original.with_rgb(self.color)
	}
}

/// Ordered, editable set of color records.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
///
/// use anmcolor_types::file::anm::{ColorRecord, ColorSet, HexColor, scanner};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let record = ColorRecord::new(255, 0, 0, 255).to_bytes();
/// let mut data = vec![0u8; 64];
/// data[..8].copy_from_slice(&[0x02, 0x1C, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00]);
/// data[8..24].copy_from_slice(&record);
/// data[56..64].copy_from_slice(&record[..8]);
/// data.extend_from_slice(&record[8..]);
///
/// let mut cursor = Cursor::new(data);
/// let offsets = scanner::scan(&mut cursor)?;
/// let mut colors = ColorSet::load(&mut cursor, &offsets)?;
/// assert_eq!(colors.hex_colors(), vec![HexColor::new(255, 0, 0)]);
///
/// colors.set_color(0, "#00ff00", false)?;
/// colors.save(&mut cursor)?;
///
/// let reloaded = ColorSet::load(&mut cursor, &offsets)?;
/// assert_eq!(reloaded.hex_colors(), vec![HexColor::new(0, 255, 0)]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorSet {
	entries: Vec<ColorEntry>,
}

impl ColorSet {
	/// Creates an empty color set.
	pub fn new() -> Self {
		Self {
			entries: Vec::new(),
		}
	}

	/// Scans and loads the file at `path`.
	///
	/// A file without any color block yields an empty set.
	///
	/// # Errors
	///
	/// Returns [`AnmColorError::NotFound`] if the file does not exist, or an I/O
	/// error if it cannot be read.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, AnmColorError> {
		let path = path.as_ref();
		let data = fs::read(path).map_err(|err| AnmColorError::from_open(path, err))?;
		let mut reader = Cursor::new(data);

		let offsets = scanner::scan(&mut reader)?;
		if offsets.is_empty() {
			warn!("No color blocks found in {}", path.display());
		}

		let colors = Self::load(&mut reader, &offsets)?;
		info!("Loaded {} colors from {}", colors.len(), path.display());
		Ok(colors)
	}

	/// Decodes the records at `offsets` from `reader`.
	///
	/// # Errors
	///
	/// Returns [`AnmColorError::InsufficientData`] if a record runs past the end
	/// of the data, or any read/seek error.
	pub fn load<R: Read + Seek>(
		reader: &mut R,
		offsets: &[RecordOffset],
	) -> Result<Self, AnmColorError> {
		let mut entries = Vec::with_capacity(offsets.len());

		for &offset in offsets {
			reader.seek(SeekFrom::Start(offset.get()))?;
			let bytes = read_record(reader, offset)?;
			let record = ColorRecord::from_bytes(&bytes);
			debug!("Color {record} detected at {offset}");
			entries.push(ColorEntry::new(offset, record));
		}

		Ok(Self {
			entries,
		})
	}

	/// Number of colors
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if no colors were loaded.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Gets an entry by index
	pub fn get(&self, index: usize) -> Option<&ColorEntry> {
		self.entries.get(index)
	}

	/// Returns all entries in file order
	pub fn entries(&self) -> &[ColorEntry] {
		&self.entries
	}

	/// Iterates over entries in file order
	pub fn iter(&self) -> std::slice::Iter<'_, ColorEntry> {
		self.entries.iter()
	}

	/// Record offsets in file order
	pub fn offsets(&self) -> Vec<RecordOffset> {
		self.entries.iter().map(ColorEntry::offset).collect()
	}

	/// Current colors in file order.
	pub fn hex_colors(&self) -> Vec<HexColor> {
		self.entries.iter().map(ColorEntry::color).collect()
	}

	/// Number of entries whose color differs from the decoded one
	pub fn modified_count(&self) -> usize {
		self.entries.iter().filter(|entry| entry.is_modified()).count()
	}

	/// Parses `input` and applies it to the color at `index`.
	///
	/// With `propagate`, every color equal to the target's color before the edit
	/// is changed as well. Returns the number of entries updated.
	///
	/// # Errors
	///
	/// Returns [`AnmColorError::InvalidColor`] if `input` is not `#RRGGBB` or
	/// `RRGGBB`, or [`AnmColorError::IndexOutOfRange`]. The set is left unchanged
	/// on error.
	pub fn set_color(
		&mut self,
		index: usize,
		input: &str,
		propagate: bool,
	) -> Result<usize, AnmColorError> {
		let color = HexColor::parse(input)?;
		self.set_hex_color(index, color, propagate)
	}

	/// Applies an already parsed color to the entry at `index`.
	///
	/// See [`ColorSet::set_color`].
	pub fn set_hex_color(
		&mut self,
		index: usize,
		color: HexColor,
		propagate: bool,
	) -> Result<usize, AnmColorError> {
		let total = self.entries.len();
		let previous = self
			.entries
			.get(index)
			.map(ColorEntry::color)
			.ok_or(AnmColorError::IndexOutOfRange {
				index,
				total,
			})?;

		if !propagate {
			self.entries[index].color = color;
			return Ok(1);
		}

		let mut updated = 0;
		for entry in self.entries.iter_mut().filter(|entry| entry.color == previous) {
			entry.color = color;
			updated += 1;
		}
		debug!("Replaced {previous} with {color} in {updated} records");
		Ok(updated)
	}

	/// Writes every record back to `writer`, twice.
	///
	/// Records are written one by one in file order; a failure leaves earlier
	/// records written.
	///
	/// # Errors
	///
	/// Returns [`AnmColorError::WriteFailed`] naming the offset being written.
	pub fn save<W: Write + Seek>(&self, writer: &mut W) -> Result<(), AnmColorError> {
		for entry in &self.entries {
			let offset = entry.offset();
			let bytes = entry.record().to_bytes();

			write_record_at(writer, offset.get(), &bytes)
				.and_then(|()| write_record_at(writer, offset.mirror(), &bytes))
				.map_err(|source| AnmColorError::WriteFailed {
					offset: offset.get(),
					source,
				})?;

			let words: Vec<String> =
				bytes.chunks_exact(WORD_SIZE).map(codec::word_to_hex).collect();
			debug!("Saving color {} at {offset} ({})", entry.color(), words.join(" "));
		}

		writer.flush()?;
		Ok(())
	}

	/// Writes every record back into the existing file at `path`.
	///
	/// The file is opened for reading and writing; it is never created or truncated.
	///
	/// # Errors
	///
	/// Returns [`AnmColorError::NotFound`] if the file does not exist, otherwise
	/// see [`ColorSet::save`].
	pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), AnmColorError> {
		let path = path.as_ref();
		let mut file = OpenOptions::new()
			.read(true)
			.write(true)
			.open(path)
			.map_err(|err| AnmColorError::from_open(path, err))?;

		self.save(&mut file)?;
		info!("Saved {} colors to {}", self.len(), path.display());
		Ok(())
	}
}

impl<'a> IntoIterator for &'a ColorSet {
	type Item = &'a ColorEntry;
	type IntoIter = std::slice::Iter<'a, ColorEntry>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

fn read_record<R: Read>(
	reader: &mut R,
	offset: RecordOffset,
) -> Result<[u8; RECORD_SIZE], AnmColorError> {
	let mut bytes = [0u8; RECORD_SIZE];
	let mut filled = 0;
	while filled < RECORD_SIZE {
		match reader.read(&mut bytes[filled..]) {
			Ok(0) => {
				return Err(AnmColorError::InsufficientData {
					offset: offset.get(),
					expected: RECORD_SIZE,
					actual: filled,
				});
			}
			Ok(n) => filled += n,
			Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {}
			Err(err) => return Err(err.into()),
		}
	}
	Ok(bytes)
}

fn write_record_at<W: Write + Seek>(
	writer: &mut W,
	position: u64,
	bytes: &[u8; RECORD_SIZE],
) -> std::io::Result<()> {
	writer.seek(SeekFrom::Start(position))?;
	writer.write_all(bytes)
}
