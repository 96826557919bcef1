//! Color block scanner.
//!
//! Walks an ANM file in 8-byte windows looking for [`MARKER`]. When a window
//! contains the marker the scanner compares the word right after it with the
//! word 48 bytes further on; the format mirrors every color record at that
//! distance, so a match means a color record starts at the first word.
//!
//! ```text
//! H+0    marker window (8 bytes)
//! H+8    current word            <- reported RecordOffset
//! H+56   mirrored check word     (H+8 + 48)
//! H+64   scanning resumes here
//! ```
//!
//! Windows are not re-aligned around a match: a marker that does not sit on
//! the 8-byte grid the scanner is walking is not seen. This is the only
//! validation the format offers, so incidental matches are possible in
//! arbitrary data.

use std::{
	fmt,
	fs,
	io::{Cursor, Read, Seek, SeekFrom},
	path::Path,
};

use log::{debug, trace};

use crate::file::AnmColorError;

use super::codec;
use super::constants::{
	MARKER, MIRROR_DISTANCE, MIRROR_GAP, RECORD_BACKTRACK, RESUME_SKIP, WINDOW_SIZE, WORD_SIZE,
};

/// Byte offset of a 16-byte color record inside an ANM file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordOffset(u64);

impl RecordOffset {
	/// Wraps a raw byte offset.
	pub const fn new(offset: u64) -> Self {
		Self(offset)
	}

	/// Returns the raw byte offset.
	pub const fn get(self) -> u64 {
		self.0
	}

	/// Offset of the mirrored copy of this record.
	pub const fn mirror(self) -> u64 {
		self.0 + MIRROR_DISTANCE
	}
}

impl fmt::Display for RecordOffset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "0x{:08X}", self.0)
	}
}

/// Returns `true` if `window` contains the color block marker.
pub fn contains_marker(window: &[u8]) -> bool {
	window.windows(MARKER.len()).any(|candidate| candidate == MARKER)
}

/// Scans `reader` from its start and returns every color record offset in file order.
///
/// # Errors
///
/// Propagates any read or seek error from `reader`. Running out of data is not
/// an error; it ends the scan.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
///
/// use anmcolor_types::file::anm::scanner::scan;
///
/// let mut data = vec![0u8; 64];
/// data[..8].copy_from_slice(&[0x02, 0x1C, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00]);
/// data[8..12].copy_from_slice(&[0x7F, 0x43, 0x00, 0x00]);
/// data[56..60].copy_from_slice(&[0x7F, 0x43, 0x00, 0x00]);
///
/// let offsets = scan(&mut Cursor::new(data)).unwrap();
/// assert_eq!(offsets.len(), 1);
/// assert_eq!(offsets[0].get(), 8);
/// ```
pub fn scan<R: Read + Seek>(reader: &mut R) -> Result<Vec<RecordOffset>, AnmColorError> {
	reader.seek(SeekFrom::Start(0))?;

	let mut offsets = Vec::new();
	let mut window = [0u8; WINDOW_SIZE];

	loop {
		if read_up_to(reader, &mut window)? < WINDOW_SIZE {
			break;
		}

		if !contains_marker(&window) {
			continue;
		}

		let mut current = [0u8; WORD_SIZE];
		let current_len = read_up_to(reader, &mut current)?;
		reader.seek(SeekFrom::Current(MIRROR_GAP))?;
		let mut next = [0u8; WORD_SIZE];
		let next_len = read_up_to(reader, &mut next)?;

		let position = reader.stream_position()?;
		if current_len == WORD_SIZE && next_len == WORD_SIZE && current == next {
			let offset = RecordOffset::new(position - RECORD_BACKTRACK);
			trace!("Color block at {offset} (word {})", codec::word_to_hex(current));
			offsets.push(offset);
		} else {
			trace!("Marker without mirrored word before 0x{position:08X}");
		}

		reader.seek(SeekFrom::Current(RESUME_SKIP))?;
	}

	debug!("Scan found {} color blocks", offsets.len());
	Ok(offsets)
}

/// Scans the file at `path` for color record offsets.
///
/// The file is read into memory in one go and scanned from there; the scan
/// seeks on every marker, which would throw away a buffered reader's buffer.
///
/// # Errors
///
/// Returns [`AnmColorError::NotFound`] if the file does not exist, or an I/O
/// error if it cannot be read.
pub fn scan_file(path: impl AsRef<Path>) -> Result<Vec<RecordOffset>, AnmColorError> {
	let path = path.as_ref();
	let data = fs::read(path).map_err(|err| AnmColorError::from_open(path, err))?;
	scan(&mut Cursor::new(data))
}

/// Fills as much of `buf` as the reader can provide and returns the byte count.
///
/// A count below `buf.len()` means end of data was reached.
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
	let mut filled = 0;
	while filled < buf.len() {
		match reader.read(&mut buf[filled..]) {
			Ok(0) => break,
			Ok(n) => filled += n,
			Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {}
			Err(err) => return Err(err),
		}
	}
	Ok(filled)
}
