//! Error types for scanning and editing ANM color records.

use std::path::PathBuf;

use thiserror::Error;

/// Broad category of an [`AnmColorError`].
///
/// Front ends use this to decide how to react: format problems yield an empty
/// or rejected result, validation problems re-prompt the user, I/O problems abort
/// the operation in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
	/// The bytes or hex text do not have the expected shape
	Format,
	/// User supplied input was rejected without touching any state
	Validation,
	/// Opening, reading, seeking or writing the file failed
	Io,
}

impl std::fmt::Display for ErrorClass {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Format => write!(f, "format error"),
			Self::Validation => write!(f, "validation error"),
			Self::Io => write!(f, "I/O error"),
		}
	}
}

/// Errors that can occur when scanning, loading, editing or saving ANM color records
#[derive(Debug, Error)]
pub enum AnmColorError {
	/// Hex text could not be decoded into bytes
	#[error("Invalid hex string: {0}")]
	InvalidHex(#[from] hex::FromHexError),

	/// Hex text decoded to the wrong number of bytes for a word
	#[error("Invalid word length: expected {expected} bytes, got {actual} bytes")]
	InvalidWordLength {
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// The path does not name an `.anm` file
	#[error("Not an .anm file: {}", path.display())]
	NotAnmFile {
		/// Rejected path
		path: PathBuf,
	},

	/// A color string did not match `#RRGGBB` or `RRGGBB`
	#[error("Invalid color {input:?}: expected format #RRGGBB or RRGGBB")]
	InvalidColor {
		/// The rejected input
		input: String,
	},

	/// Color index out of range
	#[error("Color index {index} out of range (total colors: {total})")]
	IndexOutOfRange {
		/// Index that was requested
		index: usize,
		/// Number of colors available
		total: usize,
	},

	/// An edit or save was requested before any file was opened
	#[error("No .anm file is loaded")]
	NoFileLoaded,

	/// File does not exist
	#[error("File not found: {}", path.display())]
	NotFound {
		/// Missing path
		path: PathBuf,
	},

	/// A color record extends past the end of the file
	#[error(
		"Insufficient data at offset 0x{offset:X}: expected {expected} bytes, got {actual} bytes"
	)]
	InsufficientData {
		/// Offset of the record
		offset: u64,
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// Writing a color record back failed
	#[error("Failed to write color record at offset 0x{offset:X}: {source}")]
	WriteFailed {
		/// Offset of the record being written
		offset: u64,
		/// Underlying error
		#[source]
		source: std::io::Error,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

impl AnmColorError {
	/// Returns the category of this error.
	pub fn class(&self) -> ErrorClass {
		match self {
			Self::InvalidHex(_) | Self::InvalidWordLength { .. } | Self::NotAnmFile { .. } => {
				ErrorClass::Format
			}
			Self::InvalidColor { .. } | Self::IndexOutOfRange { .. } | Self::NoFileLoaded => {
				ErrorClass::Validation
			}
			Self::NotFound { .. }
			| Self::InsufficientData { .. }
			| Self::WriteFailed { .. }
			| Self::IOError(_) => ErrorClass::Io,
		}
	}

	/// Maps an error from opening `path`, turning `NotFound` into [`AnmColorError::NotFound`].
	pub(crate) fn from_open(path: &std::path::Path, err: std::io::Error) -> Self {
		if err.kind() == std::io::ErrorKind::NotFound {
			Self::NotFound {
				path: path.to_path_buf(),
			}
		} else {
			Self::IOError(err)
		}
	}
}
