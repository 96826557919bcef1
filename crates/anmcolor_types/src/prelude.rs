//! Prelude module for `anmcolor_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use anmcolor_types::prelude::*;
//!
//! let session = Session::new(EditorSettings::new(true));
//! assert!(!session.is_loaded());
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// Errors
	AnmColorError,
	// Color types
	ColorEntry,
	ColorRecord,
	ColorSet,
	// Session types
	EditorSettings,
	ErrorClass,
	HexColor,
	RecordOffset,
	Session,
	SessionState,
};

// Codec and scanner
#[doc(inline)]
pub use crate::file::anm::codec::{Endianness, decode_channel, encode_channel, swap_endianness};

#[doc(inline)]
pub use crate::file::anm::scanner::{scan, scan_file};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
