//! File type support for `anmcolor` project.

mod error;

pub mod anm;

// Re-export unified error type
pub use error::{AnmColorError, ErrorClass};

// Re-export main types
pub use anm::{
	ColorEntry, ColorRecord, ColorSet, EditorSettings, HexColor, RecordOffset, Session,
	SessionState,
};
