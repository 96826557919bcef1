//! This module is separated into its own crate to keep the front end decoupled from `anmcolor_types`, and should not be used directly.

/// `use anmcolor::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export anmcolor_types for convenience
pub use anmcolor_types;

// Re-export commonly used types at crate root
pub use anmcolor_types::file::{
	AnmColorError, ColorRecord, ColorSet, EditorSettings, ErrorClass, HexColor, RecordOffset,
	Session, SessionState,
};
