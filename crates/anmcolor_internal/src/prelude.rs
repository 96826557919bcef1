//! Prelude module for `anmcolor_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use anmcolor_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let session = Session::new(EditorSettings::default());
//! assert!(session.list_colors().is_empty());
//!
//! // Work with colors
//! let color: HexColor = "#ff8000".parse().unwrap();
//! assert_eq!(color.to_string(), "#ff8000");
//! ```

// Re-export everything from anmcolor_types::prelude
#[doc(inline)]
pub use anmcolor_types::prelude::*;

// Re-export the entire anmcolor_types module for advanced usage
#[doc(inline)]
pub use anmcolor_types;
