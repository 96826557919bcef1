//! This crate provides the core types of the `anmcolor` project: locating,
//! decoding and re-encoding the color records embedded in `.anm` animation files.
//!
//! # Components
//!
//! - **Codec**: channel word <-> integer conversion, including the format's
//!   16-bit float narrowing and byte swapping
//! - **Scanner**: marker + mirrored-word search producing record offsets
//! - **`ColorSet`**: decoded, editable colors with dual-write saving
//! - **Session**: `Empty`/`Loaded` state machine used by front ends
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use anmcolor_types::prelude::*;
//!
//! # fn main() -> Result<(), AnmColorError> {
//! let mut session = Session::new(EditorSettings::default());
//! session.open("EFFECT.anm")?;
//! for color in session.list_colors() {
//!     println!("{color}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use anmcolor_types::file::anm::{ColorSet, scanner};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let offsets = scanner::scan_file("EFFECT.anm")?;
//! let colors = ColorSet::open("EFFECT.anm")?;
//! assert_eq!(offsets, colors.offsets());
//! # Ok(())
//! # }
//! ```

pub mod file;

/// `use anmcolor_types::prelude::*;` to import commonly used items.
pub mod prelude;
