//! `.ANM` color block support.
//!
//! ANM animation files embed RGBA color records used by sprite effects. The
//! records are not indexed anywhere; they are found by scanning for a fixed
//! marker and checking that the word after it is repeated 48 bytes later.
//!
//! # Color Block Layout
//!
//! ```text
//! Offset  Size  Field         Description
//! ------  ----  ------------  ------------------------------------------
//! +0x00   8     marker        02 1C 01 00 00 00 00 00
//! +0x08   16    record        R, G, B, A channel words
//! ...
//! +0x38   16    mirror        Exact copy of the record (+0x08 + 48)
//! ```
//!
//! ## Channel Word (4 bytes)
//!
//! Each channel is an `f32` of which only the top 16 bits are stored, byte
//! swapped and followed by two zero bytes. See [`codec`] for the exact slice.
//!
//! ```text
//! Value  f32 (big-endian)  On disk
//! -----  ----------------  -----------
//! 0      00 00 00 00       00 00 00 00
//! 1      3F 80 00 00       80 3F 00 00
//! 255    43 7F 00 00       7F 43 00 00
//! ```
//!
//! # Usage Examples
//!
//! ## Recoloring a file
//!
//! ```no_run
//! use anmcolor_types::file::anm::ColorSet;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut colors = ColorSet::open("EFFECT.anm")?;
//!
//! for (index, entry) in colors.iter().enumerate() {
//!     println!("{index}: {} at {}", entry.color(), entry.offset());
//! }
//!
//! // Replace every occurrence of the first color
//! colors.set_color(0, "#ff8000", true)?;
//! colors.save_to("EFFECT.anm")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Scanning only
//!
//! ```no_run
//! use anmcolor_types::file::anm::scanner;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! for offset in scanner::scan_file("EFFECT.anm")? {
//!     println!("record at {offset}, mirror at 0x{:08X}", offset.mirror());
//! }
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod color;
pub mod colors;
pub mod constants;
pub mod scanner;
pub mod session;

pub use self::codec::{Endianness, Word};
pub use self::color::{ColorRecord, HexColor};
pub use self::colors::{ColorEntry, ColorSet};
pub use self::scanner::RecordOffset;
pub use self::session::{EditorSettings, Session, SessionState};
