//! ANM color block constants.
//!
//! Offsets and sizes of the color block layout, and the marker that
//! identifies a color block header.

/// Marker preceding every color block header
pub const MARKER: [u8; 8] = [0x02, 0x1C, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00];

/// Size of each scan window (8 bytes)
pub const WINDOW_SIZE: usize = 8;

/// Size of a channel word (4 bytes)
pub const WORD_SIZE: usize = 4;

/// Number of channels in a color record (R, G, B, A)
pub const CHANNEL_COUNT: usize = 4;

/// Size of a color record (16 bytes = 4 channel words)
pub const RECORD_SIZE: usize = WORD_SIZE * CHANNEL_COUNT;

/// Distance between a color record and its mirrored copy (48 bytes)
pub const MIRROR_DISTANCE: u64 = 48;

/// Bytes skipped between the current word and the mirrored check word (44 bytes)
pub const MIRROR_GAP: i64 = 44;

/// Bytes skipped after the mirrored check word before scanning resumes
pub const RESUME_SKIP: i64 = 4;

/// Distance from the stream position after the check word back to the record start (52 bytes)
pub const RECORD_BACKTRACK: u64 = 52;
