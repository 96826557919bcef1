//! Benchmark helper utilities for anmcolor
//!
//! This module provides utilities for generating synthetic ANM data for the
//! scanner and color set benchmarks. Real game files are not required.

use anmcolor_types::file::anm::{ColorRecord, constants};

/// Size of one synthetic color block (marker + record + padding + mirror)
pub const BLOCK_SIZE: usize = 72;

/// Generates a synthetic ANM file containing `blocks` color blocks.
///
/// Blocks are separated by `filler` bytes of non-marker data (rounded up to a
/// multiple of 8 so every marker stays on the scanner's window grid).
pub fn generate_anm_data(blocks: usize, filler: usize) -> Vec<u8> {
	let filler = filler.div_ceil(8) * 8;
	let mut data = Vec::with_capacity(32 + blocks * (BLOCK_SIZE + filler));

	// Header-ish prefix
	data.extend_from_slice(&[0u8; 32]);

	for index in 0..blocks {
		let record = sample_record(index).to_bytes();
		let header = data.len();
		data.resize(header + BLOCK_SIZE, 0);

		// Marker
		data[header..header + 8].copy_from_slice(&constants::MARKER);

		// Record and its mirror 48 bytes later
		data[header + 8..header + 24].copy_from_slice(&record);
		data[header + 56..header + 72].copy_from_slice(&record);

		// Filler that never contains the marker
		data.extend((0..filler).map(|i| (i % 251) as u8 | 0x80));
	}

	data
}

/// Deterministic color for block `index`
pub fn sample_record(index: usize) -> ColorRecord {
	let channel = |shift: usize| ((index * 37 + shift * 91) % 256) as i32;
	ColorRecord::new(channel(0), channel(1), channel(2), 255)
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use anmcolor_types::file::anm::{ColorSet, scanner};

	use super::*;

	#[test]
	fn test_generated_blocks_are_found() {
		let data = generate_anm_data(10, 100);
		let mut cursor = Cursor::new(data);
		let offsets = scanner::scan(&mut cursor).unwrap();
		assert_eq!(offsets.len(), 10);

		let colors = ColorSet::load(&mut cursor, &offsets).unwrap();
		assert_eq!(colors.get(3).unwrap().original(), sample_record(3));
	}
}
