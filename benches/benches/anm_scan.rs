//! Benchmark suite for ANM color block scanning
//!
//! This benchmark measures the marker scan, record decoding and the
//! dual-write save over synthetic files of increasing size.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::{hint::black_box, io::Cursor};

use anmcolor_benches::generate_anm_data;
use anmcolor_types::file::anm::{ColorSet, codec, scanner};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Benchmark scanning files with a growing number of blocks
fn bench_scan(c: &mut Criterion) {
	let mut group = c.benchmark_group("anm_scan");

	for blocks in [16usize, 256, 4096] {
		let data = generate_anm_data(blocks, 256);
		group.throughput(Throughput::Bytes(data.len() as u64));
		group.bench_with_input(BenchmarkId::new("scan", blocks), &data, |b, data| {
			b.iter(|| {
				let mut cursor = Cursor::new(black_box(data.as_slice()));
				black_box(scanner::scan(&mut cursor))
			});
		});
	}

	group.finish();
}

/// Benchmark decoding and re-encoding the records of a scanned file
fn bench_load_save(c: &mut Criterion) {
	let mut group = c.benchmark_group("anm_colors");

	let data = generate_anm_data(1024, 64);
	let offsets = scanner::scan(&mut Cursor::new(data.as_slice())).expect("synthetic data scans");
	group.throughput(Throughput::Elements(offsets.len() as u64));

	group.bench_function("load", |b| {
		b.iter(|| {
			let mut cursor = Cursor::new(black_box(data.as_slice()));
			black_box(ColorSet::load(&mut cursor, &offsets))
		});
	});

	let colors =
		ColorSet::load(&mut Cursor::new(data.as_slice()), &offsets).expect("synthetic data loads");
	group.bench_function("save", |b| {
		b.iter_batched(
			|| Cursor::new(data.clone()),
			|mut cursor| {
				colors.save(&mut cursor).expect("in-memory save");
				black_box(cursor)
			},
			criterion::BatchSize::LargeInput,
		);
	});

	group.finish();
}

/// Benchmark the channel codec on its own
fn bench_codec(c: &mut Criterion) {
	c.bench_function("codec_roundtrip_0_255", |b| {
		b.iter(|| {
			let mut sum = 0i32;
			for value in 0..=255 {
				sum += codec::decode_channel(codec::encode_channel(black_box(value)));
			}
			black_box(sum)
		});
	});
}

criterion_group!(benches, bench_scan, bench_load_save, bench_codec);
criterion_main!(benches);
