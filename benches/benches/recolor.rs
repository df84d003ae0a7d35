//! Benchmark suite for the sprite pipeline
//!
//! Measures slicing, recoloring and script parsing on synthetic sheets.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gbspr_benches::{generate_anim_script, generate_palette_text, generate_sheet};
use gbspr_render::{BandingPolicy, PaletteMapper, slice_frames};
use gbspr_types::{
	file::{Animation, Palette},
	timing::TimingEncoder,
};
use std::hint::black_box;

/// Benchmark recoloring whole sheets with each policy
fn bench_recolor(c: &mut Criterion) {
	let mut group = c.benchmark_group("recolor");
	let palette = Palette::parse(&generate_palette_text());

	for (size, frames) in [(16, 2), (56, 8), (64, 16)] {
		let sheet = generate_sheet(size, frames);
		group.throughput(Throughput::Elements(u64::from(size * size * frames)));

		for policy in [BandingPolicy::TransparentBackground, BandingPolicy::Opaque] {
			let mapper = PaletteMapper::new(palette, policy);
			let id = BenchmarkId::new(format!("{policy:?}"), format!("{size}x{}", size * frames));
			group.bench_with_input(id, &sheet, |b, sheet| {
				b.iter(|| black_box(mapper.apply(black_box(sheet))));
			});
		}
	}

	group.finish();
}

/// Benchmark slicing sheets into frames
fn bench_slice(c: &mut Criterion) {
	let mut group = c.benchmark_group("slice");

	for frames in [1, 8, 32] {
		let sheet = generate_sheet(56, frames);
		group.bench_with_input(BenchmarkId::new("slice_frames", frames), &sheet, |b, sheet| {
			b.iter(|| black_box(slice_frames(black_box(sheet))));
		});
	}

	group.finish();
}

/// Benchmark script parsing and delay encoding
fn bench_timing(c: &mut Criterion) {
	let mut group = c.benchmark_group("timing");
	let script = generate_anim_script(24);
	let encoder = TimingEncoder::new();

	group.bench_function("parse_anim", |b| {
		b.iter(|| black_box(Animation::parse(black_box(&script))));
	});

	let anim = Animation::parse(&script);
	let durations: Vec<f64> = anim.durations_ms().collect();
	group.bench_function("encode_delays", |b| {
		b.iter(|| black_box(encoder.encode(black_box(&durations), durations.len())));
	});

	group.finish();
}

criterion_group!(benches, bench_recolor, bench_slice, bench_timing);
criterion_main!(benches);
