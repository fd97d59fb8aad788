//! Benchmarks for ideal low-pass reconstruction.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sigscope_dsp::dsp::reconstruct::ideal_lowpass;
use sigscope_dsp::dsp::waveform::{sample_times, MultiTone, Tone};

use crate::SEQUENCE_LENS;

pub fn bench_reconstruct(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/reconstruct");
    let signal = MultiTone::new(vec![Tone::cosine(2.0, 400.0), Tone::sine(-3.0, 1200.0)]);

    // Rebuild a fixed 80-sample capture onto denser and denser grids.
    let samples = signal.render(&sample_times(0.02, 4000.0));

    for &target_len in SEQUENCE_LENS {
        group.bench_with_input(
            BenchmarkId::new("ideal_lowpass", target_len),
            &target_len,
            |b, &target_len| {
                b.iter(|| {
                    ideal_lowpass(black_box(&samples), black_box(4000.0), target_len).unwrap()
                })
            },
        );
    }

    group.finish();
}
