//! Benchmarks for magnitude spectrum computation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sigscope_dsp::dsp::spectrum::magnitude_spectrum;
use sigscope_dsp::dsp::waveform::{sample_times, MultiTone, Tone};

use crate::SEQUENCE_LENS;

pub fn bench_spectrum(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/spectrum");
    let signal = MultiTone::new(vec![Tone::cosine(2.0, 400.0), Tone::sine(-3.0, 1200.0)]);

    for &len in SEQUENCE_LENS {
        let rate = len as f64 / 0.02;
        let samples = signal.render(&sample_times(0.02, rate));

        group.bench_with_input(BenchmarkId::new("magnitude", len), &len, |b, _| {
            b.iter(|| magnitude_spectrum(black_box(&samples), black_box(rate)).unwrap())
        });
    }

    group.finish();
}
