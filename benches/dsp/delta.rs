//! Benchmarks for delta modulation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sigscope_dsp::dsp::delta::DeltaModulator;
use sigscope_dsp::dsp::waveform::{sample_times, MultiTone, Tone};

use crate::SEQUENCE_LENS;

pub fn bench_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/delta");
    let signal = MultiTone::new(vec![Tone::cosine(2.0, 400.0), Tone::sine(-3.0, 1200.0)]);
    let dm = DeltaModulator::new(0.2).unwrap();

    for &len in SEQUENCE_LENS {
        let rate = len as f64 / 0.02;
        let samples = signal.render(&sample_times(0.02, rate));

        group.bench_with_input(BenchmarkId::new("modulate", len), &len, |b, _| {
            b.iter(|| dm.modulate(black_box(&samples)))
        });

        let trace = dm.modulate(&samples);
        group.bench_with_input(BenchmarkId::new("recover", len), &len, |b, _| {
            b.iter(|| {
                dm.recover(black_box(&trace), black_box(rate), black_box(rate / 8.0))
                    .unwrap()
            })
        });
    }

    group.finish();
}
