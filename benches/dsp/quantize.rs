//! Benchmarks for uniform quantization.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sigscope_dsp::dsp::quantize::UniformQuantizer;
use sigscope_dsp::dsp::waveform::{sample_times, MultiTone, Tone};

use crate::SEQUENCE_LENS;

pub fn bench_quantize(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/quantize");
    let signal = MultiTone::new(vec![Tone::cosine(2.0, 400.0), Tone::sine(-3.0, 1200.0)]);
    let quantizer = UniformQuantizer::new(16, -6.0, 6.0).unwrap();

    for &len in SEQUENCE_LENS {
        let samples = signal.render(&sample_times(0.02, len as f64 / 0.02));

        group.bench_with_input(BenchmarkId::new("quantize", len), &len, |b, _| {
            b.iter(|| quantizer.quantize(black_box(&samples)))
        });
    }

    group.finish();
}
