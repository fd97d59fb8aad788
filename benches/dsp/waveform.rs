//! Benchmarks for multi-tone waveform evaluation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sigscope_dsp::dsp::waveform::{sample_times, MultiTone, Tone};

use crate::SEQUENCE_LENS;

fn three_tone() -> MultiTone {
    MultiTone::new(vec![
        Tone::cosine(2.0, 400.0),
        Tone::cosine(1.0, 800.0),
        Tone::sine(-3.0, 1200.0),
    ])
}

pub fn bench_waveform(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/waveform");
    let signal = three_tone();

    for &len in SEQUENCE_LENS {
        let times = sample_times(0.02, len as f64 / 0.02);

        group.bench_with_input(BenchmarkId::new("render", len), &len, |b, _| {
            b.iter(|| signal.render(black_box(&times)))
        });
    }

    group.finish();
}
