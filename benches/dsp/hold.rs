//! Benchmarks for hold resampling and equalization.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sigscope_dsp::dsp::hold::{hold_equalized, HoldOrder};
use sigscope_dsp::dsp::waveform::{sample_times, MultiTone, Tone};

use crate::SEQUENCE_LENS;

pub fn bench_hold(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/hold");
    let signal = MultiTone::new(vec![Tone::cosine(2.0, 400.0), Tone::sine(-3.0, 1200.0)]);

    let samples = signal.render(&sample_times(0.02, 4000.0));

    for &target_len in SEQUENCE_LENS {
        group.bench_with_input(
            BenchmarkId::new("zero_order", target_len),
            &target_len,
            |b, &target_len| {
                b.iter(|| {
                    hold_equalized(
                        black_box(&samples),
                        black_box(4000.0),
                        target_len,
                        HoldOrder::Zero,
                    )
                    .unwrap()
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("first_order", target_len),
            &target_len,
            |b, &target_len| {
                b.iter(|| {
                    hold_equalized(
                        black_box(&samples),
                        black_box(4000.0),
                        target_len,
                        HoldOrder::First,
                    )
                    .unwrap()
                })
            },
        );
    }

    group.finish();
}
