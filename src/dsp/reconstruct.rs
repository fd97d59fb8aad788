use rustfft::num_complex::Complex;

use crate::dsp::fft;
use crate::error::{ensure, Result};

/*
Ideal Low-Pass Reconstruction
=============================

Rebuilds a dense estimate of the waveform behind a sampled sequence by
treating the analysis window as one period and interpolating in the
frequency domain:

  1. Forward-transform the N samples.
  2. Lay the bins into a `target_len`-point spectrum at the slots holding the
     same physical frequency. Both grids span the same window, so both have
     bin spacing `1/T` and the slots line up exactly. Every target bin above
     the samples' Nyquist frequency `sample_rate/2` stays zero: the ideal
     low-pass brick wall. On a shared window that cutoff falls on bin N/2
     whatever the numeric rate, which is why only the two grid lengths enter
     the bin arithmetic below.
  3. Inverse-transform and rescale by `target_len/N` to compensate for the
     transform-length change; the imaginary residue is floating-point noise
     and is dropped.

For a sequence sampled at or above twice the waveform's bandwidth this
reproduces the waveform on the dense grid up to rounding. Below that rate the
folded (aliased) components are reconstructed instead; the aliasing studies
chart exactly that failure.
*/

/// Reconstruct `samples` onto a dense grid of `target_len` points spanning
/// the same window.
pub fn ideal_lowpass(samples: &[f64], sample_rate: f64, target_len: usize) -> Result<Vec<f64>> {
    ensure(!samples.is_empty(), "empty sample sequence")?;
    ensure(
        sample_rate.is_finite() && sample_rate > 0.0,
        "sample rate must be positive and finite",
    )?;
    ensure(target_len > 0, "target grid must not be empty")?;

    let n = samples.len();
    let source = fft::forward(samples);
    let mut padded = vec![Complex::new(0.0, 0.0); target_len];

    // Bins that survive the move; fewer than N only when the target grid is
    // the coarser one.
    let kept = n.min(target_len);
    let half = (kept - 1) / 2;

    padded[0] = source[0];
    for k in 1..=half {
        padded[k] = source[k];
        padded[target_len - k] = source[n - k];
    }
    if kept % 2 == 0 {
        // The shared Nyquist bin: when the spectrum grows it splits evenly
        // between the +fs/2 and -fs/2 slots, keeping the output real.
        let k = kept / 2;
        if target_len == kept {
            padded[k] = source[k];
        } else {
            padded[k] = source[k] * 0.5;
            padded[target_len - k] = source[k] * 0.5;
        }
    }

    let rescale = target_len as f64 / n as f64;
    let dense = fft::inverse(padded);
    Ok(dense.into_iter().map(|bin| bin.re * rescale).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::waveform::{sample_times, MultiTone, Tone};

    #[test]
    fn same_length_round_trips() {
        let samples = [1.0, -2.0, 0.5, 3.0, -0.25, 0.0, 1.5, -1.0];
        let rebuilt = ideal_lowpass(&samples, 4000.0, samples.len()).unwrap();
        for (&original, dense) in samples.iter().zip(rebuilt) {
            assert!((original - dense).abs() < 1e-12);
        }
    }

    #[test]
    fn tone_sampled_above_nyquist_is_recovered_densely() {
        let signal = MultiTone::new(vec![Tone::cosine(1.5, 300.0)]);
        let duration = 0.01;

        let coarse = signal.render(&sample_times(duration, 1000.0));
        let dense_times = sample_times(duration, 16_000.0);
        let rebuilt = ideal_lowpass(&coarse, 1000.0, dense_times.len()).unwrap();

        for (&t, &value) in dense_times.iter().zip(&rebuilt) {
            let reference = signal.evaluate(t);
            assert!(
                (value - reference).abs() < 1e-9,
                "at t={t}: rebuilt {value}, reference {reference}"
            );
        }
    }

    #[test]
    fn tone_sampled_below_nyquist_comes_back_folded() {
        // 1200 Hz sampled at 1500 Hz folds to 300 Hz; the reconstruction
        // is a clean 300 Hz tone, far from the original.
        let signal = MultiTone::new(vec![Tone::cosine(1.0, 1200.0)]);
        let duration = 0.02;

        let coarse = signal.render(&sample_times(duration, 1500.0));
        let dense_times = sample_times(duration, 30_000.0);
        let rebuilt = ideal_lowpass(&coarse, 1500.0, dense_times.len()).unwrap();

        let folded = MultiTone::new(vec![Tone::cosine(1.0, 300.0)]);
        let mut worst_vs_original = 0.0f64;
        for (i, &t) in dense_times.iter().enumerate() {
            let against_folded = (rebuilt[i] - folded.evaluate(t)).abs();
            assert!(
                against_folded < 1e-9,
                "at t={t}: expected the 300 Hz alias, off by {against_folded}"
            );
            worst_vs_original = worst_vs_original.max((rebuilt[i] - signal.evaluate(t)).abs());
        }
        assert!(
            worst_vs_original > 0.1,
            "aliased reconstruction should visibly miss the original, worst error {worst_vs_original}"
        );
    }

    #[test]
    fn rejects_degenerate_input() {
        assert!(ideal_lowpass(&[], 4000.0, 100).is_err());
        assert!(ideal_lowpass(&[1.0], 0.0, 100).is_err());
        assert!(ideal_lowpass(&[1.0], 4000.0, 0).is_err());
    }
}
