use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rustfft::num_complex::Complex;

use crate::dsp::fft;
use crate::error::{ensure, Result};

/*
Hold Reconstruction and Equalization
====================================

A digital-to-analog stage doesn't emit ideal impulses; it holds. The two
classic hold circuits, and what they do to the spectrum:

  zero-order (ZOH)   hold each sample flat for one period. Staircase output;
                     frequency response sinc(f·Ts) with a half-period delay.

  first-order (FOH)  ramp linearly from the previous sample to the current
                     one over each period. Piecewise-linear output; response
                     sinc²(f·Ts) with a full-period delay.

Both responses droop toward the band edge, so the held signal is duller than
the original. The equalizer inverts the droop inside the reconstruction band
(an inverse-sinc filter) and forces everything outside the band to zero. A
small epsilon keeps the division finite at the sinc nulls.

The responses here are normalized to unity gain at DC: the textbook Ts gain
of the continuous-time hold cancels against the 1/Ts of ideal impulse
sampling, and what must survive equalization is the signal's own amplitude.

Both holds are realized causally, so the delay terms in the responses are
physically present in the resampled traces and the equalizer's phase
compensation re-aligns the output with the reference. The analysis window is
treated as one signal period (the same assumption the DFT makes), so the
first-order ramp into sample 0 comes from the last sample of the window.
*/

/// Additive guard against division by zero at the sinc nulls.
const EQUALIZER_EPSILON: f64 = 1e-9;

/// Which hold circuit to model.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldOrder {
    Zero,
    First,
}

fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        (PI * x).sin() / (PI * x)
    }
}

/// Frequency response of the hold at `frequency_hz`, for sample period
/// `sample_period` seconds, normalized to unity DC gain.
pub fn hold_response(frequency_hz: f64, sample_period: f64, order: HoldOrder) -> Complex<f64> {
    let ft = frequency_hz * sample_period;
    match order {
        HoldOrder::Zero => Complex::from_polar(sinc(ft), -PI * ft),
        HoldOrder::First => Complex::from_polar(sinc(ft) * sinc(ft), -2.0 * PI * ft),
    }
}

/// Resample a sequence onto a dense grid of `target_len` points spanning the
/// same window, using the chosen hold.
pub fn hold_resample(
    samples: &[f64],
    sample_rate: f64,
    target_len: usize,
    order: HoldOrder,
) -> Result<Vec<f64>> {
    ensure(!samples.is_empty(), "empty sample sequence")?;
    ensure(
        sample_rate.is_finite() && sample_rate > 0.0,
        "sample rate must be positive and finite",
    )?;
    ensure(target_len > 0, "target grid must not be empty")?;

    let n = samples.len();
    let dense = (0..target_len)
        .map(|m| {
            // Position of this dense point in units of the source period.
            let pos = m as f64 * n as f64 / target_len as f64;
            let interval = (pos.floor() as usize).min(n - 1);
            match order {
                HoldOrder::Zero => samples[interval],
                HoldOrder::First => {
                    let frac = pos - pos.floor();
                    let from = samples[(interval + n - 1) % n];
                    let to = samples[interval];
                    from + (to - from) * frac
                }
            }
        })
        .collect();
    Ok(dense)
}

/// Undo the hold's droop: divide the dense signal's spectrum by the hold
/// response inside `|f| <= source_rate/2`, zero everything outside, and
/// return to the time domain.
pub fn equalize(
    held: &[f64],
    target_rate: f64,
    source_rate: f64,
    order: HoldOrder,
) -> Result<Vec<f64>> {
    ensure(!held.is_empty(), "empty sample sequence")?;
    ensure(
        target_rate.is_finite() && target_rate > 0.0,
        "target rate must be positive and finite",
    )?;
    ensure(
        source_rate.is_finite() && source_rate > 0.0,
        "source rate must be positive and finite",
    )?;

    let sample_period = 1.0 / source_rate;
    let band = source_rate / 2.0;

    let mut spectrum = fft::forward(held);
    let frequencies = fft::bin_frequencies(held.len(), target_rate);
    for (bin, &frequency) in spectrum.iter_mut().zip(&frequencies) {
        if frequency.abs() <= band {
            *bin /= hold_response(frequency, sample_period, order) + EQUALIZER_EPSILON;
        } else {
            *bin = Complex::new(0.0, 0.0);
        }
    }

    Ok(fft::inverse(spectrum).into_iter().map(|bin| bin.re).collect())
}

/// Hold-resample then equalize in one step.
pub fn hold_equalized(
    samples: &[f64],
    sample_rate: f64,
    target_len: usize,
    order: HoldOrder,
) -> Result<Vec<f64>> {
    let held = hold_resample(samples, sample_rate, target_len, order)?;
    let target_rate = sample_rate * target_len as f64 / samples.len() as f64;
    equalize(&held, target_rate, sample_rate, order)
}
