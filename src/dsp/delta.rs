use crate::dsp::filter::SVFilter;
use crate::error::{ensure, Result};

/*
Delta Modulation
================

A delta modulator transmits one bit per sample: "the signal is above my
running estimate" or "below it". The receiver (and this simulation) keeps
the same running estimate `q`, nudging it by a fixed step `E` in the
direction of the error each period:

    e = x[n] − q
    q ← q + E·sign(e)

The estimate can therefore change by at most `E` per sample, i.e. its slope
is bounded by `E·fs`. That single number explains both failure modes the
studies chart:

  slope overload   the true signal's slope exceeds `E·fs`; the staircase
                   saturates into a one-directional ramp and lags behind.

  granular noise   the signal is flat relative to `E`; the staircase
                   oscillates ±E around it instead of settling.

Both are parameter choices, not defects: shrinking `E` trades granular
noise for overload and vice versa, and raising `fs` buys slope headroom.

Sign convention: `sign(0) = 0`, so a zero error holds the accumulator
instead of stepping. `f64::signum` returns ±1 at zero, which would flip the
DC behavior into a forced ±E oscillation; the explicit comparison below
keeps the hold semantics.
*/

/// Fixed-step 1-bit differential modulator.
#[derive(Debug, Clone, Copy)]
pub struct DeltaModulator {
    step: f64,
}

impl DeltaModulator {
    /// `step` is the accumulator increment `E`; it must be positive and
    /// finite.
    pub fn new(step: f64) -> Result<Self> {
        ensure(
            step.is_finite() && step > 0.0,
            "delta modulation step must be positive and finite",
        )?;
        Ok(Self { step })
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Fastest slope the staircase can follow at the given sample rate.
    pub fn max_tracking_slope(&self, sample_rate: f64) -> f64 {
        self.step * sample_rate
    }

    /// Run the modulator over a sample sequence and return the accumulator
    /// trace. The accumulator seeds from the first sample; each later input
    /// moves it by `±step` (or holds it on zero error). Output length equals
    /// input length; an empty input produces an empty trace.
    pub fn modulate(&self, samples: &[f64]) -> Vec<f64> {
        let Some((&first, rest)) = samples.split_first() else {
            return Vec::new();
        };

        let step = self.step;
        std::iter::once(first)
            .chain(rest.iter().scan(first, move |accumulator, &sample| {
                *accumulator += step * sign(sample - *accumulator);
                Some(*accumulator)
            }))
            .collect()
    }

    /// Recover the message from a staircase trace by low-pass smoothing.
    ///
    /// The cutoff sits above the message band and well below the sample
    /// rate, so the ±step granularity is averaged out while the message
    /// passes through.
    pub fn recover(&self, trace: &[f64], sample_rate: f64, cutoff_hz: f64) -> Result<Vec<f64>> {
        ensure(!trace.is_empty(), "empty staircase trace")?;
        ensure(
            sample_rate.is_finite() && sample_rate > 0.0,
            "sample rate must be positive and finite",
        )?;
        ensure(
            cutoff_hz.is_finite() && cutoff_hz > 0.0 && cutoff_hz < sample_rate / 2.0,
            "recovery cutoff must sit below the Nyquist frequency",
        )?;

        let mut smoothed = trace.to_vec();
        let mut filter = SVFilter::lowpass(cutoff_hz);
        filter.render(&mut smoothed, sample_rate);
        Ok(smoothed)
    }
}

fn sign(error: f64) -> f64 {
    if error > 0.0 {
        1.0
    } else if error < 0.0 {
        -1.0
    } else {
        0.0
    }
}
