use std::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Multi-Tone Test Signals
=======================

The studies all run against a message signal built as a plain sum of
sinusoids, e.g.

    m(t) = 2cos(2π·400t) + cos(2π·800t) − 3sin(2π·1200t)

Keeping the components explicit (instead of baking one formula in) buys two
things: the same type describes every signal a study needs, and the analytic
figures the reports quote fall out of the component list directly:

  max_frequency   highest component frequency; ×2 gives the Nyquist rate
  slope_bound     Σ |aᵢ|·2πfᵢ. The derivative of each term is bounded by
                  |a|·2πf, so the sum bounds the slope of the whole waveform.
                  Delta-modulation overload analysis compares this against
                  the modulator's step·rate tracking slope.

Evaluation is pointwise and pure: a waveform never owns a grid, it is handed
one. The same `MultiTone` renders the dense "continuous" reference and every
coarser sampled run.
*/

/// Phase convention for a single tone.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TonePhase {
    Cosine,
    Sine,
}

/// One sinusoidal component, `amplitude·cos(2πft)` or `amplitude·sin(2πft)`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct Tone {
    pub amplitude: f64,
    pub frequency_hz: f64,
    pub phase: TonePhase,
}

impl Tone {
    pub fn cosine(amplitude: f64, frequency_hz: f64) -> Self {
        Self {
            amplitude,
            frequency_hz,
            phase: TonePhase::Cosine,
        }
    }

    pub fn sine(amplitude: f64, frequency_hz: f64) -> Self {
        Self {
            amplitude,
            frequency_hz,
            phase: TonePhase::Sine,
        }
    }

    fn evaluate(&self, t: f64) -> f64 {
        let angle = TAU * self.frequency_hz * t;
        match self.phase {
            TonePhase::Cosine => self.amplitude * angle.cos(),
            TonePhase::Sine => self.amplitude * angle.sin(),
        }
    }
}

/// A sum of sinusoids evaluated pointwise on arbitrary time grids.
#[derive(Debug, Clone)]
pub struct MultiTone {
    tones: Vec<Tone>,
}

impl MultiTone {
    /// An empty component list is allowed and evaluates to zero everywhere.
    pub fn new(tones: Vec<Tone>) -> Self {
        Self { tones }
    }

    pub fn tones(&self) -> &[Tone] {
        &self.tones
    }

    /// Evaluate the waveform at a single instant. Pure, total.
    pub fn evaluate(&self, t: f64) -> f64 {
        self.tones.iter().map(|tone| tone.evaluate(t)).sum()
    }

    /// Evaluate the waveform on each point of a time grid.
    pub fn render(&self, times: &[f64]) -> Vec<f64> {
        times.iter().map(|&t| self.evaluate(t)).collect()
    }

    /// Highest component frequency in Hz (zero for an empty list).
    pub fn max_frequency(&self) -> f64 {
        self.tones
            .iter()
            .fold(0.0, |acc, tone| acc.max(tone.frequency_hz.abs()))
    }

    /// Minimum alias-free sampling rate: twice the highest component.
    pub fn nyquist_rate(&self) -> f64 {
        2.0 * self.max_frequency()
    }

    /// Analytic bound on |dm/dt|: Σ |aᵢ|·2πfᵢ.
    pub fn slope_bound(&self) -> f64 {
        self.tones
            .iter()
            .map(|tone| tone.amplitude.abs() * TAU * tone.frequency_hz.abs())
            .sum()
    }
}

/// Uniform time grid covering `[0, duration)`.
///
/// The point count is `round(duration·rate)`, so the grid stops one period
/// short of `duration`; grids built from the same duration stay aligned to
/// a shared window regardless of rate. Non-positive durations or rates
/// produce an empty grid.
pub fn sample_times(duration: f64, rate: f64) -> Vec<f64> {
    if !(duration > 0.0) || !(rate > 0.0) || !duration.is_finite() || !rate.is_finite() {
        return Vec::new();
    }

    let count = (duration * rate).round() as usize;
    let period = 1.0 / rate;
    (0..count).map(|n| n as f64 * period).collect()
}
