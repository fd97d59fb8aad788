use crate::error::{ensure, Result};

/// Uniform quantizer mapping samples to the midpoints of `levels` equal-width
/// bins spanning `[v_min, v_max]`.
///
/// Out-of-range samples saturate to the nearest edge bin rather than failing:
/// quantization is a total function once the quantizer itself is valid. For
/// in-range input the error `quantized − original` is bounded by half a bin
/// width, and re-quantizing a quantized sequence returns it unchanged (every
/// output already sits on a midpoint).
#[derive(Debug, Clone, Copy)]
pub struct UniformQuantizer {
    levels: usize,
    v_min: f64,
    v_max: f64,
}

impl UniformQuantizer {
    pub fn new(levels: usize, v_min: f64, v_max: f64) -> Result<Self> {
        ensure(levels >= 1, "quantizer needs at least one level")?;
        ensure(
            v_min.is_finite() && v_max.is_finite() && v_max > v_min,
            "quantizer range must be a finite, non-empty interval",
        )?;
        Ok(Self {
            levels,
            v_min,
            v_max,
        })
    }

    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Bin width Δ = (v_max − v_min) / levels.
    pub fn step_size(&self) -> f64 {
        (self.v_max - self.v_min) / self.levels as f64
    }

    /// Worst-case |quantized − original| for in-range input: Δ/2.
    pub fn max_error(&self) -> f64 {
        self.step_size() / 2.0
    }

    /// Quantize one sample to its bin midpoint, saturating outside the range.
    pub fn quantize_sample(&self, sample: f64) -> f64 {
        let delta = self.step_size();
        let index = ((sample - self.v_min) / delta)
            .floor()
            .clamp(0.0, (self.levels - 1) as f64);
        self.v_min + (index + 0.5) * delta
    }

    /// Quantize a whole sequence.
    pub fn quantize(&self, samples: &[f64]) -> Vec<f64> {
        samples
            .iter()
            .map(|&sample| self.quantize_sample(sample))
            .collect()
    }

    /// The reconstruction levels, lowest bin first.
    pub fn midpoints(&self) -> Vec<f64> {
        let delta = self.step_size();
        (0..self.levels)
            .map(|index| self.v_min + (index as f64 + 0.5) * delta)
            .collect()
    }
}
