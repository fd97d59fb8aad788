//! Report scalars computed from analysis traces.
//!
//! Everything a study prints at the end lives here: error figures between a
//! rebuilt trace and its reference, least-squares calibration fits, and the
//! full-scale/sensitivity numbers quoted for measured characteristics.

use crate::error::{ensure, Result};

/// Largest pointwise |a − b| between two equal-length traces.
pub fn max_abs_error(a: &[f64], b: &[f64]) -> Result<f64> {
    ensure(!a.is_empty(), "empty sample sequence")?;
    ensure(a.len() == b.len(), "traces must have equal length")?;
    Ok(a.iter()
        .zip(b)
        .map(|(&x, &y)| (x - y).abs())
        .fold(0.0, f64::max))
}

/// Mean squared pointwise error between two equal-length traces.
pub fn mean_squared_error(a: &[f64], b: &[f64]) -> Result<f64> {
    ensure(!a.is_empty(), "empty sample sequence")?;
    ensure(a.len() == b.len(), "traces must have equal length")?;
    let sum: f64 = a.iter().zip(b).map(|(&x, &y)| (x - y) * (x - y)).sum();
    Ok(sum / a.len() as f64)
}

/// Largest slope magnitude observed between adjacent samples, in units per
/// second. Traces shorter than two samples have no slope.
pub fn numeric_slope_max(samples: &[f64], sample_rate: f64) -> f64 {
    samples
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).abs() * sample_rate)
        .fold(0.0, f64::max)
}

/// Least-squares line through a set of (x, y) points.
#[derive(Debug, Clone, Copy)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

impl LinearFit {
    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit `y = slope·x + intercept` by least squares.
pub fn linear_regression(x: &[f64], y: &[f64]) -> Result<LinearFit> {
    ensure(x.len() == y.len(), "traces must have equal length")?;
    ensure(x.len() >= 2, "regression needs at least two points")?;

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        cov += (xi - mean_x) * (yi - mean_y);
        var_x += (xi - mean_x) * (xi - mean_x);
        var_y += (yi - mean_y) * (yi - mean_y);
    }
    ensure(var_x > 0.0, "regression x values must not be constant")?;

    let slope = cov / var_x;
    let intercept = mean_y - slope * mean_x;
    // A constant y is fit exactly by the flat line.
    let r_squared = if var_y > 0.0 {
        (cov * cov) / (var_x * var_y)
    } else {
        1.0
    };

    Ok(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}

/// Fit only the points whose x lies inside `[range.0, range.1]`. Measured
/// characteristics are usually linear over a stated span and saturate
/// outside it.
pub fn linear_regression_in_range(x: &[f64], y: &[f64], range: (f64, f64)) -> Result<LinearFit> {
    ensure(x.len() == y.len(), "traces must have equal length")?;
    let (xs, ys): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y)
        .filter(|(&xi, _)| xi >= range.0 && xi <= range.1)
        .map(|(&xi, &yi)| (xi, yi))
        .unzip();
    linear_regression(&xs, &ys)
}

/// Full-scale characterization of a calibration sweep.
#[derive(Debug, Clone, Copy)]
pub struct FullScale {
    /// Full-scale input: the last (largest) stimulus applied.
    pub input: f64,
    /// Full-scale output: the response at the full-scale input.
    pub output: f64,
    /// Output per unit input over the full span.
    pub sensitivity: f64,
}

/// Compute FSI, FSO, and sensitivity from a calibration sweep. The sweep is
/// taken in stimulus order; the last pair defines full scale.
pub fn full_scale(inputs: &[f64], outputs: &[f64]) -> Result<FullScale> {
    ensure(!inputs.is_empty(), "empty calibration sweep")?;
    ensure(
        inputs.len() == outputs.len(),
        "traces must have equal length",
    )?;
    let input = *inputs.last().unwrap();
    let output = *outputs.last().unwrap();
    ensure(input != 0.0, "full-scale input must be nonzero")?;
    Ok(FullScale {
        input,
        output,
        sensitivity: output / input,
    })
}

/// Worst loading/unloading disagreement in a hysteresis sweep.
#[derive(Debug, Clone, Copy)]
pub struct Hysteresis {
    /// Largest |loading − unloading| gap.
    pub worst_gap: f64,
    /// Sweep index where the worst gap occurs.
    pub at_index: usize,
}

pub fn max_hysteresis(loading: &[f64], unloading: &[f64]) -> Result<Hysteresis> {
    ensure(!loading.is_empty(), "empty calibration sweep")?;
    ensure(
        loading.len() == unloading.len(),
        "traces must have equal length",
    )?;
    let (at_index, worst_gap) = loading
        .iter()
        .zip(unloading)
        .map(|(&a, &b)| (a - b).abs())
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap();
    Ok(Hysteresis { worst_gap, at_index })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_figures_match_hand_computation() {
        let a = [1.0, 2.0, 3.0];
        let b = [1.5, 2.0, 1.0];

        assert_eq!(max_abs_error(&a, &b).unwrap(), 2.0);
        // (0.25 + 0 + 4) / 3
        assert!((mean_squared_error(&a, &b).unwrap() - 4.25 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn error_figures_reject_mismatched_lengths() {
        assert!(max_abs_error(&[1.0], &[1.0, 2.0]).is_err());
        assert!(mean_squared_error(&[], &[]).is_err());
    }

    #[test]
    fn numeric_slope_uses_adjacent_differences() {
        // Steps of 2 at 100 Hz → 200 per second.
        let samples = [0.0, 2.0, 4.0, 4.0];
        assert_eq!(numeric_slope_max(&samples, 100.0), 200.0);
        assert_eq!(numeric_slope_max(&[1.0], 100.0), 0.0);
    }

    #[test]
    fn exact_line_is_recovered() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y: Vec<f64> = x.iter().map(|&xi| 2.5 * xi - 1.0).collect();

        let fit = linear_regression(&x, &y).unwrap();
        assert!((fit.slope - 2.5).abs() < 1e-12);
        assert!((fit.intercept + 1.0).abs() < 1e-12);
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
        assert!((fit.evaluate(10.0) - 24.0).abs() < 1e-12);
    }

    #[test]
    fn range_restriction_ignores_saturated_points() {
        // Linear up to x=3, saturated beyond.
        let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [0.0, 2.0, 4.0, 6.0, 6.5, 6.5];

        let unrestricted = linear_regression(&x, &y).unwrap();
        let restricted = linear_regression_in_range(&x, &y, (0.0, 3.0)).unwrap();

        assert!((restricted.slope - 2.0).abs() < 1e-12);
        assert!(restricted.r_squared > unrestricted.r_squared);
    }

    #[test]
    fn full_scale_reads_the_sweep_endpoint() {
        let strain = [0.0, 1200.0, 2400.0, 3600.0];
        let volts = [0.0, 2.8, 5.6, 8.42];

        let fs = full_scale(&strain, &volts).unwrap();
        assert_eq!(fs.input, 3600.0);
        assert_eq!(fs.output, 8.42);
        assert!((fs.sensitivity - 8.42 / 3600.0).abs() < 1e-12);
    }

    #[test]
    fn hysteresis_finds_the_worst_gap() {
        let loading = [0.0, 2.0, 4.0, 6.0];
        let unloading = [0.1, 1.5, 3.9, 6.0];

        let h = max_hysteresis(&loading, &unloading).unwrap();
        assert_eq!(h.at_index, 1);
        assert!((h.worst_gap - 0.5).abs() < 1e-12);
    }

    #[test]
    fn constant_x_is_rejected() {
        assert!(linear_regression(&[1.0, 1.0, 1.0], &[0.0, 1.0, 2.0]).is_err());
    }
}
