//! Discrete Fourier transform plumbing shared by the spectral stages.
//!
//! rustfft leaves scaling to the caller: the forward transform here is
//! unnormalized and the inverse divides by `N`, so `inverse(forward(x))`
//! round-trips. Stages that need other conventions (the orthonormal `1/√N`
//! of the spectrum view, the length-ratio rescale of reconstruction) apply
//! their own factor on top.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Unnormalized forward DFT of a real sequence.
pub(crate) fn forward(samples: &[f64]) -> Vec<Complex<f64>> {
    let mut buffer: Vec<Complex<f64>> = samples
        .iter()
        .map(|&sample| Complex::new(sample, 0.0))
        .collect();
    FftPlanner::new()
        .plan_fft_forward(buffer.len())
        .process(&mut buffer);
    buffer
}

/// Inverse DFT scaled by `1/N`.
pub(crate) fn inverse(mut spectrum: Vec<Complex<f64>>) -> Vec<Complex<f64>> {
    let n = spectrum.len();
    FftPlanner::new()
        .plan_fft_inverse(n)
        .process(&mut spectrum);
    let scale = 1.0 / n as f64;
    for bin in spectrum.iter_mut() {
        *bin *= scale;
    }
    spectrum
}

/// Frequency of each DFT bin in natural (unshifted) order: non-negative
/// frequencies first, then the negative half. Spacing is `sample_rate/len`.
pub(crate) fn bin_frequencies(len: usize, sample_rate: f64) -> Vec<f64> {
    let step = sample_rate / len as f64;
    let positive_bins = (len as i64 - 1) / 2;
    (0..len as i64)
        .map(|k| {
            let folded = if k <= positive_bins { k } else { k - len as i64 };
            folded as f64 * step
        })
        .collect()
}

/// Reorder bins so zero frequency sits in the middle of the axis.
pub(crate) fn centered<T: Copy>(bins: &[T]) -> Vec<T> {
    let split = bins.len().div_ceil(2);
    bins[split..]
        .iter()
        .chain(bins[..split].iter())
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_inverse_round_trip() {
        let samples = [1.0, -0.5, 0.25, 2.0, -1.0, 0.0];
        let restored = inverse(forward(&samples));
        for (&original, bin) in samples.iter().zip(restored) {
            assert!((bin.re - original).abs() < 1e-12);
            assert!(bin.im.abs() < 1e-12);
        }
    }

    #[test]
    fn bin_frequencies_fold_at_nyquist() {
        // Even length: [0, 1, 2, -3, -2, -1] · fs/N
        let freqs = bin_frequencies(6, 6000.0);
        assert_eq!(freqs, vec![0.0, 1000.0, 2000.0, -3000.0, -2000.0, -1000.0]);

        // Odd length: [0, 1, 2, -2, -1] · fs/N
        let freqs = bin_frequencies(5, 5000.0);
        assert_eq!(freqs, vec![0.0, 1000.0, 2000.0, -2000.0, -1000.0]);
    }

    #[test]
    fn centered_puts_zero_in_the_middle() {
        let shifted = centered(&bin_frequencies(6, 6000.0));
        assert_eq!(
            shifted,
            vec![-3000.0, -2000.0, -1000.0, 0.0, 1000.0, 2000.0]
        );

        let shifted = centered(&bin_frequencies(5, 5000.0));
        assert_eq!(shifted, vec![-2000.0, -1000.0, 0.0, 1000.0, 2000.0]);
    }
}
