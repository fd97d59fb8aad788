use crate::dsp::fft;
use crate::error::{ensure, Result};

/// Magnitude spectrum on a zero-centered frequency axis.
///
/// `frequencies` runs `-fs/2 … fs/2` with spacing `fs/N`; `magnitudes[i]` is
/// the orthonormal DFT magnitude at `frequencies[i]`. The two vectors always
/// have equal length.
#[derive(Debug, Clone)]
pub struct Spectrum {
    pub frequencies: Vec<f64>,
    pub magnitudes: Vec<f64>,
}

impl Spectrum {
    /// The (frequency, magnitude) pair with the largest magnitude.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.frequencies
            .iter()
            .zip(&self.magnitudes)
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(&f, &m)| (f, m))
    }

    /// Copy of the spectrum restricted to `|f| <= max_abs_frequency`.
    ///
    /// The studies compute dense reference spectra spanning tens of kHz but
    /// only the baseband around the sampled signal is worth charting.
    pub fn band(&self, max_abs_frequency: f64) -> Spectrum {
        let (frequencies, magnitudes) = self
            .frequencies
            .iter()
            .zip(&self.magnitudes)
            .filter(|(&f, _)| f.abs() <= max_abs_frequency)
            .map(|(&f, &m)| (f, m))
            .unzip();
        Spectrum {
            frequencies,
            magnitudes,
        }
    }
}

/// Compute the centered magnitude spectrum of a real sample sequence.
///
/// The transform is scaled by `1/√N` (orthonormal convention) so that
/// magnitudes of different-length sequences stay comparable: a tone of
/// amplitude `a` spanning `N` samples shows up as a pair of lines of height
/// `a·√N/2` regardless of how the energy was windowed. No window function is
/// applied; rectangular truncation at the sequence boundary (and its
/// spectral leakage) is the documented analysis artifact.
pub fn magnitude_spectrum(samples: &[f64], sample_rate: f64) -> Result<Spectrum> {
    ensure(!samples.is_empty(), "empty sample sequence")?;
    ensure(
        sample_rate.is_finite() && sample_rate > 0.0,
        "sample rate must be positive and finite",
    )?;

    let n = samples.len();
    let norm = 1.0 / (n as f64).sqrt();

    let bins = fft::forward(samples);
    let magnitudes = fft::centered(&bins)
        .iter()
        .map(|bin| bin.norm() * norm)
        .collect();
    let frequencies = fft::centered(&fft::bin_frequencies(n, sample_rate));

    Ok(Spectrum {
        frequencies,
        magnitudes,
    })
}
