use std::f64::consts::TAU;

/*
| type              | constructed by       | passes          | rejects      |
| ----------------- | -------------------- | --------------- | ------------ |
| low-pass          | lowpass              | below cutoff    | above cutoff |
| high-pass         | highpass             | above cutoff    | below cutoff |
| band-pass         | bandpass             | around cutoff   | elsewhere    |
| notch / band-stop | notch                | elsewhere       | around cutoff|
*/

#[derive(Debug, Clone, Copy)]
pub enum FilterType {
    LowPass,
    HighPass,
    BandPass,
    Notch,
}

pub struct FilterOutputs {
    pub lowpass: f64,
    pub bandpass: f64,
    pub highpass: f64,
    pub notch: f64,
}

/// Second-order state-variable filter over offline sample blocks.
///
/// The delta-modulation recovery stage uses the low-pass tap to smooth the
/// ±E staircase back into the message band; the other taps come along for
/// free from the same two integrators.
pub struct SVFilter {
    ic1eq: f64, // First integrator's memory
    ic2eq: f64, // Second integrator's memory

    pub cutoff_hz: f64,
    pub resonance: f64,
    filter_type: FilterType,
}

impl SVFilter {
    pub fn new(filter_type: FilterType) -> Self {
        Self {
            ic1eq: 0.0,
            ic2eq: 0.0,
            cutoff_hz: 1000.0,
            resonance: 0.0,
            filter_type,
        }
    }

    pub fn lowpass(cutoff_hz: f64) -> Self {
        Self {
            cutoff_hz,
            ..Self::new(FilterType::LowPass)
        }
    }

    pub fn highpass(cutoff_hz: f64) -> Self {
        Self {
            cutoff_hz,
            ..Self::new(FilterType::HighPass)
        }
    }

    pub fn bandpass(cutoff_hz: f64) -> Self {
        Self {
            cutoff_hz,
            ..Self::new(FilterType::BandPass)
        }
    }

    pub fn notch(cutoff_hz: f64) -> Self {
        Self {
            cutoff_hz,
            ..Self::new(FilterType::Notch)
        }
    }

    #[inline]
    fn compute_g(&self, sample_rate: f64) -> f64 {
        // Bilinear prewarp so the digital cutoff lands on the analog one.
        let wd = TAU * self.cutoff_hz;
        let wa = (2.0 * sample_rate) * (wd / (2.0 * sample_rate)).tan();
        wa / (2.0 * sample_rate)
    }

    pub fn next_sample(&mut self, sample: f64, k: f64, g: f64) -> FilterOutputs {
        let h = 1.0 / (1.0 + g * (g + k));
        let v3 = sample - self.ic2eq;
        let v1 = h * (self.ic1eq + g * v3);
        let v2 = self.ic2eq + g * v1;

        self.ic1eq = 2.0 * v1 - self.ic1eq;
        self.ic2eq = 2.0 * v2 - self.ic2eq;

        FilterOutputs {
            lowpass: v2,
            bandpass: v1,
            highpass: sample - k * v1 - v2,
            notch: sample - k * v1,
        }
    }

    /// Filter a block in place at the given sample rate.
    pub fn render(&mut self, buffer: &mut [f64], sample_rate: f64) {
        let g = self.compute_g(sample_rate);
        let k = 2.0 - (2.0 * self.resonance);

        for sample in buffer.iter_mut() {
            let outputs = self.next_sample(*sample, k, g);

            *sample = match self.filter_type {
                FilterType::LowPass => outputs.lowpass,
                FilterType::HighPass => outputs.highpass,
                FilterType::BandPass => outputs.bandpass,
                FilterType::Notch => outputs.notch,
            }
        }
    }

    pub fn reset(&mut self) {
        self.ic1eq = 0.0;
        self.ic2eq = 0.0;
    }

    pub fn set_cutoff(&mut self, cutoff: f64) {
        self.cutoff_hz = cutoff;
    }

    pub fn set_resonance(&mut self, resonance: f64) {
        self.resonance = resonance;
    }
}
