//! Study scenarios.
//!
//! Every scenario is computed eagerly at startup: traces for the time view,
//! spectra for the frequency view, error traces, and the summary lines that
//! also go to stdout. The message signal is the same three-tone waveform
//! throughout, analyzed over one 20 ms window.

use color_eyre::eyre::Result as EyreResult;

use sigscope_dsp::analysis::{max_abs_error, mean_squared_error, numeric_slope_max};
use sigscope_dsp::dsp::delta::DeltaModulator;
use sigscope_dsp::dsp::hold::{hold_equalized, HoldOrder};
use sigscope_dsp::dsp::quantize::UniformQuantizer;
use sigscope_dsp::dsp::reconstruct::ideal_lowpass;
use sigscope_dsp::dsp::spectrum::{magnitude_spectrum, Spectrum};
use sigscope_dsp::dsp::waveform::{sample_times, MultiTone, Tone};

/// Analysis window in seconds (8 periods of the slowest tone).
pub const WINDOW_SECS: f64 = 0.02;

/// Dense grid rate standing in for continuous time: 50× the highest tone.
pub const DENSE_RATE: f64 = 60_000.0;

/// The three-tone message signal all studies share:
/// `2cos(2π·400t) + cos(2π·800t) − 3sin(2π·1200t)`.
pub fn study_signal() -> MultiTone {
    MultiTone::new(vec![
        Tone::cosine(2.0, 400.0),
        Tone::cosine(1.0, 800.0),
        Tone::sine(-3.0, 1200.0),
    ])
}

/// How a trace is drawn on the chart.
pub enum TraceKind {
    Line,
    Points,
}

/// One named curve on the time or error chart.
pub struct Trace {
    pub name: &'static str,
    pub points: Vec<(f64, f64)>,
    pub kind: TraceKind,
}

impl Trace {
    fn line(name: &'static str, times: &[f64], values: &[f64]) -> Self {
        Self {
            name,
            points: zip_points(times, values),
            kind: TraceKind::Line,
        }
    }

    fn points(name: &'static str, times: &[f64], values: &[f64]) -> Self {
        Self {
            name,
            points: zip_points(times, values),
            kind: TraceKind::Points,
        }
    }
}

fn zip_points(times: &[f64], values: &[f64]) -> Vec<(f64, f64)> {
    times.iter().zip(values).map(|(&t, &v)| (t, v)).collect()
}

/// A spectrum with a chart label.
pub struct NamedSpectrum {
    pub name: &'static str,
    pub spectrum: Spectrum,
}

/// A fully computed study, ready to chart.
pub struct Scenario {
    pub name: &'static str,
    pub summary: Vec<String>,
    pub time_traces: Vec<Trace>,
    pub spectra: Vec<NamedSpectrum>,
    pub error_traces: Vec<Trace>,
}

/// Sampling at 4 kHz: the waveform, its samples, and both spectra.
pub fn sampling_and_spectra() -> EyreResult<Scenario> {
    let signal = study_signal();
    let fs = 4000.0;

    let dense_times = sample_times(WINDOW_SECS, DENSE_RATE);
    let reference = signal.render(&dense_times);
    let sample_grid = sample_times(WINDOW_SECS, fs);
    let samples = signal.render(&sample_grid);

    let reference_spectrum = magnitude_spectrum(&reference, DENSE_RATE)?.band(fs);
    let sampled_spectrum = magnitude_spectrum(&samples, fs)?;

    Ok(Scenario {
        name: "Sampling & spectra",
        summary: vec![
            format!("highest component: {:.0} Hz", signal.max_frequency()),
            format!("Nyquist rate: {:.0} Hz", signal.nyquist_rate()),
            format!("sampling rate: {fs:.0} Hz ({} samples)", samples.len()),
            format!(
                "slope bound: {:.0} units/s (measured {:.0})",
                signal.slope_bound(),
                numeric_slope_max(&reference, DENSE_RATE)
            ),
        ],
        time_traces: vec![
            Trace::line("waveform", &dense_times, &reference),
            Trace::points("samples @ 4 kHz", &sample_grid, &samples),
        ],
        spectra: vec![
            NamedSpectrum {
                name: "waveform",
                spectrum: reference_spectrum,
            },
            NamedSpectrum {
                name: "samples @ 4 kHz",
                spectrum: sampled_spectrum,
            },
        ],
        error_traces: Vec::new(),
    })
}

/// Ideal low-pass reconstruction from 4 kHz samples: error is rounding noise.
pub fn ideal_reconstruction() -> EyreResult<Scenario> {
    reconstruction_study(
        "Ideal reconstruction @ 4 kHz",
        4000.0,
        "4 kHz sits above the 2400 Hz Nyquist rate: alias-free",
    )
}

/// The same reconstruction driven below the Nyquist rate: aliasing.
pub fn aliased_reconstruction() -> EyreResult<Scenario> {
    reconstruction_study(
        "Aliased reconstruction @ 1.5 kHz",
        1500.0,
        "1.5 kHz sits below the 2400 Hz Nyquist rate: the 1200 Hz tone folds to 300 Hz",
    )
}

fn reconstruction_study(
    name: &'static str,
    fs: f64,
    verdict: &str,
) -> EyreResult<Scenario> {
    let signal = study_signal();

    let dense_times = sample_times(WINDOW_SECS, DENSE_RATE);
    let reference = signal.render(&dense_times);
    let sample_grid = sample_times(WINDOW_SECS, fs);
    let samples = signal.render(&sample_grid);

    let rebuilt = ideal_lowpass(&samples, fs, dense_times.len())?;
    let error: Vec<f64> = rebuilt
        .iter()
        .zip(&reference)
        .map(|(&r, &m)| r - m)
        .collect();

    let worst = max_abs_error(&rebuilt, &reference)?;
    let mse = mean_squared_error(&rebuilt, &reference)?;

    Ok(Scenario {
        name,
        summary: vec![
            format!("sampling rate: {fs:.0} Hz ({} samples)", samples.len()),
            format!("max |error|: {worst:.3e}"),
            format!("mean squared error: {mse:.3e}"),
            verdict.to_string(),
        ],
        time_traces: vec![
            Trace::line("waveform", &dense_times, &reference),
            Trace::line("reconstruction", &dense_times, &rebuilt),
            Trace::points("samples", &sample_grid, &samples),
        ],
        spectra: vec![NamedSpectrum {
            name: "samples",
            spectrum: magnitude_spectrum(&samples, fs)?,
        }],
        error_traces: vec![Trace::line("reconstruction − waveform", &dense_times, &error)],
    })
}

/// Delta modulation at 9.6 kHz across three step sizes: overload vs granularity.
pub fn delta_modulation() -> EyreResult<Scenario> {
    let signal = study_signal();
    let fs = 9600.0;

    let grid = sample_times(WINDOW_SECS, fs);
    let samples = signal.render(&grid);
    let slope_bound = signal.slope_bound();

    let mut summary = vec![
        format!("sampling rate: {fs:.0} Hz"),
        format!("signal slope bound: {slope_bound:.0} units/s"),
    ];

    let mut time_traces = vec![Trace::line("waveform @ 9.6 kHz", &grid, &samples)];
    for (name, step) in [
        ("staircase E=0.2", 0.2),
        ("staircase E=1.0", 1.0),
        ("staircase E=0.05", 0.05),
    ] {
        let dm = DeltaModulator::new(step)?;
        let trace = dm.modulate(&samples);
        let tracking = dm.max_tracking_slope(fs);
        summary.push(format!(
            "E={step}: tracking slope {tracking:.0} units/s ({})",
            if tracking < slope_bound {
                "slope overload"
            } else {
                "tracks the signal"
            }
        ));
        time_traces.push(Trace::line(name, &grid, &trace));
    }

    Ok(Scenario {
        name: "Delta modulation",
        summary,
        time_traces,
        spectra: Vec::new(),
        error_traces: Vec::new(),
    })
}

/// Oversampled delta modulation plus low-pass recovery of the message.
pub fn delta_recovery() -> EyreResult<Scenario> {
    let signal = study_signal();
    let fs = 200_000.0;
    let step = 0.2;
    let cutoff = 2000.0;

    let grid = sample_times(WINDOW_SECS, fs);
    let samples = signal.render(&grid);

    let dm = DeltaModulator::new(step)?;
    let staircase = dm.modulate(&samples);
    let recovered = dm.recover(&staircase, fs, cutoff)?;

    let mse = mean_squared_error(&recovered, &samples)?;

    Ok(Scenario {
        name: "Delta modulation recovery",
        summary: vec![
            format!("sampling rate: {fs:.0} Hz, E={step}"),
            format!(
                "tracking slope {:.0} units/s vs signal bound {:.0}: tracks",
                dm.max_tracking_slope(fs),
                signal.slope_bound()
            ),
            format!("recovery low-pass cutoff: {cutoff:.0} Hz"),
            format!("mean squared error after recovery: {mse:.3e}"),
        ],
        time_traces: vec![
            Trace::line("waveform @ 200 kHz", &grid, &samples),
            Trace::line("recovered", &grid, &recovered),
        ],
        spectra: Vec::new(),
        error_traces: Vec::new(),
    })
}

/// Sixteen-level uniform quantization of the 4 kHz samples.
pub fn uniform_quantization() -> EyreResult<Scenario> {
    let signal = study_signal();
    let fs = 4000.0;
    let quantizer = UniformQuantizer::new(16, -6.0, 6.0)?;

    let grid = sample_times(WINDOW_SECS, fs);
    let samples = signal.render(&grid);
    let quantized = quantizer.quantize(&samples);
    let error: Vec<f64> = quantized
        .iter()
        .zip(&samples)
        .map(|(&q, &s)| q - s)
        .collect();

    // Rebuild a dense estimate from the quantized samples; the residual
    // against the true waveform is the quantization noise.
    let dense_times = sample_times(WINDOW_SECS, DENSE_RATE);
    let reference = signal.render(&dense_times);
    let rebuilt = ideal_lowpass(&quantized, fs, dense_times.len())?;
    let recon_mse = mean_squared_error(&rebuilt, &reference)?;

    Ok(Scenario {
        name: "Uniform quantization",
        summary: vec![
            format!("{} levels over [-6, 6]", quantizer.levels()),
            format!("bin width Δ: {:.3}", quantizer.step_size()),
            format!("in-range error bound Δ/2: {:.3}", quantizer.max_error()),
            format!("reconstruction mse vs waveform: {recon_mse:.3e}"),
        ],
        time_traces: vec![
            Trace::line("waveform", &dense_times, &reference),
            Trace::points("samples", &grid, &samples),
            Trace::points("quantized", &grid, &quantized),
        ],
        spectra: vec![NamedSpectrum {
            name: "quantized samples",
            spectrum: magnitude_spectrum(&quantized, fs)?,
        }],
        error_traces: vec![Trace::points("quantized − samples", &grid, &error)],
    })
}

/// Zero- vs first-order hold, both equalized, racing for the lower MSE.
pub fn hold_comparison() -> EyreResult<Scenario> {
    let signal = study_signal();
    let fs = 4000.0;

    let sample_grid = sample_times(WINDOW_SECS, fs);
    let samples = signal.render(&sample_grid);
    let dense_times = sample_times(WINDOW_SECS, DENSE_RATE);
    let reference = signal.render(&dense_times);

    let zero = hold_equalized(&samples, fs, dense_times.len(), HoldOrder::Zero)?;
    let first = hold_equalized(&samples, fs, dense_times.len(), HoldOrder::First)?;

    let zero_mse = mean_squared_error(&zero, &reference)?;
    let first_mse = mean_squared_error(&first, &reference)?;

    let zero_error: Vec<f64> = zero.iter().zip(&reference).map(|(&z, &m)| z - m).collect();
    let first_error: Vec<f64> = first.iter().zip(&reference).map(|(&f, &m)| f - m).collect();

    Ok(Scenario {
        name: "Hold reconstruction + equalizer",
        summary: vec![
            format!("sampling rate: {fs:.0} Hz, equalized band ±{:.0} Hz", fs / 2.0),
            format!("zero-order hold mse: {zero_mse:.3e}"),
            format!("first-order hold mse: {first_mse:.3e}"),
            format!(
                "first-order {} zero-order",
                if first_mse < zero_mse {
                    "beats"
                } else {
                    "does not beat"
                }
            ),
        ],
        time_traces: vec![
            Trace::line("waveform", &dense_times, &reference),
            Trace::line("ZOH + equalizer", &dense_times, &zero),
            Trace::line("FOH + equalizer", &dense_times, &first),
        ],
        spectra: Vec::new(),
        error_traces: vec![
            Trace::line("ZOH error", &dense_times, &zero_error),
            Trace::line("FOH error", &dense_times, &first_error),
        ],
    })
}
