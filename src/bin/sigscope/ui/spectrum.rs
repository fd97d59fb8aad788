//! Spectrum chart: magnitude over a zero-centered frequency axis.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use super::{axis_labels, render_empty, SERIES_COLORS};
use crate::scenario::NamedSpectrum;

/// Render one or more magnitude spectra on shared axes.
pub fn render_spectra(frame: &mut Frame, area: Rect, spectra: &[NamedSpectrum]) {
    if spectra.is_empty() {
        render_empty(frame, area, " Spectrum ", "no spectrum for this study");
        return;
    }

    let block = Block::default().title(" Spectrum ").borders(Borders::ALL);

    let data: Vec<Vec<(f64, f64)>> = spectra
        .iter()
        .map(|named| {
            named
                .spectrum
                .frequencies
                .iter()
                .zip(&named.spectrum.magnitudes)
                .map(|(&f, &m)| (f, m))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = data
        .iter()
        .zip(spectra)
        .enumerate()
        .map(|(i, (points, named))| {
            Dataset::default()
                .name(named.name)
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(SERIES_COLORS[i % SERIES_COLORS.len()]))
                .data(points)
        })
        .collect();

    let max_freq = data
        .iter()
        .flatten()
        .map(|&(f, _)| f.abs())
        .fold(1.0, f64::max);
    let max_mag = data
        .iter()
        .flatten()
        .map(|&(_, m)| m)
        .fold(0.0, f64::max);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([-max_freq, max_freq])
                .labels(axis_labels(-max_freq, max_freq))
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, max_mag * 1.1])
                .labels(axis_labels(0.0, max_mag * 1.1))
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
