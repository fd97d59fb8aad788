//! Time-domain chart: reference waveform, reconstructions, sample markers.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use super::{axis_labels, render_empty, SERIES_COLORS};
use crate::scenario::{Trace, TraceKind};

/// Render a set of traces on shared axes.
pub fn render_traces(frame: &mut Frame, area: Rect, title: &str, traces: &[Trace]) {
    if traces.iter().all(|trace| trace.points.is_empty()) {
        render_empty(frame, area, title, "nothing to chart for this study");
        return;
    }

    let block = Block::default().title(title.to_string()).borders(Borders::ALL);

    let datasets: Vec<Dataset> = traces
        .iter()
        .enumerate()
        .map(|(i, trace)| {
            let color = SERIES_COLORS[i % SERIES_COLORS.len()];
            let (marker, graph_type) = match trace.kind {
                TraceKind::Line => (symbols::Marker::Braille, GraphType::Line),
                TraceKind::Points => (symbols::Marker::Dot, GraphType::Scatter),
            };
            Dataset::default()
                .name(trace.name)
                .marker(marker)
                .graph_type(graph_type)
                .style(Style::default().fg(color))
                .data(&trace.points)
        })
        .collect();

    let (x_bounds, y_bounds) = bounds(traces);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds[0], x_bounds[1]))
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds[0], y_bounds[1]))
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}

/// Render the error view, or a placeholder when the study has no error trace.
pub fn render_errors(frame: &mut Frame, area: Rect, traces: &[Trace]) {
    if traces.is_empty() {
        render_empty(frame, area, " Error ", "no error trace for this study");
        return;
    }
    render_traces(frame, area, " Error ", traces);
}

/// Tight bounds across every trace, with a little vertical headroom.
fn bounds(traces: &[Trace]) -> ([f64; 2], [f64; 2]) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for trace in traces {
        for &(x, y) in &trace.points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    let headroom = ((y_max - y_min) * 0.05).max(1e-9);
    ([x_min, x_max], [y_min - headroom, y_max + headroom])
}
