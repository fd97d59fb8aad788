//! Chart widgets for the study browser.
//!
//! Each widget is a free render function taking a frame and an area, fed
//! directly from the precomputed scenario data.

mod spectrum;
mod summary;
mod waveform;

pub use spectrum::render_spectra;
pub use summary::render_summary;
pub use waveform::{render_errors, render_traces};

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Series colors, cycled in dataset order.
pub(crate) const SERIES_COLORS: &[Color] = &[
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
    Color::Green,
    Color::Red,
    Color::Blue,
];

/// Placeholder pane for views a scenario doesn't populate.
pub(crate) fn render_empty(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let block = Block::default().title(title.to_string()).borders(Borders::ALL);
    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Three tick labels (low, mid, high) for an axis span.
pub(crate) fn axis_labels(min: f64, max: f64) -> Vec<String> {
    let mid = (min + max) / 2.0;
    [min, mid, max].iter().map(|v| format_tick(*v)).collect()
}

fn format_tick(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1000.0 {
        format!("{:.1}k", value / 1000.0)
    } else if value.abs() >= 1.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.3}")
    }
}
