//! Summary pane: the study's computed scalars as styled text.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the scenario summary lines.
pub fn render_summary(frame: &mut Frame, area: Rect, lines: &[String]) {
    let block = Block::default().title(" Summary ").borders(Borders::ALL);

    let text: Vec<Line> = lines
        .iter()
        .map(|line| Line::styled(format!(" {line}"), Style::default().fg(Color::White)))
        .collect();

    frame.render_widget(Paragraph::new(text).block(block), area);
}
