//! sigscope - application builder and terminal event loop

use std::time::Duration;

use color_eyre::eyre::{eyre, Result as EyreResult};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    DefaultTerminal, Frame,
};

use crate::scenario::Scenario;
use crate::ui::{render_errors, render_spectra, render_summary, render_traces};

/// Main application builder.
pub struct Sigscope {
    scenarios: Vec<Scenario>,
}

impl Sigscope {
    pub fn new() -> Self {
        Self {
            scenarios: Vec::new(),
        }
    }

    /// Register a study to browse.
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenarios.push(scenario);
        self
    }

    /// Print every study's summary, then take over the terminal.
    pub fn run(self) -> EyreResult<()> {
        if self.scenarios.is_empty() {
            return Err(eyre!("no scenarios registered"));
        }

        for scenario in &self.scenarios {
            println!("=== {} ===", scenario.name);
            for line in &scenario.summary {
                println!("  {line}");
            }
            println!();
        }

        let mut terminal = ratatui::init();
        let result = App::new(self.scenarios).run(&mut terminal);
        ratatui::restore();
        result
    }
}

impl Default for Sigscope {
    fn default() -> Self {
        Self::new()
    }
}

/// Which chart the main pane shows.
#[derive(Clone, Copy, PartialEq, Eq)]
enum View {
    Time,
    Spectrum,
    Error,
}

impl View {
    fn next(self) -> Self {
        match self {
            View::Time => View::Spectrum,
            View::Spectrum => View::Error,
            View::Error => View::Time,
        }
    }

    fn label(self) -> &'static str {
        match self {
            View::Time => "time",
            View::Spectrum => "spectrum",
            View::Error => "error",
        }
    }
}

struct App {
    scenarios: Vec<Scenario>,
    selected: usize,
    view: View,
    should_quit: bool,
}

impl App {
    fn new(scenarios: Vec<Scenario>) -> Self {
        Self {
            scenarios,
            selected: 0,
            view: View::Time,
            should_quit: false,
        }
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            // Non-blocking input poll, ~60fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.selected = (self.selected + 1) % self.scenarios.len();
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected = (self.selected + self.scenarios.len() - 1) % self.scenarios.len();
            }
            KeyCode::Tab | KeyCode::Char(' ') => {
                self.view = self.view.next();
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let scenario = &self.scenarios[self.selected];

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header bar
                Constraint::Min(10),   // Chart
                Constraint::Length(8), // Summary
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        self.render_header(frame, chunks[0], scenario);

        match self.view {
            View::Time => render_traces(frame, chunks[1], " Time ", &scenario.time_traces),
            View::Spectrum => render_spectra(frame, chunks[1], &scenario.spectra),
            View::Error => render_errors(frame, chunks[1], &scenario.error_traces),
        }

        render_summary(frame, chunks[2], &scenario.summary);

        let help = Paragraph::new(" [Q] Quit  [←/→] Scenario  [Tab] View")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }

    fn render_header(&self, frame: &mut Frame, area: ratatui::layout::Rect, scenario: &Scenario) {
        let block = Block::default().title(" sigscope ").borders(Borders::ALL);

        let line = Line::from(vec![
            Span::styled(
                format!(" {}  ", scenario.name),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!("[{}/{}]  ", self.selected + 1, self.scenarios.len()),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("view: {}", self.view.label()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}
