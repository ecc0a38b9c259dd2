//! TUI header panel.

use physicalc_core::UnitSystem;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, units: UnitSystem) {
    let text = vec![Line::from(vec![
        Span::styled("physicalc", Style::default().fg(Color::Cyan)),
        Span::raw(format!(" | units: {}", units.label())),
        Span::raw(" | target physique planner"),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(" physicalc ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
