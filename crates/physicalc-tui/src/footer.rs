//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let text = vec![Line::from(vec![
        Span::styled("tab", Style::default().fg(Color::Yellow)),
        Span::raw(": focus | "),
        Span::styled("\u{2190}/\u{2192}", Style::default().fg(Color::Yellow)),
        Span::raw(": adjust | "),
        Span::styled("pgup/pgdn", Style::default().fg(Color::Yellow)),
        Span::raw(": \u{b1}10 | "),
        Span::styled("home/end", Style::default().fg(Color::Yellow)),
        Span::raw(": min/max | "),
        Span::styled("u", Style::default().fg(Color::Yellow)),
        Span::raw(": units | "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(": quit"),
    ])];

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
