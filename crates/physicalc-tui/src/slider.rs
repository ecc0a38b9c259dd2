//! Continuous-drag slider control.
//!
//! The control is fully controlled: the caller owns the value, the widget
//! holds only transient drag/hover flags. Pointer, wheel, and keyboard
//! input produce *proposals* — already snapped and clamped by the domain
//! config — that the app model applies and re-supplies on the next render.
//! Because crossterm mouse capture is terminal-global, a release outside
//! the widget bounds is still observed and ends the drag.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use physicalc_core::SliderConfig;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Gauge};
use ratatui::Frame;

use crate::keymap::KeyAction;
use crate::styles::ColorTheme;

/// Transient presentational flags. They affect rendering only and carry no
/// data-model consequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct SliderState {
    /// A left-button drag that started on this track is in progress.
    pub dragging: bool,
    /// The pointer is currently over the control.
    pub hovered: bool,
}

/// Inner track columns of a slider rendered in `area` (inside the border).
#[must_use]
pub fn track_rect(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Map a pointer column to a proposed value.
///
/// The track spans `[min, max]` linearly across its width; columns outside
/// the track clamp onto the nearest end, and the leftmost/rightmost cells
/// land exactly on `min`/`max`.
#[must_use]
pub fn value_at_column(config: SliderConfig, track: Rect, column: u16) -> f64 {
    if track.width <= 1 {
        return config.propose(config.min);
    }
    let offset = f64::from(column.saturating_sub(track.x)).min(f64::from(track.width - 1));
    let t = offset / f64::from(track.width - 1);
    config.value_at_ratio(t)
}

/// Interpret a mouse event against a slider rendered in `area`.
///
/// Returns a proposal when the event should change the value: press inside
/// the control proposes immediately, drag keeps proposing while the button
/// is held (wherever the pointer is), wheel over the control moves exactly
/// one step. Release anywhere ends the drag without changing the value.
pub fn handle_mouse(
    config: SliderConfig,
    area: Rect,
    value: f64,
    state: &mut SliderState,
    event: MouseEvent,
) -> Option<f64> {
    let inside = area.contains(Position::new(event.column, event.row));
    state.hovered = inside;
    let track = track_rect(area);

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) if inside => {
            state.dragging = true;
            Some(value_at_column(config, track, event.column))
        }
        MouseEventKind::Drag(MouseButton::Left) if state.dragging => {
            Some(value_at_column(config, track, event.column))
        }
        MouseEventKind::Up(MouseButton::Left) => {
            state.dragging = false;
            None
        }
        MouseEventKind::ScrollUp if inside => Some(config.step_by(value, 1)),
        MouseEventKind::ScrollDown if inside => Some(config.step_by(value, -1)),
        _ => None,
    }
}

/// Interpret a keyboard action for the focused slider. Unrecognized
/// actions are ignored.
#[must_use]
pub fn handle_key(config: SliderConfig, value: f64, action: KeyAction) -> Option<f64> {
    match action {
        KeyAction::Increment => Some(config.step_by(value, 1)),
        KeyAction::Decrement => Some(config.step_by(value, -1)),
        KeyAction::PageIncrement => Some(config.step_by(value, 10)),
        KeyAction::PageDecrement => Some(config.step_by(value, -10)),
        KeyAction::JumpMin => Some(config.propose(config.min)),
        KeyAction::JumpMax => Some(config.propose(config.max)),
        _ => None,
    }
}

/// Render one labeled slider as a gauge-style track.
pub fn render_slider(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    formatted: &str,
    config: SliderConfig,
    value: f64,
    focused: bool,
    state: SliderState,
) {
    let theme = ColorTheme::default();
    let border_style = if focused {
        theme.focus_style()
    } else {
        Style::default().fg(theme.border)
    };
    // Drag and hover restyle the fill only; the value is untouched.
    let fill = if state.dragging {
        Style::default().fg(theme.warning)
    } else if focused || state.hovered {
        Style::default().fg(theme.primary)
    } else {
        Style::default().fg(theme.secondary)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" {label} ")),
        )
        .gauge_style(fill)
        .ratio(config.ratio(value))
        .label(formatted.to_string());

    frame.render_widget(gauge, area);
}
