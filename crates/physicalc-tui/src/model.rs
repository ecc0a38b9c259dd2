//! TUI application model (Elm architecture).
//!
//! `PlannerApp` is the single source of truth for the three inputs; slider
//! widgets only propose values, which the model normalizes and applies
//! before the next render.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, MouseEvent, MouseEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event::DisableMouseCapture, event::EnableMouseCapture, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use physicalc_core::constants::{BODY_FAT, NORMALIZED_FFMI};
use physicalc_core::units::{cm_to_inches, convert_height, inches_to_cm};
use physicalc_core::{compute_target_physique, PhysiqueResult, SliderConfig, UnitSystem};

use crate::footer::render_footer;
use crate::format::{format_body_fat, format_ffmi, format_height};
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::results::render_results;
use crate::slider::{self, SliderState};

/// Number of input sliders: height, body fat, FFMI.
pub const SLIDER_COUNT: usize = 3;

/// Panel rectangles for one frame, derived purely from the terminal area
/// so mouse routing and rendering always agree.
#[derive(Debug, Clone, Copy)]
pub struct PanelLayout {
    pub header: Rect,
    pub sliders: [Rect; SLIDER_COUNT],
    pub results: Rect,
    pub footer: Rect,
}

/// TUI application state (Elm Model).
pub struct PlannerApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Active display unit system.
    pub units: UnitSystem,
    /// Canonical height in centimeters.
    pub height_cm: f64,
    /// Target body-fat percentage.
    pub body_fat_pct: f64,
    /// Target normalized FFMI.
    pub ffmi: f64,
    /// Which slider has keyboard focus (0 height, 1 body fat, 2 FFMI).
    pub focused: usize,
    /// Presentational drag/hover flags per slider.
    pub sliders: [SliderState; SLIDER_COUNT],
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
}

impl PlannerApp {
    /// Create a new app. `height` is given in the display unit of `units`;
    /// all inputs are normalized onto their grids.
    #[must_use]
    pub fn new(units: UnitSystem, height: f64, body_fat_pct: f64, ffmi: f64) -> Self {
        let display_height = units.height_domain().propose(height);
        let height_cm = match units {
            UnitSystem::Metric => display_height,
            UnitSystem::Imperial => inches_to_cm(display_height),
        };
        Self {
            should_quit: false,
            units,
            height_cm,
            body_fat_pct: BODY_FAT.propose(body_fat_pct),
            ffmi: NORMALIZED_FFMI.propose(ffmi),
            focused: 0,
            sliders: [SliderState::default(); SLIDER_COUNT],
            terminal_width: 80,
            terminal_height: 24,
        }
    }

    /// Height in the active display unit, snapped onto that unit's grid.
    #[must_use]
    pub fn height_display(&self) -> f64 {
        match self.units {
            UnitSystem::Metric => self.units.height_domain().propose(self.height_cm),
            UnitSystem::Imperial => self
                .units
                .height_domain()
                .propose(cm_to_inches(self.height_cm)),
        }
    }

    /// Domain config for slider `index`.
    #[must_use]
    pub fn slider_config(&self, index: usize) -> SliderConfig {
        match index {
            0 => self.units.height_domain(),
            1 => BODY_FAT,
            _ => NORMALIZED_FFMI,
        }
    }

    /// Current value of slider `index`, in its own domain.
    #[must_use]
    pub fn slider_value(&self, index: usize) -> f64 {
        match index {
            0 => self.height_display(),
            1 => self.body_fat_pct,
            _ => self.ffmi,
        }
    }

    /// Apply an accepted proposal to slider `index`. Proposals arrive
    /// already snapped and clamped.
    pub fn apply(&mut self, index: usize, value: f64) {
        match index {
            0 => {
                self.height_cm = match self.units {
                    UnitSystem::Metric => value,
                    UnitSystem::Imperial => inches_to_cm(value),
                };
            }
            1 => self.body_fat_pct = value,
            _ => self.ffmi = value,
        }
    }

    /// Switch unit systems, carrying the height across: convert, snap to
    /// the target grid, clamp to the target range.
    pub fn toggle_units(&mut self) {
        let from = self.units;
        let to = from.toggled();
        let display = convert_height(self.height_display(), from, to);
        self.units = to;
        self.apply(0, display);
        tracing::debug!(units = to.label(), "unit system toggled");
    }

    /// Recompute the physique result from the current inputs.
    #[must_use]
    pub fn result(&self) -> PhysiqueResult {
        compute_target_physique(self.height_cm, self.body_fat_pct, self.ffmi)
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::ToggleUnits => {
                self.toggle_units();
            }
            KeyAction::FocusNext => {
                self.focused = (self.focused + 1) % SLIDER_COUNT;
            }
            KeyAction::FocusPrev => {
                self.focused = (self.focused + SLIDER_COUNT - 1) % SLIDER_COUNT;
            }
            _ => {
                let config = self.slider_config(self.focused);
                let value = self.slider_value(self.focused);
                if let Some(proposal) = slider::handle_key(config, value, action) {
                    self.apply(self.focused, proposal);
                }
            }
        }
    }

    /// Route a mouse event to the sliders. Each slider decides for itself
    /// based on containment and its own drag flag, so an active drag keeps
    /// the pointer until release wherever it goes.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        let layout = Self::compute_layout(Rect::new(
            0,
            0,
            self.terminal_width,
            self.terminal_height,
        ));
        for index in 0..SLIDER_COUNT {
            let config = self.slider_config(index);
            let value = self.slider_value(index);
            let proposal = slider::handle_mouse(
                config,
                layout.sliders[index],
                value,
                &mut self.sliders[index],
                event,
            );
            if let Some(value) = proposal {
                self.apply(index, value);
                if matches!(event.kind, MouseEventKind::Down(_)) {
                    self.focused = index;
                }
            }
        }
    }

    /// Compute the frame layout: header, three slider rows, results panel,
    /// footer.
    #[must_use]
    pub fn compute_layout(area: Rect) -> PanelLayout {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Length(3), // height slider
                Constraint::Length(3), // body-fat slider
                Constraint::Length(3), // FFMI slider
                Constraint::Min(7),    // results
                Constraint::Length(2), // footer
            ])
            .split(area);

        PanelLayout {
            header: outer[0],
            sliders: [outer[1], outer[2], outer[3]],
            results: outer[4],
            footer: outer[5],
        }
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let layout = Self::compute_layout(frame.area());

        render_header(frame, layout.header, self.units);

        let labels = ["Height", "Body Fat", "Target FFMI"];
        let formatted = [
            format_height(self.height_display(), self.units),
            format_body_fat(self.body_fat_pct),
            format_ffmi(self.ffmi),
        ];
        for index in 0..SLIDER_COUNT {
            slider::render_slider(
                frame,
                layout.sliders[index],
                labels[index],
                &formatted[index],
                self.slider_config(index),
                self.slider_value(index),
                self.focused == index,
                self.sliders[index],
            );
        }

        render_results(frame, layout.results, &self.result(), self.ffmi, self.units);
        render_footer(frame, layout.footer);
    }

    /// Set up the terminal for TUI mode.
    ///
    /// Returns a configured Terminal or an error.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop: draw, poll, update, repeat. Single-threaded
    /// and synchronous; every handler runs to completion before the next
    /// event is read.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let size = terminal.size()?;
        self.terminal_width = size.width;
        self.terminal_height = size.height;

        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key_event) => {
                        let action = map_key(key_event);
                        self.handle_key_action(action);
                    }
                    Event::Mouse(mouse_event) => {
                        self.handle_mouse(mouse_event);
                    }
                    Event::Resize(w, h) => {
                        self.terminal_width = w;
                        self.terminal_height = h;
                    }
                    _ => {}
                }
            }
        }

        Self::teardown_terminal(&mut terminal)?;
        Ok(())
    }
}
