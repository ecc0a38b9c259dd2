//! Results panel: computed masses and the FFMI category band.

use physicalc_core::{FfmiCategory, PhysiqueResult, UnitSystem};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::format::{format_ffmi, format_weight};
use crate::styles::{category_color, ColorTheme};

/// Render the results panel.
pub fn render_results(
    frame: &mut Frame,
    area: Rect,
    result: &PhysiqueResult,
    normalized_ffmi: f64,
    units: UnitSystem,
) {
    let theme = ColorTheme::default();
    let category = FfmiCategory::classify(normalized_ffmi);

    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<14}"), theme.muted_style()),
            Span::styled(value, theme.text_style()),
        ])
    };

    let text = vec![
        row(
            "Target weight",
            format_weight(result.total_weight_kg, units),
        ),
        row("Lean mass", format_weight(result.lean_mass_kg, units)),
        row("Fat mass", format_weight(result.fat_mass_kg, units)),
        Line::default(),
        Line::from(vec![
            Span::styled(format!("{:<14}", "FFMI band"), theme.muted_style()),
            Span::styled(
                format!("{} ({})", category.label(), format_ffmi(normalized_ffmi)),
                Style::default()
                    .fg(category_color(category))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("{:<14}{}", "", category.description()),
            theme.muted_style(),
        )),
    ];

    let block = Block::default().borders(Borders::ALL).title(" Target ");
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use physicalc_core::compute_target_physique;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered(units: UnitSystem) -> String {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let result = compute_target_physique(178.0, 12.0, 20.0);
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_results(frame, area, &result, 20.0, units);
            })
            .unwrap();

        (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf.buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn shows_all_three_masses_metric() {
        let content = rendered(UnitSystem::Metric);
        assert!(content.contains("Target weight"));
        assert!(content.contains("71.6 kg"));
        assert!(content.contains("63.0 kg"));
        assert!(content.contains("8.6 kg"));
    }

    #[test]
    fn shows_pounds_in_imperial() {
        let content = rendered(UnitSystem::Imperial);
        assert!(content.contains("lbs"));
        assert!(!content.contains("kg"));
    }

    #[test]
    fn shows_category_band() {
        let content = rendered(UnitSystem::Metric);
        assert!(content.contains("Above Average"));
        assert!(content.contains("20.0"));
    }

    #[test]
    fn render_results_small_area() {
        let backend = TestBackend::new(12, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let result = compute_target_physique(152.0, 5.0, 15.0);
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_results(frame, area, &result, 15.0, UnitSystem::Metric);
            })
            .unwrap();
    }
}
