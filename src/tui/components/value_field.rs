//! # ValueField Component
//!
//! One side of the conversion: a heading line, then the value with its unit
//! symbol right-aligned. Used for both the typed source and the derived
//! target. An empty value shows a dimmed placeholder instead.
//!
//! ```text
//! km/h
//! 80                                km/h
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

/// Colour of the derived value.
pub const TARGET_ACCENT: Color = Color::Rgb(0x4A, 0xCB, 0xCB);
const PLACEHOLDER: Color = Color::DarkGray;

pub struct ValueField<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub unit: &'a str,
    /// Colour of the value and unit once a value is present.
    pub accent: Color,
    /// Place the terminal cursor after the value (source field only).
    pub show_cursor: bool,
}

impl Component for ValueField<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};

        let [label_area, value_area] = Layout::vertical([Length(1), Length(1)]).areas(area);
        frame.render_widget(Line::from(self.label), label_area);

        let unit_width = Line::from(self.unit).width() as u16;
        let [number_area, unit_area] =
            Layout::horizontal([Min(0), Length(unit_width)]).areas(value_area);

        let color = if self.value.is_empty() { PLACEHOLDER } else { self.accent };
        let text = if self.value.is_empty() { self.placeholder } else { self.value };
        let bold = Style::default().fg(color).add_modifier(Modifier::BOLD);

        frame.render_widget(Paragraph::new(text).style(bold), number_area);
        frame.render_widget(Paragraph::new(self.unit).style(bold), unit_area);

        if self.show_cursor {
            let typed = Line::from(self.value).width() as u16;
            let x = (number_area.x + typed).min(number_area.right().saturating_sub(1));
            frame.set_cursor_position((x, number_area.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_text;

    fn field<'a>(value: &'a str) -> ValueField<'a> {
        ValueField {
            label: "Celsius",
            value,
            placeholder: "25",
            unit: "°C",
            accent: Color::Reset,
            show_cursor: true,
        }
    }

    #[test]
    fn test_renders_label_value_and_unit() {
        let text = render_text(&mut field("36.6"), 20, 2);
        let (first, second) = text.split_at(20);
        assert!(first.starts_with("Celsius"));
        assert!(second.starts_with("36.6"));
        assert!(second.trim_end().ends_with("°C"));
    }

    #[test]
    fn test_empty_value_shows_placeholder() {
        let text = render_text(&mut field(""), 20, 2);
        assert!(text.contains("25"));
    }

    #[test]
    fn test_placeholder_is_dimmed() {
        let mut terminal =
            ratatui::Terminal::new(ratatui::backend::TestBackend::new(20, 2)).unwrap();
        terminal.draw(|f| field("").render(f, f.area())).unwrap();
        let cell = &terminal.backend().buffer()[(0, 1)];
        assert_eq!(cell.fg, PLACEHOLDER);
    }
}
