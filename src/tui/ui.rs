use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType};

use crate::core::state::App;
use crate::core::units::Mode;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::mode_selector::MODES;
use crate::tui::components::value_field::TARGET_ACCENT;
use crate::tui::components::{ModeSelector, SwapButton, TitleBar, ValueField};

const HELP_TEXT: &str = " Tab swap  ←/→ mode  Del clear  Esc quit ";

/// Where everything sits on screen. Recomputed each frame and kept for
/// mouse hit testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub converter: Rect,
    pub source: Rect,
    pub divider: Rect,
    pub swap_button: Rect,
    pub target: Rect,
    pub modes: Rect,
    pub mode_buttons: [Rect; 2],
    pub help: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        use Constraint::{Length, Min};

        let [title, _, converter, _, modes, _, help] = Layout::vertical([
            Length(1),
            Length(1),
            Length(9),
            Length(1),
            Length(3),
            Min(0),
            Length(1),
        ])
        .areas(area);

        let inner = Block::bordered().inner(converter).inner(ratatui::layout::Margin {
            horizontal: 1,
            vertical: 0,
        });
        let [source, _, divider, _, target] =
            Layout::vertical([Length(2), Length(1), Length(1), Length(1), Length(2)])
                .areas(inner);

        Self {
            title,
            converter,
            source,
            divider,
            swap_button: SwapButton::button_area(divider),
            target,
            modes,
            mode_buttons: ModeSelector::button_areas(modes),
            help,
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<Target> {
        let position = Position::new(column, row);
        if self.swap_button.contains(position) {
            return Some(Target::SwapButton);
        }
        MODES
            .into_iter()
            .zip(self.mode_buttons)
            .find(|(_, area)| area.contains(position))
            .map(|(mode, _)| Target::ModeButton(mode))
    }
}

/// Something on screen a click can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    SwapButton,
    ModeButton(Mode),
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Instant) {
    let layout = ScreenLayout::new(frame.area());
    tui.layout = layout;

    let conversion = app.conversion();

    TitleBar::new(app.mode).render(frame, layout.title);

    frame.render_widget(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
        layout.converter,
    );

    ValueField {
        label: conversion.source_label(),
        value: app.input(),
        placeholder: conversion.source_placeholder(),
        unit: conversion.source_symbol(),
        accent: Color::Reset,
        show_cursor: true,
    }
    .render(frame, layout.source);

    SwapButton::new(tui.rotation.glyph_at(now)).render(frame, layout.divider);

    ValueField {
        label: conversion.target_label(),
        value: app.output(),
        placeholder: conversion.target_placeholder(),
        unit: conversion.target_symbol(),
        accent: TARGET_ACCENT,
        show_cursor: false,
    }
    .render(frame, layout.target);

    ModeSelector::new(app.mode).render(frame, layout.modes);

    frame.render_widget(
        Line::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)).centered(),
        layout.help,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        terminal
            .draw(|f| draw_ui(f, app, tui, Instant::now()))
            .unwrap();
        buffer_text(&terminal)
    }

    fn tui() -> TuiState {
        TuiState::new(Duration::from_millis(300), false)
    }

    #[test]
    fn test_draw_ui_defaults() {
        let app = App::default();
        let text = draw(&app, &mut tui());
        assert!(text.contains("Conversor"));
        assert!(text.contains("km/h"));
        assert!(text.contains("mph"));
        assert!(text.contains("80")); // placeholder
        assert!(text.contains("( ↓ )"));
        assert!(text.contains("Velocidade"));
        assert!(text.contains("Temperatura"));
    }

    #[test]
    fn test_draw_ui_shows_converted_value() {
        let mut app = App::new(Mode::Temperature);
        update(&mut app, Action::EditInput("100".into()));
        let text = draw(&app, &mut tui());
        assert!(text.contains("Celsius"));
        assert!(text.contains("Fahrenheit"));
        assert!(text.contains("100"));
        assert!(text.contains("212"));
    }

    #[test]
    fn test_draw_ui_caches_layout() {
        let app = App::default();
        let mut state = tui();
        draw(&app, &mut state);
        assert_eq!(state.layout, ScreenLayout::new(Rect::new(0, 0, 40, 20)));
    }

    #[test]
    fn test_hit_test_targets() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 40, 20));

        let swap = layout.swap_button;
        assert_eq!(layout.hit_test(swap.x + 2, swap.y), Some(Target::SwapButton));

        let [speed, temperature] = layout.mode_buttons;
        assert_eq!(
            layout.hit_test(speed.x + 1, speed.y + 1),
            Some(Target::ModeButton(Mode::Speed))
        );
        assert_eq!(
            layout.hit_test(temperature.x + 1, temperature.y + 1),
            Some(Target::ModeButton(Mode::Temperature))
        );
    }

    #[test]
    fn test_hit_test_misses() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 40, 20));
        assert_eq!(layout.hit_test(0, 0), None);
        assert_eq!(layout.hit_test(layout.divider.x, layout.divider.y), None);
        assert_eq!(layout.hit_test(layout.help.x, layout.help.y), None);
    }

    #[test]
    fn test_layout_on_tiny_terminal_does_not_panic() {
        let app = App::default();
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal
            .draw(|f| draw_ui(f, &app, &mut tui(), Instant::now()))
            .unwrap();
    }
}
