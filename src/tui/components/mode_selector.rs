//! # ModeSelector Component
//!
//! Two side-by-side buttons, "Velocidade" and "Temperatura". The active mode
//! is drawn inverted.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::units::Mode;
use crate::tui::component::Component;

pub const MODES: [Mode; 2] = [Mode::Speed, Mode::Temperature];

pub struct ModeSelector {
    pub active: Mode,
}

impl ModeSelector {
    pub fn new(active: Mode) -> Self {
        Self { active }
    }

    /// One rect per entry of [`MODES`], in the same order.
    pub fn button_areas(area: Rect) -> [Rect; 2] {
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
            .spacing(1)
            .areas(area)
    }
}

impl Component for ModeSelector {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        for (mode, button_area) in MODES.into_iter().zip(Self::button_areas(area)) {
            let style = if mode == self.active {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Black)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };

            let button = Paragraph::new(mode.label())
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::bordered().border_type(BorderType::Rounded));
            frame.render_widget(button, button_area);
        }
    }
}
