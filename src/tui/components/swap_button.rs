//! # SwapButton Component
//!
//! The divider between source and target with the direction arrow in the
//! middle. The glyph is a prop; the rotation itself lives in
//! `tui::animation` and the parent passes in the current frame.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::tui::component::Component;

const BUTTON_WIDTH: u16 = 5;

pub struct SwapButton {
    pub glyph: &'static str,
}

impl SwapButton {
    pub fn new(glyph: &'static str) -> Self {
        Self { glyph }
    }

    /// Clickable region inside the divider row.
    pub fn button_area(area: Rect) -> Rect {
        let [button] = Layout::horizontal([Constraint::Length(BUTTON_WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        button
    }
}

impl Component for SwapButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let divider = "─".repeat(area.width as usize);
        frame.render_widget(
            Line::styled(divider, Style::default().fg(Color::DarkGray)),
            area,
        );

        let button = Self::button_area(area);
        frame.render_widget(Line::from(format!("( {} )", self.glyph)), button);
    }
}
