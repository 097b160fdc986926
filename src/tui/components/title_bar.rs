//! # TitleBar Component
//!
//! Top line of the screen: the app name and the unit family in use.
//!
//! TitleBar is purely presentational. It receives its single prop and has no
//! internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.mode);
//! title_bar.render(frame, area);
//! ```

use crate::core::units::Mode;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub const APP_TITLE: &str = "Conversor";

/// Top status bar showing the app name and active mode.
pub struct TitleBar {
    /// Active unit family
    pub mode: Mode,
}

impl TitleBar {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(APP_TITLE, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" | "),
            Span::raw(self.mode.label()),
        ]);
        frame.render_widget(line, area);
    }
}
