//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::tui::component::Component;

/// Flattens the terminal's buffer into one string, row after row.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

/// Renders a component into a fresh `width` x `height` terminal and returns its text.
pub fn render_text<C: Component>(component: &mut C, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            component.render(f, f.area());
        })
        .unwrap();
    buffer_text(&terminal)
}
