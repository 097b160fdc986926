//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screen,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (direction arrow turning): draws every ~30ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.

mod animation;
pub(crate) mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::units::Mode;
use crate::tui::animation::Rotation;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputEvent, SourceInput};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::{ScreenLayout, Target};

const ANIMATION_TICK: Duration = Duration::from_millis(30);
const IDLE_TICK: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub source_input: SourceInput,
    pub rotation: Rotation,
    /// Layout from the last draw, for mouse hit testing
    pub layout: ScreenLayout,
}

impl TuiState {
    pub fn new(rotate_duration: Duration, reversed: bool) -> Self {
        Self {
            source_input: SourceInput::new(),
            rotation: Rotation::new(rotate_duration, reversed),
            layout: ScreenLayout::default(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Map a terminal event to a core action. Returns `None` for events that
/// only concern the TUI or that nothing on screen responds to.
fn action_for(event: &TuiEvent, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::ToggleDirection => Some(Action::ToggleDirection),
        TuiEvent::SelectSpeed => Some(Action::SelectMode(Mode::Speed)),
        TuiEvent::SelectTemperature => Some(Action::SelectMode(Mode::Temperature)),
        TuiEvent::MouseClick(column, row) => match tui.layout.hit_test(*column, *row)? {
            Target::SwapButton => Some(Action::ToggleDirection),
            Target::ModeButton(mode) => Some(Action::SelectMode(mode)),
        },
        TuiEvent::Resize => None,
        TuiEvent::InputChar(_)
        | TuiEvent::Paste(_)
        | TuiEvent::Backspace
        | TuiEvent::ClearInput => match tui.source_input.handle_event(event)? {
            InputEvent::Edited(text) => Some(Action::EditInput(text)),
            InputEvent::Cleared => Some(Action::ClearInput),
        },
    }
}

/// Feed one event through the reducer. Returns `true` when the app should quit.
fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent, now: Instant) -> bool {
    // Props are synced before every event so consecutive keystrokes in one
    // batch see each other's edits.
    tui.source_input.text = app.input().to_string();

    let Some(action) = action_for(event, tui) else {
        return false;
    };
    match update(app, action) {
        Effect::Quit => true,
        Effect::Rotate { reversed } => {
            tui.rotation.retarget(reversed, now);
            false
        }
        Effect::None => false,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(config.mode);
    let mut tui = TuiState::new(config.rotate_duration, app.is_reversed());

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &mut tui);
    ratatui::restore();

    info!("Converter closed");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let _terminal_mode_guard = TerminalModeGuard::new()?;
    info!("Converter started in {:?} mode", app.mode);

    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = tui.rotation.is_animating(Instant::now());
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui, Instant::now()))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_TICK } else { IDLE_TICK };
        let Some(first_event) = poll_event_timeout(timeout)? else {
            continue;
        };

        // Process first event + drain ALL pending events before next draw
        needs_redraw = true;
        let mut should_quit = handle_event(app, tui, &first_event, Instant::now());
        while !should_quit {
            let Some(event) = poll_event_immediate()? else {
                break;
            };
            should_quit = handle_event(app, tui, &event, Instant::now());
        }

        if should_quit {
            debug!("Quit requested");
            return Ok(());
        }
    }
}
