//! # Core Application Logic
//!
//! The converter's business logic. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • units / convert      │
//!                    │  • sanitize             │
//!                    │  • App (state)          │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │    CLI     │
//!            │  Adapter   │            │  convert   │
//!            │ (ratatui)  │            │ subcommand │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`units`]: unit enums, `Mode`, and the `Conversion` tagged union
//! - [`convert`]: the pure conversion functions
//! - [`sanitize`]: keystroke filtering for the source field
//! - [`state`]: the `App` struct and its recompute rule
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`config`]: `~/.conversor/config.toml` loading and resolution
//!
//! `config` is the one exception to "no I/O": it reads and writes the config file.

pub mod action;
pub mod config;
pub mod convert;
pub mod sanitize;
pub mod state;
pub mod units;
