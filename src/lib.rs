//! Terminal topic browser with live search, category filters and
//! light/dark themes.
//!
//! The library exposes the pure core (catalog, search, theme) alongside the
//! TUI so both the binary and integration tests can drive it.

pub mod animation;
pub mod app;
pub mod catalog;
pub mod config;
pub mod keybindings;
pub mod listing;
pub mod search;
pub mod theme;
pub mod ui;
pub mod util;
