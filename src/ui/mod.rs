//! Terminal User Interface module.
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard and mouse handling
//! - `render` - Page layout and overlay dispatch
//! - `header` - Title, signature and theme toggle
//! - `search_bar` - Search input with placeholder
//! - `categories` - Category chips
//! - `cards` - Result card grid and empty state
//! - `status` - Status bar
//! - `help` - Keybinding overlay

mod cards;
mod categories;
mod header;
mod help;
mod input;
mod loop_runner;
mod render;
mod search_bar;
mod status;

// Re-export the public API
pub use loop_runner::{run, Action};
