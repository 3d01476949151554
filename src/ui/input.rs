//! Input handling for the TUI.
//!
//! Keys are resolved through the keybinding registry for the current mode;
//! mouse events are hit-tested against the regions recorded by the last
//! render.

use crate::app::{App, ClickTarget, Mode};
use crate::keybindings::{Action as KbAction, Context as KbContext};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::Action;

/// Map the input mode to a keybinding context.
fn mode_to_context(mode: Mode) -> KbContext {
    match mode {
        Mode::Browse => KbContext::Global,
        Mode::Search => KbContext::Search,
    }
}

/// Main key dispatch function.
pub(super) fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    // Help overlay captures all keys when visible
    if app.show_help {
        return handle_help_input(app, code);
    }

    let context = mode_to_context(app.mode);
    match app.keybindings.action_for_key(code, modifiers, context) {
        Some(action) => dispatch(app, action),
        None if app.mode == Mode::Search => {
            handle_search_text(app, code, modifiers);
            Action::Continue
        }
        None => Action::Continue,
    }
}

/// Handle input while the help overlay is visible.
///
/// j/k/Up/Down scroll, Esc/q/? dismiss.
fn handle_help_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.show_help = false;
            app.help_scroll_offset = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
        }
        _ => {}
    }
    Action::Continue
}

/// Apply a bound action.
fn dispatch(app: &mut App, action: KbAction) -> Action {
    match action {
        KbAction::Quit => return Action::Quit,
        KbAction::NavDown => app.nav_down(),
        KbAction::NavUp => app.nav_up(),
        KbAction::NextCategory => app.next_category(),
        KbAction::PrevCategory => app.prev_category(),
        KbAction::EnterSearch => app.enter_search(),
        KbAction::ExitSearch => app.exit_search(),
        KbAction::CommitSearch => app.commit_search(),
        KbAction::ClearSearch => app.clear_search(),
        KbAction::ToggleTheme => {
            let name = app.toggle_theme();
            app.set_status(format!("Theme: {}", name));
        }
        KbAction::ShowHelp => {
            app.show_help = true;
            app.help_scroll_offset = 0;
        }
        KbAction::Back => {
            app.back();
        }
    }
    Action::Continue
}

/// Unbound keys in search mode edit the query.
fn handle_search_text(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char(c)
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.push_char(c)
        }
        _ => {}
    }
}

/// Mouse handling: hover raises cards, left click activates controls.
pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent) -> Action {
    if app.show_help {
        return Action::Continue;
    }

    match mouse.kind {
        MouseEventKind::Moved => {
            if app.hover_at(mouse.column, mouse.row) {
                app.needs_redraw = true;
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            let target = app.click_at(mouse.column, mouse.row);
            if target != ClickTarget::Nothing {
                tracing::debug!(?target, "Click");
                app.needs_redraw = true;
            }
        }
        MouseEventKind::ScrollDown => {
            app.nav_down();
            app.needs_redraw = true;
        }
        MouseEventKind::ScrollUp => {
            app.nav_up();
            app.needs_redraw = true;
        }
        _ => {}
    }
    Action::Continue
}
