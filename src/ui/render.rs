//! Render functions for the TUI.
//!
//! Lays out the page (header, search bar, chips, cards, status bar) inside
//! the rainbow border and draws the help overlay on top when active.

use crate::app::App;
use crate::theme::{rainbow_color, rainbow_index};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::{cards, categories, header, help, search_bar, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 60;
pub(super) const MIN_HEIGHT: u16 = 14;

/// Main render function.
///
/// Hit regions are rebuilt on every frame so mouse handling always matches
/// what is on screen.
pub(super) fn render(f: &mut Frame, app: &mut App) {
    app.hit_regions.clear();
    let area = f.area();

    // Guard against zero-width/height to prevent panics
    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let theme = *app.theme();
    f.render_widget(Block::default().style(theme.page), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let border_style = if app.fade.is_enabled() {
        let elapsed = app.started.elapsed();
        app.rainbow_stop = rainbow_index(elapsed);
        Style::default().fg(rainbow_color(elapsed))
    } else {
        theme.panel_border
    };
    let page = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(theme.panel);
    let inner = page.inner(rows[0]);
    f.render_widget(page, rows[0]);

    render_page(f, app, inner);
    status::render(f, app, rows[1]);

    if app.show_help {
        help::render(f, app);
    }
}

/// Stack the page sections inside the border.
fn render_page(f: &mut Frame, app: &mut App, area: Rect) {
    let content = Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    };
    let chip_rows = categories::rows_needed(app.categories(), content.width).min(3);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(chip_rows),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(content);

    header::render(f, app, chunks[0]);
    search_bar::render(f, app, chunks[1]);
    categories::render(f, app, chunks[2]);
    cards::render(f, app, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppOptions, ClickTarget};
    use crate::catalog::Catalog;
    use crate::theme::ThemeVariant;
    use ratatui::{backend::TestBackend, Terminal};

    fn still_app() -> App {
        let options = AppOptions {
            animations: false,
            ..AppOptions::default()
        };
        App::new(Catalog::builtin(), options)
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_too_small_terminal() {
        let mut app = still_app();
        let screen = draw(&mut app, 40, 8);
        assert!(screen.contains("Terminal too small"));
        assert!(app.hit_regions.chips.is_empty());

        let screen = draw(&mut app, 10, 2);
        assert!(screen.contains("Too small"));
    }

    #[test]
    fn test_header_and_placeholder() {
        let mut app = still_app();
        let screen = draw(&mut app, 100, 30);
        assert!(screen.contains("Explore Topics"));
        assert!(screen.contains("Diwakar Reddy"));
        assert!(screen.contains("Light"));
        assert!(screen.contains("Search topics (e.g. python, react, sql)..."));
    }

    #[test]
    fn test_toggle_label_follows_theme() {
        let mut app = still_app();
        app.set_theme(ThemeVariant::Dark);
        let screen = draw(&mut app, 100, 30);
        assert!(screen.contains("Dark"));
    }

    #[test]
    fn test_cards_show_name_and_category() {
        let mut app = still_app();
        app.set_query("sql");
        let screen = draw(&mut app, 100, 30);
        assert!(screen.contains("MySQL Database"));
        assert!(screen.contains("PostgreSQL"));
        assert!(screen.contains("Database"));
        assert!(!screen.contains("MongoDB"));
        assert_eq!(app.hit_regions.cards.len(), 2);
    }

    #[test]
    fn test_empty_state_message() {
        let mut app = still_app();
        app.set_query("zzz");
        let screen = draw(&mut app, 100, 30);
        assert!(screen.contains("No topics found"));
        assert!(app.hit_regions.cards.is_empty());
    }

    #[test]
    fn test_chips_and_toggle_regions_recorded() {
        let mut app = still_app();
        draw(&mut app, 120, 30);
        assert_eq!(app.hit_regions.chips.len(), app.categories().len());
        assert!(app.hit_regions.search_bar.is_some());

        let toggle = app.hit_regions.theme_toggle.unwrap();
        assert_eq!(app.click_at(toggle.x, toggle.y), ClickTarget::ThemeToggle);
        assert!(app.is_dark());
    }

    #[test]
    fn test_clicking_rendered_chip_filters() {
        let mut app = still_app();
        draw(&mut app, 120, 30);
        let (rect, idx) = app.hit_regions.chips[4];
        app.click_at(rect.x, rect.y);
        assert_eq!(app.selected_category_index(), idx);
        assert_eq!(app.selected_category(), "Database");

        let screen = draw(&mut app, 120, 30);
        assert!(screen.contains("MongoDB"));
        assert!(!screen.contains("Docker"));
    }

    #[test]
    fn test_fade_in_hides_later_cards() {
        let mut app = App::new(Catalog::builtin(), AppOptions::default());
        let screen = draw(&mut app, 100, 40);
        assert!(screen.contains("Thermodynamics"));
        // Card 23 appears after 23 × 70ms
        assert!(!app.hit_regions.cards.iter().any(|(_, idx)| *idx == 23));
    }

    #[test]
    fn test_help_overlay_lists_bindings() {
        let mut app = still_app();
        app.show_help = true;
        let screen = draw(&mut app, 100, 40);
        assert!(screen.contains("Browsing"));
        assert!(screen.contains("Toggle light/dark theme"));
    }

    #[test]
    fn test_cursor_card_stays_visible() {
        let mut app = still_app();
        for _ in 0..23 {
            app.nav_down();
        }
        draw(&mut app, 70, 20);
        assert!(app.hit_regions.cards.iter().any(|(_, idx)| *idx == 23));
        assert!(app.card_scroll > 0);
    }
}
