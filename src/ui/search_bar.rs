use crate::app::{App, Mode};
use crate::util::display_width;
use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

const PLACEHOLDER: &str = "Search topics (e.g. python, react, sql)...";

/// Longest suffix of `s` fitting in `width` columns, so the end of a long
/// query (where the user is typing) stays visible.
fn visible_tail(s: &str, width: usize) -> &str {
    if display_width(s) <= width {
        return s;
    }
    let mut used = 0;
    let mut start = s.len();
    for (idx, c) in s.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &s[start..]
}

/// Render the search input. Shows the placeholder when the query is empty
/// and places the terminal cursor while typing.
pub fn render(f: &mut Frame, app: &mut App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }
    let theme = *app.theme();
    let typing = app.mode == Mode::Search;

    let border_style = if typing {
        theme.input_focused
    } else {
        theme.input_shadow
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(theme.input);
    let inner = block.inner(area);

    // One column reserved for the cursor
    let text_width = inner.width.saturating_sub(1) as usize;
    let query = visible_tail(app.search_query(), text_width);

    let line = if app.search_query().is_empty() {
        Line::from(Span::styled(PLACEHOLDER, theme.placeholder))
    } else {
        Line::from(Span::styled(query, theme.input))
    };
    f.render_widget(Paragraph::new(line).block(block), area);

    if typing {
        let x = inner.x + display_width(query) as u16;
        f.set_cursor_position(Position::new(x, inner.y));
    }

    app.hit_regions.search_bar = Some(area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_tail_keeps_end() {
        assert_eq!(visible_tail("react", 10), "react");
        assert_eq!(visible_tail("machine learning", 8), "learning");
        assert_eq!(visible_tail("量子物理", 5), "物理");
        assert_eq!(visible_tail("abc", 0), "");
    }
}
