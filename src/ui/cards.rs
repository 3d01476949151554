//! Result cards: one bordered box per visible topic, laid out in a
//! responsive grid.
//!
//! Each card shows the icon and highlighted name on the first line and the
//! category label in its accent colour on the second. The hovered (or
//! cursor) card is drawn raised; cards still fading in are dimmed and cards
//! not yet revealed are skipped.

use crate::animation::CardPhase;
use crate::app::App;
use crate::listing::EMPTY_STATE;
use crate::search::highlight;
use crate::theme::category_accent;
use crate::util::{display_width, truncate_segments, truncate_to_width};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Preferred card width including borders.
pub(super) const CARD_WIDTH: u16 = 30;
/// Card height: two content lines plus borders.
pub(super) const CARD_HEIGHT: u16 = 4;

/// Grid geometry for `count` cards in `area`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Grid {
    pub cols: usize,
    pub card_width: u16,
    pub visible_rows: usize,
    pub total_rows: usize,
}

impl Grid {
    pub fn new(area: Rect, count: usize) -> Self {
        let cols = ((area.width / CARD_WIDTH) as usize).max(1);
        Self {
            cols,
            card_width: area.width / cols as u16,
            visible_rows: ((area.height / CARD_HEIGHT) as usize).max(1),
            total_rows: count.div_ceil(cols),
        }
    }

    /// Adjust a scroll offset (in rows) so `cursor` is on screen.
    pub fn scroll_to(&self, scroll: usize, cursor: usize) -> usize {
        let cursor_row = cursor / self.cols;
        let max_scroll = self.total_rows.saturating_sub(self.visible_rows);
        let scroll = if cursor_row < scroll {
            cursor_row
        } else if cursor_row >= scroll + self.visible_rows {
            cursor_row + 1 - self.visible_rows
        } else {
            scroll
        };
        scroll.min(max_scroll)
    }
}

/// Render the card grid, or the empty-state message when nothing matches.
pub fn render(f: &mut Frame, app: &mut App, area: Rect) {
    if area.width < 4 || area.height < 1 {
        app.hit_regions.cards.clear();
        return;
    }
    let theme = *app.theme();
    let topics = app.visible_topics();

    if topics.is_empty() {
        let y = area.y + area.height / 2;
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(EMPTY_STATE, theme.empty_state)))
                .alignment(Alignment::Center),
            Rect {
                y,
                height: 1,
                ..area
            },
        );
        app.hit_regions.cards.clear();
        app.card_scroll = 0;
        return;
    }

    let grid = Grid::new(area, topics.len());
    let scroll = grid.scroll_to(app.card_scroll, app.cursor);
    let raised = app.raised_index();
    let query = app.effective_query();

    let mut regions = Vec::new();
    let first = scroll * grid.cols;
    for (idx, topic) in topics
        .iter()
        .enumerate()
        .skip(first)
        .take(grid.visible_rows * grid.cols)
    {
        let row = ((idx - first) / grid.cols) as u16;
        let col = ((idx - first) % grid.cols) as u16;
        let y = area.y + row * CARD_HEIGHT;
        if y + CARD_HEIGHT > area.y + area.height {
            break;
        }
        let rect = Rect::new(area.x + col * grid.card_width, y, grid.card_width, CARD_HEIGHT);

        let phase = app.fade.phase(idx);
        if phase == CardPhase::Hidden {
            continue;
        }

        let accent = category_accent(&topic.category);
        let is_raised = raised == Some(idx);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .style(theme.panel);
        block = if is_raised {
            block
                .border_type(BorderType::Thick)
                .style(theme.panel.patch(theme.card_raised))
        } else {
            block.border_type(BorderType::Rounded)
        };

        let inner_width = rect.width.saturating_sub(2) as usize;
        let icon_width = display_width(&topic.icon) + 1;
        let segments = highlight(&topic.name, query);
        let segments = truncate_segments(&segments, inner_width.saturating_sub(icon_width));

        let mut name_spans = Vec::with_capacity(segments.len() + 1);
        name_spans.push(Span::raw(format!("{} ", topic.icon)));
        for seg in segments {
            let style = if seg.matched {
                theme.card_name.patch(theme.mark)
            } else {
                theme.card_name
            };
            name_spans.push(Span::styled(seg.text, style));
        }

        let category = truncate_to_width(&topic.category, inner_width);
        let lines = vec![
            Line::from(name_spans),
            Line::from(Span::styled(
                category,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
        ];

        let mut paragraph = Paragraph::new(lines).block(block);
        if phase == CardPhase::Fading {
            paragraph = paragraph.style(theme.card_fading);
        }
        f.render_widget(paragraph, rect);
        regions.push((rect, idx));
    }

    app.hit_regions.cards = regions;
    app.card_scroll = scroll;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns() {
        let grid = Grid::new(Rect::new(0, 0, 95, 20), 24);
        assert_eq!(grid.cols, 3);
        assert_eq!(grid.card_width, 31);
        assert_eq!(grid.visible_rows, 5);
        assert_eq!(grid.total_rows, 8);
    }

    #[test]
    fn test_grid_narrow_is_single_column() {
        let grid = Grid::new(Rect::new(0, 0, 20, 8), 3);
        assert_eq!(grid.cols, 1);
        assert_eq!(grid.card_width, 20);
        assert_eq!(grid.total_rows, 3);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        // 2 columns, 2 visible rows, 5 rows total
        let grid = Grid::new(Rect::new(0, 0, 60, 8), 10);
        assert_eq!(grid.scroll_to(0, 3), 0);
        assert_eq!(grid.scroll_to(0, 4), 1);
        assert_eq!(grid.scroll_to(0, 9), 3);
        assert_eq!(grid.scroll_to(3, 2), 1);
    }

    #[test]
    fn test_scroll_clamped_after_shrink() {
        let grid = Grid::new(Rect::new(0, 0, 60, 8), 2);
        assert_eq!(grid.scroll_to(4, 0), 0);
    }
}
