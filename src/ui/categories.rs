use crate::app::App;
use crate::catalog::ALL_CATEGORY;
use crate::theme::category_accent;
use crate::util::{display_width, truncate_to_width};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Columns between neighbouring chips.
const CHIP_GAP: u16 = 1;

/// Chip position relative to the chip area: (column, row, width).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ChipSlot {
    pub col: u16,
    pub row: u16,
    pub width: u16,
}

fn chip_label(name: &str) -> String {
    format!(" {} ", name)
}

/// Flow chips left to right, wrapping onto a new row when one does not fit.
pub(super) fn layout(categories: &[String], width: u16) -> Vec<ChipSlot> {
    let mut slots = Vec::with_capacity(categories.len());
    let (mut col, mut row) = (0u16, 0u16);
    for name in categories {
        let chip_width = (display_width(&chip_label(name)) as u16).min(width);
        if col > 0 && col + chip_width > width {
            col = 0;
            row += 1;
        }
        slots.push(ChipSlot {
            col,
            row,
            width: chip_width,
        });
        col = col.saturating_add(chip_width + CHIP_GAP);
    }
    slots
}

/// Rows needed to show every chip at `width`.
pub(super) fn rows_needed(categories: &[String], width: u16) -> u16 {
    layout(categories, width)
        .last()
        .map(|slot| slot.row + 1)
        .unwrap_or(1)
}

/// Render the category chips. The selected chip is inverted; the others
/// carry their category accent. Records a hit region per visible chip.
pub fn render(f: &mut Frame, app: &mut App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }
    let theme = *app.theme();
    let selected = app.selected_category_index();
    let slots = layout(app.categories(), area.width);

    let mut regions = Vec::with_capacity(slots.len());
    for (idx, (name, slot)) in app.categories().iter().zip(&slots).enumerate() {
        if slot.row >= area.height {
            break;
        }
        let rect = Rect {
            x: area.x + slot.col,
            y: area.y + slot.row,
            width: slot.width,
            height: 1,
        };

        let style = if idx == selected {
            theme.chip_selected
        } else if name == ALL_CATEGORY {
            theme.chip
        } else {
            theme.chip.fg(category_accent(name))
        };

        let label = chip_label(name);
        let label = truncate_to_width(&label, slot.width as usize);
        f.render_widget(Paragraph::new(Line::from(Span::styled(label, style))), rect);
        regions.push((rect, idx));
    }

    app.hit_regions.chips = regions;
}
