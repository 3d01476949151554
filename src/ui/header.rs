use crate::app::App;
use crate::util::display_width;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const TITLE: &str = "🔮 Explore Topics";
const SIGNATURE: &str = "⚡ Diwakar Reddy";

/// Render the title row: title on the left, signature centered and the
/// theme toggle on the right. Records the toggle's hit region.
pub fn render(f: &mut Frame, app: &mut App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }
    let theme = *app.theme();

    let toggle = format!(" {} ", app.theme_variant().toggle_label());
    let toggle_width = (display_width(&toggle) as u16).min(area.width);
    let toggle_area = Rect {
        x: area.x + area.width - toggle_width,
        y: area.y,
        width: toggle_width,
        height: 1,
    };

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(TITLE, theme.title))),
        area,
    );

    // Signature only when it does not collide with title or toggle
    let needed = display_width(TITLE) + display_width(SIGNATURE) + toggle_width as usize + 4;
    if needed <= area.width as usize {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(SIGNATURE, theme.signature)))
                .alignment(Alignment::Center),
            Rect {
                width: area.width - toggle_width,
                ..area
            },
        );
    }

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(toggle, theme.toggle))),
        toggle_area,
    );
    app.hit_regions.theme_toggle = Some(toggle_area);
}
