use crate::app::{App, Mode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};
use std::borrow::Cow;

/// Render the status bar: a transient message or key hints on the left,
/// the result count on the right.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }
    let style = app.theme().status_bar;

    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else {
        match app.mode {
            Mode::Search => Cow::Borrowed("Type to search | ESC clear | ENTER keep | Ctrl+t theme"),
            Mode::Browse => Cow::Borrowed(
                "[/]search [Tab/h/l]category [j/k]move [t]heme [?]help [q]uit",
            ),
        }
    };

    let count = format!(
        " {}/{} topics ",
        app.visible_topics().len(),
        app.catalog().len()
    );

    let count_width = (count.len() as u16).min(area.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(count_width)])
        .split(area);

    f.render_widget(Paragraph::new(text).style(style), chunks[0]);
    f.render_widget(
        Paragraph::new(count).style(style).alignment(Alignment::Right),
        chunks[1],
    );
}
