//! Transcript area
//!
//! Displays sent lines and responses, newest at the bottom.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use tcpline_app::{App, Entry};

const BORDER_SIZE: u16 = 2;

/// Render the transcript area.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!(" {} ", app.server_addr());
    let block = Block::default().borders(Borders::ALL).title(title);

    let items: Vec<ListItem> = if app.transcript().is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "Type a line and press Enter to send it",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        app.transcript().iter().flat_map(entry_lines).map(ListItem::new).collect()
    };

    let visible_height = area.height.saturating_sub(BORDER_SIZE) as usize;
    let skip = items.len().saturating_sub(visible_height);
    let visible_items: Vec<_> = items.into_iter().skip(skip).collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}

/// One display line per text line; a bare newline response shows as blank.
fn entry_lines(entry: &Entry) -> Vec<Line<'static>> {
    match entry {
        Entry::Sent(text) => vec![Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(text.clone(), Style::default().fg(Color::Cyan)),
        ])],
        Entry::Received(text) => {
            let lines: Vec<Line<'static>> =
                text.lines().map(|line| Line::raw(line.to_owned())).collect();
            if lines.is_empty() { vec![Line::raw("")] } else { lines }
        },
    }
}
