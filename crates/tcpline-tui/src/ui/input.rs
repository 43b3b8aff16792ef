//! Input line
//!
//! Displays the edit buffer with the cursor at its end.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use tcpline_app::App;

const PROMPT_WIDTH: u16 = 2; // "> "
const BORDER_LEFT: u16 = 1;
const INPUT_LINE_OFFSET_Y: u16 = 1; // inside top border
const RIGHT_PADDING: u16 = 1; // inside right border

/// Render the input line.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let editor = app.editor();

    let mut block = Block::default().borders(Borders::ALL);
    if editor.is_browsing() {
        block = block.title(format!(
            " history {}/{} ",
            editor.history_cursor(),
            editor.history().len()
        ));
    }

    let input_text = format!("> {}", editor.buffer());
    let paragraph =
        Paragraph::new(input_text).style(Style::default().fg(Color::White)).block(block);

    frame.render_widget(paragraph, area);

    let typed = editor.buffer().chars().count().min(usize::from(u16::MAX)) as u16;
    let available_width = area.width.saturating_sub(BORDER_LEFT + PROMPT_WIDTH + RIGHT_PADDING);
    let cursor_offset = typed.min(available_width);

    let cursor_x =
        area.x.saturating_add(BORDER_LEFT).saturating_add(PROMPT_WIDTH).saturating_add(cursor_offset);
    let cursor_y = area.y.saturating_add(INPUT_LINE_OFFSET_Y);
    let max_x = area.x.saturating_add(area.width).saturating_sub(RIGHT_PADDING);
    let cursor_x = cursor_x.min(max_x);

    frame.set_cursor_position((cursor_x, cursor_y));
}
