//! Status bar
//!
//! Displays connection status and how to exit.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tcpline_app::{App, ConnectionState};

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let connection_status = match app.connection_state() {
        ConnectionState::Connected => Span::styled(
            format!("Connected to {}", app.server_addr()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        ConnectionState::Closed { reason } => Span::styled(
            format!("Error, Connection closed ({reason})"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let history_len = app.editor().history().len();
    let status_line = Line::from(vec![
        Span::raw(" "),
        connection_status,
        Span::styled(
            format!(" | History: {history_len} | ESC or Ctrl+C to exit"),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
