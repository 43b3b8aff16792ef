//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! drawing into the frame.

mod input;
mod status;
mod transcript;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};
use tcpline_app::App;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    const TRANSCRIPT_MIN_HEIGHT: u16 = 3;
    const INPUT_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(TRANSCRIPT_MIN_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [transcript_area, input_area, status_area] = chunks.as_ref() else {
        return;
    };

    transcript::render(frame, app, *transcript_area);
    input::render(frame, app, *input_area);
    status::render(frame, app, *status_area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};
    use tcpline_app::{AppEvent, KeyInput};

    use super::*;

    fn draw(app: &App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            let _ = app.handle(AppEvent::Key(KeyInput::Char(c)));
        }
        let _ = app.handle(AppEvent::Key(KeyInput::Enter));
    }

    #[test]
    fn transcript_shows_sent_and_received_lines() {
        let mut app = App::new("127.0.0.1:9000".into());
        type_line(&mut app, "hello");
        let _ = app.handle(AppEvent::Response("hello\nworld\n".into()));

        let rows = draw(&app, 40, 12);
        let screen = rows.join("\n");

        assert!(screen.contains("> hello"));
        assert!(rows.iter().any(|r| r.contains("│hello")));
        assert!(screen.contains("world"));
        assert!(screen.contains("127.0.0.1:9000"));
    }

    #[test]
    fn input_line_shows_buffer() {
        let mut app = App::new("127.0.0.1:9000".into());
        for c in "draft".chars() {
            let _ = app.handle(AppEvent::Key(KeyInput::Char(c)));
        }

        let screen = draw(&app, 40, 12).join("\n");
        assert!(screen.contains("> draft"));
    }

    #[test]
    fn input_title_shows_history_position_while_browsing() {
        let mut app = App::new("127.0.0.1:9000".into());
        type_line(&mut app, "one");
        type_line(&mut app, "two");
        let _ = app.handle(AppEvent::Key(KeyInput::Up));

        let screen = draw(&app, 40, 12).join("\n");
        assert!(screen.contains("history 1/2"));
    }

    #[test]
    fn long_transcript_keeps_latest_visible() {
        let mut app = App::new("127.0.0.1:9000".into());
        for i in 0..50 {
            let _ = app.handle(AppEvent::Response(format!("resp{i:02}")));
        }

        let screen = draw(&app, 40, 12).join("\n");
        assert!(screen.contains("resp49"));
        assert!(!screen.contains("resp00"));
    }

    #[test]
    fn status_bar_shows_address_and_exit_hint() {
        let app = App::new("127.0.0.1:9000".into());

        let rows = draw(&app, 80, 12);
        let status = rows.last().map(|r| r.trim().to_owned()).unwrap_or_default();
        insta::assert_snapshot!(status, @"Connected to 127.0.0.1:9000 | History: 0 | ESC or Ctrl+C to exit");
    }

    #[test]
    fn status_bar_reports_closed_connection() {
        let mut app = App::new("127.0.0.1:9000".into());
        let _ = app.handle(AppEvent::ConnectionLost { message: "read failed".into() });

        let rows = draw(&app, 60, 12);
        assert!(rows.last().is_some_and(|r| r.contains("Error, Connection closed")));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let app = App::new("127.0.0.1:9000".into());
        let _ = draw(&app, 4, 2);
    }
}
