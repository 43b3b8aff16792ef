//! End-to-end tests for the runtime over a loopback socket.
//!
//! # Test Strategy
//!
//! Each test scripts what a user types, runs the production runtime against
//! an [`EchoServer`], and then checks:
//! - what went over the wire, in order
//! - what the user was shown
//! - how the session ended

use std::time::Duration;

use tcpline_app::{App, AppEvent, ConnectionState, Entry, KeyInput, Runtime, RuntimeError};
use tcpline_client::{Connection, DuplexSession, TransportError};
use tcpline_harness::{EchoServer, InvariantRegistry, PeerBehavior, SimDriver, SimHandle, Step};

const TIMEOUT: Duration = Duration::from_secs(5);

/// Connect to `server` and run the runtime with `script` to completion.
async fn run_session(
    server: &EchoServer,
    script: Vec<Step>,
) -> (Result<(), RuntimeError<tcpline_harness::SimDriverError>>, SimHandle) {
    let connection = Connection::connect(&server.host(), server.port()).await.unwrap();
    let session = DuplexSession::spawn(connection);

    let driver = SimDriver::new(script).with_invariants(InvariantRegistry::standard());
    let handle = driver.handle();
    let addr = format!("{}:{}", server.host(), server.port());
    let runtime = Runtime::new(driver, App::new(addr), session);

    let result = tokio::time::timeout(TIMEOUT, runtime.run()).await.expect("runtime hung");
    (result, handle)
}

/// Script that types `line` and presses Enter.
fn line(text: &str) -> Vec<Step> {
    let mut steps: Vec<Step> = Step::type_text(text).collect();
    steps.push(Step::Key(KeyInput::Enter));
    steps
}

fn received_entries(app: &App) -> Vec<String> {
    app.transcript()
        .iter()
        .filter_map(|e| match e {
            Entry::Received(text) => Some(text.clone()),
            Entry::Sent(_) => None,
        })
        .collect()
}

#[tokio::test]
async fn echo_round_trip() {
    let server = EchoServer::start(PeerBehavior::Echo).await.unwrap();

    let mut script = line("hello");
    script.push(Step::AwaitResponses(1));
    script.push(Step::Key(KeyInput::Esc));

    let (result, handle) = run_session(&server, script).await;

    assert!(result.is_ok());
    assert!(handle.stopped());
    assert_eq!(server.received_text(), ["hello\n"]);

    let app = handle.last_frame().unwrap();
    assert_eq!(received_entries(&app), ["hello\n"]);
    assert_eq!(app.editor().history().entries(), ["hello"]);
}

#[tokio::test]
async fn responses_follow_submission_order() {
    let server = EchoServer::start(PeerBehavior::Uppercase).await.unwrap();

    let mut script = Vec::new();
    for word in ["one", "two", "three"] {
        script.extend(line(word));
    }
    script.push(Step::AwaitResponses(3));
    script.push(Step::Key(KeyInput::Esc));

    let (result, handle) = run_session(&server, script).await;

    assert!(result.is_ok());
    assert_eq!(server.received_text(), ["one\n", "two\n", "three\n"]);

    let app = handle.last_frame().unwrap();
    assert_eq!(received_entries(&app), ["ONE\n", "TWO\n", "THREE\n"]);
}

#[tokio::test]
async fn empty_enter_sends_single_newline() {
    let server = EchoServer::start(PeerBehavior::Echo).await.unwrap();

    let script = vec![
        Step::Key(KeyInput::Enter),
        Step::AwaitResponses(1),
        Step::Key(KeyInput::Esc),
    ];
    let (result, handle) = run_session(&server, script).await;

    assert!(result.is_ok());
    assert_eq!(server.received(), [b"\n".to_vec()]);
    assert!(handle.last_frame().unwrap().editor().history().is_empty());
}

#[tokio::test]
async fn recalled_line_is_resent_verbatim() {
    let server = EchoServer::start(PeerBehavior::Echo).await.unwrap();

    let mut script = line("foo");
    script.extend(line("bar"));
    script.push(Step::AwaitResponses(2));
    script.extend([
        Step::Key(KeyInput::Up),
        Step::Key(KeyInput::Up),
        Step::Key(KeyInput::Enter),
        Step::AwaitResponses(3),
        Step::Key(KeyInput::Esc),
    ]);

    let (result, handle) = run_session(&server, script).await;

    assert!(result.is_ok());
    assert_eq!(server.received_text(), ["foo\n", "bar\n", "foo\n"]);
    let app = handle.last_frame().unwrap();
    assert_eq!(app.editor().history().entries(), ["foo", "bar", "foo"]);
}

#[tokio::test]
async fn resize_mid_line_keeps_buffer_and_session() {
    let server = EchoServer::start(PeerBehavior::Echo).await.unwrap();

    let mut script: Vec<Step> = Step::type_text("hi").collect();
    script.push(Step::Event(AppEvent::Resize(120, 40)));
    script.push(Step::Key(KeyInput::Enter));
    script.push(Step::AwaitResponses(1));
    script.push(Step::Key(KeyInput::Esc));

    let (result, handle) = run_session(&server, script).await;

    assert!(result.is_ok());
    assert_eq!(server.received_text(), ["hi\n"]);

    let app = handle.last_frame().unwrap();
    assert_eq!(app.terminal_size(), (120, 40));
    assert_eq!(received_entries(&app), ["hi\n"]);
}

#[tokio::test]
async fn interrupt_quits_cleanly() {
    let server = EchoServer::start(PeerBehavior::Echo).await.unwrap();

    let mut script: Vec<Step> = Step::type_text("unsent").collect();
    script.push(Step::Key(KeyInput::Interrupt));
    script.extend(line("never"));

    let (result, handle) = run_session(&server, script).await;

    assert!(result.is_ok());
    assert!(handle.stopped());
    assert!(server.received().is_empty());
    assert!(handle.remaining_steps() > 0);
}

#[tokio::test]
async fn remote_hangup_is_fatal_transport_error() {
    let server = EchoServer::start(PeerBehavior::HangUpAfter(1)).await.unwrap();

    let mut script = line("first");
    script.push(Step::AwaitResponses(1));
    script.extend(line("second"));
    // never satisfied: the runtime must end on its own
    script.push(Step::AwaitResponses(2));
    script.extend(line("third"));

    let (result, handle) = run_session(&server, script).await;

    assert!(matches!(result, Err(RuntimeError::Transport(TransportError::Closed))));
    assert!(handle.stopped());
    assert_eq!(server.received_text(), ["first\n", "second\n"]);

    let app = handle.last_frame().unwrap();
    assert!(matches!(app.connection_state(), ConnectionState::Closed { .. }));
    assert_eq!(app.editor().history().entries(), ["first", "second"]);
}

#[tokio::test]
async fn driver_failure_is_reported() {
    let server = EchoServer::start(PeerBehavior::Echo).await.unwrap();

    let script = vec![Step::Fail("terminal gone".into())];
    let (result, handle) = run_session(&server, script).await;

    assert!(matches!(result, Err(RuntimeError::Driver(_))));
    assert!(handle.stopped());
}

#[tokio::test]
async fn connect_to_closed_port_fails() {
    let server = EchoServer::start(PeerBehavior::Echo).await.unwrap();
    let host = server.host();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    assert!(Connection::connect(&host, port).await.is_err());
}
