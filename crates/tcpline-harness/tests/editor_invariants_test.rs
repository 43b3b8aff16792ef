//! Property-based invariant checks over arbitrary key and response sequences.

use proptest::prelude::*;
use tcpline_app::{App, AppEvent, KeyInput};
use tcpline_harness::{EditorSnapshot, InvariantRegistry};

/// Generate random app events.
fn event_strategy() -> impl Strategy<Value = AppEvent> {
    prop_oneof![
        4 => prop::char::range('a', 'c').prop_map(|c| AppEvent::Key(KeyInput::Char(c))),
        1 => Just(AppEvent::Key(KeyInput::Backspace)),
        2 => Just(AppEvent::Key(KeyInput::Up)),
        2 => Just(AppEvent::Key(KeyInput::Down)),
        2 => Just(AppEvent::Key(KeyInput::Enter)),
        1 => "[a-z]{0,8}".prop_map(AppEvent::Response),
        1 => (1u16..200, 1u16..100).prop_map(|(c, r)| AppEvent::Resize(c, r)),
    ]
}

proptest! {
    #[test]
    fn prop_app_invariants_hold(
        events in prop::collection::vec(event_strategy(), 0..200),
        scrollback in 1usize..20,
    ) {
        let mut app = App::new("127.0.0.1:9000".into()).with_scrollback(scrollback);
        let invariants = InvariantRegistry::standard();

        for event in events {
            let _ = app.handle(event);
            let snapshot = EditorSnapshot::from_app(&app);
            prop_assert!(invariants.check_all(&snapshot).is_ok());
        }
    }
}
