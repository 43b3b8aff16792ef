//! Fuzz target for the line editor state machine
//!
//! # Strategy
//!
//! - Arbitrary interleavings of typing, deletion, recall and submit
//! - Small alphabet so history repeats and de-duplication are exercised
//! - Shadow model of history built from the lines actually submitted
//!
//! # Invariants
//!
//! - History cursor stays within 0..=len(history)
//! - History equals submitted non-empty lines with immediate repeats collapsed
//! - Submit always returns exactly one trailing newline and empties the buffer
//! - A recall that moves the cursor shows exactly that history entry

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tcpline_app::LineEditor;

#[derive(Debug, Clone, Arbitrary)]
enum EditorOp {
    Type(u8),
    Backspace,
    RecallOlder,
    RecallNewer,
    Submit,
}

fuzz_target!(|ops: Vec<EditorOp>| {
    let mut editor = LineEditor::new();
    let mut model: Vec<String> = Vec::new();

    for op in ops {
        let before = editor.history_cursor();

        match op {
            EditorOp::Type(b) => editor.insert(char::from(b'a' + b % 4)),
            EditorOp::Backspace => editor.backspace(),
            EditorOp::RecallOlder => editor.recall_older(),
            EditorOp::RecallNewer => editor.recall_newer(),
            EditorOp::Submit => {
                let pending = editor.buffer().to_owned();
                let line = editor.submit();

                assert_eq!(line, format!("{pending}\n"));
                assert!(editor.buffer().is_empty());
                assert_eq!(editor.history_cursor(), 0);

                if !pending.is_empty() && model.last() != Some(&pending) {
                    model.push(pending);
                }
            },
        }

        assert!(editor.history_cursor() <= editor.history().len());
        assert_eq!(editor.history().entries(), model.as_slice());

        let moved = editor.history_cursor() != before;
        if moved && editor.is_browsing() {
            assert_eq!(Some(editor.buffer()), editor.history().from_end(editor.history_cursor()));
        }
    }
});
