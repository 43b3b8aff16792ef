//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.

use super::{EditorSnapshot, Invariant, InvariantResult, Violation};

/// History cursor must stay within `0..=history.len()`.
pub struct CursorInRange;

impl Invariant for CursorInRange {
    fn name(&self) -> &'static str {
        "cursor_in_range"
    }

    fn check(&self, state: &EditorSnapshot) -> InvariantResult {
        if state.cursor > state.history.len() {
            return Err(Violation {
                invariant: self.name(),
                message: format!(
                    "cursor {} past history length {}",
                    state.cursor,
                    state.history.len()
                ),
            });
        }
        Ok(())
    }
}

/// History holds no empty lines and no immediate repeats.
pub struct HistoryWellFormed;

impl Invariant for HistoryWellFormed {
    fn name(&self) -> &'static str {
        "history_well_formed"
    }

    fn check(&self, state: &EditorSnapshot) -> InvariantResult {
        if let Some(pos) = state.history.iter().position(String::is_empty) {
            return Err(Violation {
                invariant: self.name(),
                message: format!("empty entry at index {pos}"),
            });
        }

        if let Some(pos) = state.history.windows(2).position(|w| w[0] == w[1]) {
            return Err(Violation {
                invariant: self.name(),
                message: format!(
                    "entries {pos} and {} repeat {:?}",
                    pos.saturating_add(1),
                    state.history[pos]
                ),
            });
        }
        Ok(())
    }
}

/// Transcript never holds more than its limit.
pub struct TranscriptWithinLimit;

impl Invariant for TranscriptWithinLimit {
    fn name(&self) -> &'static str {
        "transcript_within_limit"
    }

    fn check(&self, state: &EditorSnapshot) -> InvariantResult {
        if state.transcript_len > state.transcript_limit {
            return Err(Violation {
                invariant: self.name(),
                message: format!(
                    "{} entries exceed limit {}",
                    state.transcript_len, state.transcript_limit
                ),
            });
        }
        Ok(())
    }
}
