//! Invariant checking for simulation testing.
//!
//! Invariants are properties that must always hold during execution. Unlike
//! example-based tests that check specific scenarios, invariants verify
//! behavioral properties across all key sequences.
//!
//! # Usage
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! let snapshot = EditorSnapshot::from_app(&app);
//! registry.check_all(&snapshot)?;
//! ```

mod checks;
mod snapshot;

pub use checks::{CursorInRange, HistoryWellFormed, TranscriptWithinLimit};
pub use snapshot::EditorSnapshot;

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Invariant violation with context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// Name of the violated invariant.
    pub invariant: &'static str,
    /// Description of what went wrong.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// An invariant that can be checked against editor state.
pub trait Invariant: Send + Sync {
    /// Invariant name for error reporting.
    fn name(&self) -> &'static str;

    /// Check the invariant against the current state.
    fn check(&self, state: &EditorSnapshot) -> InvariantResult;
}

/// Registry of invariants to check.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Registry with every standard invariant.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(CursorInRange);
        registry.add(HistoryWellFormed);
        registry.add(TranscriptWithinLimit);
        registry
    }

    /// Add an invariant.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Run every invariant, returning the first violation.
    pub fn check_all(&self, state: &EditorSnapshot) -> InvariantResult {
        for invariant in &self.invariants {
            invariant.check(state)?;
        }
        Ok(())
    }

    /// Run every invariant and panic with `context` on violation.
    #[allow(clippy::panic, reason = "harness assertion")]
    pub fn assert_all(&self, state: &EditorSnapshot, context: &str) {
        if let Err(violation) = self.check_all(state) {
            panic!("invariant violated after {context}: {violation}\nstate: {state:?}");
        }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// True if no invariants are registered.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}
