//! Submitted-line history.

/// Ordered record of previously submitted non-empty lines.
///
/// Index 0 is the oldest entry. Append-only, except that a line equal to the
/// most recent entry is not stored again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line.
    ///
    /// Empty lines and immediate repeats are ignored. Returns `true` if the
    /// line was stored.
    pub fn push(&mut self, line: &str) -> bool {
        if line.is_empty() || self.last() == Some(line) {
            return false;
        }
        self.entries.push(line.to_owned());
        true
    }

    /// Entry `offset` positions back from the end, where 1 is the newest.
    ///
    /// Returns `None` for 0 or an offset past the oldest entry.
    pub fn from_end(&self, offset: usize) -> Option<&str> {
        if offset == 0 {
            return None;
        }
        let idx = self.entries.len().checked_sub(offset)?;
        self.entries.get(idx).map(String::as_str)
    }

    /// Most recent entry.
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been submitted yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl<S: AsRef<str>> FromIterator<S> for History {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut history = Self::new();
        for line in iter {
            history.push(line.as_ref());
        }
        history
    }
}
