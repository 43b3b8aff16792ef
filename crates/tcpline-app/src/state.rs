//! Observable application state types.
//!
//! [`ConnectionState`] and [`Transcript`] are the view model the frontends
//! render from.

use std::collections::VecDeque;

/// Default number of transcript entries kept for display.
pub const DEFAULT_SCROLLBACK: usize = 1000;

/// Connection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    /// Connected to the remote end.
    Connected,
    /// The connection failed; no further lines are sent.
    Closed {
        /// Why the connection ended.
        reason: String,
    },
}

/// One line of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Line submitted by the user, without its trailing newline.
    Sent(String),
    /// Text returned by the remote end, as read.
    Received(String),
}

impl Entry {
    /// Entry text.
    pub fn text(&self) -> &str {
        match self {
            Self::Sent(text) | Self::Received(text) => text,
        }
    }
}

/// Bounded record of what was sent and received, oldest first.
///
/// Display only: once `limit` entries are held, the oldest is dropped.
#[derive(Debug, Clone)]
pub struct Transcript {
    entries: VecDeque<Entry>,
    limit: usize,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::with_limit(DEFAULT_SCROLLBACK)
    }
}

impl Transcript {
    /// Create an empty transcript holding at most `limit` entries.
    ///
    /// A limit of zero is raised to one so the latest response is always
    /// visible.
    pub fn with_limit(limit: usize) -> Self {
        Self { entries: VecDeque::new(), limit: limit.max(1) }
    }

    /// Append an entry, evicting the oldest if full.
    pub fn push(&mut self, entry: Entry) {
        if self.entries.len() >= self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Entries, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Entry> + ExactSizeIterator {
        self.entries.iter()
    }

    /// Most recent text received from the remote end.
    pub fn last_received(&self) -> Option<&str> {
        self.entries.iter().rev().find_map(|entry| match entry {
            Entry::Received(text) => Some(text.as_str()),
            Entry::Sent(_) => None,
        })
    }

    /// Number of entries held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been sent or received.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries held.
    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_entry_is_evicted() {
        let mut transcript = Transcript::with_limit(2);
        transcript.push(Entry::Sent("a".into()));
        transcript.push(Entry::Received("b".into()));
        transcript.push(Entry::Sent("c".into()));

        let texts: Vec<_> = transcript.iter().map(Entry::text).collect();
        assert_eq!(texts, ["b", "c"]);
    }

    #[test]
    fn last_received_skips_sent_lines() {
        let mut transcript = Transcript::default();
        transcript.push(Entry::Received("first".into()));
        transcript.push(Entry::Sent("second".into()));

        assert_eq!(transcript.last_received(), Some("first"));
    }

    #[test]
    fn zero_limit_keeps_one() {
        let mut transcript = Transcript::with_limit(0);
        transcript.push(Entry::Received("x".into()));
        assert_eq!(transcript.len(), 1);
    }
}
