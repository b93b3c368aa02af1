//! Bounded scrolling log feed for the left panel.

use std::collections::VecDeque;

use chrono::NaiveTime;

use crate::config::{LOG_APPEND_CHANCE, LOG_LINES, LOG_MESSAGES};
use crate::rng::RandomSource;

/// One feed line. Immutable once pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub stamp: String,
    pub message: String,
}

impl LogEntry {
    /// Warning lines are tagged in the message text itself, not in a
    /// separate field; the renderer keys off this substring.
    pub fn is_warning(&self) -> bool {
        self.message.contains("[WARN]")
    }

    pub fn display(&self) -> String {
        format!("{} {}", self.stamp, self.message)
    }
}

/// Strict FIFO with a fixed capacity; oldest entry sits at the front and is
/// the one evicted when a push would overflow.
pub struct LogFeed {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogFeed {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Build the shipped feed: capacity [`LOG_LINES`], already full, so the
    /// panel scrolls from the first frame. Eviction keeps the count exact.
    pub fn seeded(rng: &mut dyn RandomSource, now: NaiveTime) -> Self {
        let mut feed = Self::new(LOG_LINES);
        for _ in 0..LOG_LINES {
            let message = LOG_MESSAGES[rng.index(LOG_MESSAGES.len())];
            feed.push(message, now);
        }
        feed
    }

    /// Stamp `now` as `HH:MM:SS`, append at the back, and drop the front
    /// entry if the feed is now over capacity. Never fails.
    pub fn push(&mut self, message: &str, now: NaiveTime) {
        self.entries.push_back(LogEntry {
            stamp: now.format("%H:%M:%S").to_string(),
            message: message.to_string(),
        });
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Per-tick policy: with chance [`LOG_APPEND_CHANCE`], push one uniformly
    /// chosen catalog message.
    pub fn roll(&mut self, rng: &mut dyn RandomSource, now: NaiveTime) {
        if rng.uniform() < LOG_APPEND_CHANCE {
            let message = LOG_MESSAGES[rng.index(LOG_MESSAGES.len())];
            self.push(message, now);
        }
    }

    /// Oldest to newest, which is also top to bottom on screen.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
