//! Bounded ring of user-visible notices (success / info / error messages).
//!
//! The dashboard shows the most recent entries as transient toasts; tests use
//! them to check what the user would have been told.

use std::collections::VecDeque;

use bevy::prelude::*;

/// Maximum number of notices retained.
const MAX_NOTICES: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Monotonic sequence number, unique for the lifetime of the app.
    pub seq: u64,
    pub level: NoticeLevel,
    pub text: String,
}

#[derive(Resource, Debug, Default)]
pub struct Notices {
    entries: VecDeque<Notice>,
    next_seq: u64,
}

impl Notices {
    pub fn push(&mut self, level: NoticeLevel, text: impl Into<String>) {
        if self.entries.len() >= MAX_NOTICES {
            self.entries.pop_front();
        }
        self.entries.push_back(Notice {
            seq: self.next_seq,
            level,
            text: text.into(),
        });
        self.next_seq += 1;
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(NoticeLevel::Success, text);
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(NoticeLevel::Info, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(NoticeLevel::Error, text);
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.entries.back()
    }

    /// Up to `n` most recent notices, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &Notice> {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_seq() {
        let mut notices = Notices::default();
        notices.success("a");
        notices.error("b");
        let seqs: Vec<u64> = notices.recent(10).map(|n| n.seq).collect();
        assert_eq!(seqs, vec![0, 1]);
        assert_eq!(notices.latest().unwrap().level, NoticeLevel::Error);
    }

    #[test]
    fn test_evicts_oldest_when_full() {
        let mut notices = Notices::default();
        for i in 0..40 {
            notices.info(format!("n{i}"));
        }
        assert_eq!(notices.len(), MAX_NOTICES);
        let first = notices.recent(MAX_NOTICES).next().unwrap();
        assert_eq!(first.text, "n8");
        assert_eq!(notices.latest().unwrap().seq, 39);
    }

    #[test]
    fn test_recent_returns_tail_in_order() {
        let mut notices = Notices::default();
        for i in 0..5 {
            notices.info(format!("n{i}"));
        }
        let texts: Vec<&str> = notices.recent(2).map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["n3", "n4"]);
    }
}
