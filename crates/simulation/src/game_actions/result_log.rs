//! Ring-buffer log of recently executed actions and their results.
//!
//! The [`ActionResultLog`] resource stores the last 64 `(TwinAction, ActionResult)`
//! pairs so the dashboard and tests can inspect what happened without
//! polling every resource.

use std::collections::VecDeque;

use bevy::prelude::*;

use super::{ActionResult, TwinAction};

/// Maximum number of entries retained in the ring buffer.
const MAX_ENTRIES: usize = 64;

#[derive(Resource, Debug, Clone, Default)]
pub struct ActionResultLog {
    entries: VecDeque<(TwinAction, ActionResult)>,
}

impl ActionResultLog {
    /// Record a new action/result pair, evicting the oldest when full.
    pub fn push(&mut self, action: TwinAction, result: ActionResult) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back((action, result));
    }

    /// The last `n` entries (or fewer if the log is shorter), oldest first.
    pub fn last_n(&self, n: usize) -> impl Iterator<Item = &(TwinAction, ActionResult)> {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }

    pub fn last_result(&self) -> Option<&ActionResult> {
        self.entries.back().map(|(_, result)| result)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
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
    use crate::game_actions::ActionError;

    #[test]
    fn push_and_last_n() {
        let mut log = ActionResultLog::default();
        log.push(TwinAction::ApplyFactors, ActionResult::Success);
        log.push(
            TwinAction::CancelRecalc,
            ActionResult::Error(ActionError::NothingPending),
        );

        let last: Vec<_> = log.last_n(1).collect();
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].0, TwinAction::CancelRecalc);
        assert_eq!(
            log.last_result(),
            Some(&ActionResult::Error(ActionError::NothingPending))
        );

        assert_eq!(log.last_n(10).count(), 2);
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut log = ActionResultLog::default();
        for years in 0..70 {
            log.push(TwinAction::SetProjectionYears { years }, ActionResult::Success);
        }
        assert_eq!(log.len(), MAX_ENTRIES);
        // 70 - 64
        let first = log.last_n(MAX_ENTRIES).next().unwrap();
        assert_eq!(first.0, TwinAction::SetProjectionYears { years: 6 });
    }

    #[test]
    fn clear_empties_log() {
        let mut log = ActionResultLog::default();
        log.push(TwinAction::ResetFactors, ActionResult::Success);
        assert!(!log.is_empty());
        log.clear();
        assert!(log.is_empty());
    }
}
