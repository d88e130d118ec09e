//! Assertion helpers for `TestTwin` integration tests.

use crate::game_actions::ActionError;

use super::TestTwin;

impl TestTwin {
    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    pub fn assert_last_success(&self) {
        let result = self.last_result();
        assert!(result.is_success(), "Expected success, got {result:?}");
    }

    pub fn assert_last_error(&self, expected: ActionError) {
        let result = self.last_result();
        assert_eq!(
            result.error(),
            Some(&expected),
            "Expected error {expected:?}, got {result:?}"
        );
    }

    /// Assert the newest notice has exactly this text.
    pub fn assert_latest_notice(&self, text: &str) {
        let latest = self.notices().latest().map(|n| n.text.as_str());
        assert_eq!(latest, Some(text), "unexpected latest notice");
    }

    /// Assert every cell emission is finite and non-negative.
    pub fn assert_emissions_non_negative(&self) {
        for cell in self.grid().cells() {
            assert!(
                cell.emission >= 0.0 && cell.emission.is_finite(),
                "cell {} has emission {}",
                cell.id,
                cell.emission
            );
        }
    }

    pub fn assert_current_total_near(&self, expected: f64, tolerance: f64) {
        let total = self.kpis().current.total_emissions;
        assert!(
            (total - expected).abs() <= tolerance,
            "Expected current total {expected} ± {tolerance}, got {total}"
        );
    }
}
