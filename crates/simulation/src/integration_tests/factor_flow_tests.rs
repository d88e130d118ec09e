//! Factor edits, reset, and the deferred "apply factors" recalculation.

use std::time::Duration;

use crate::config::{BaseEmissionMode, SimulationConfig};
use crate::emissions::emission_from_base;
use crate::factors::{Factor, FactorSet};
use crate::game_actions::{ActionError, ActionResult, TwinAction};
use crate::grid::{Cell, CellCategory, CellId, CityGrid};
use crate::test_harness::TestTwin;

fn single_industrial_cell(base: f64) -> CityGrid {
    CityGrid::from_cells(
        1,
        1,
        vec![Cell::new(CellId::new(0, 0), CellCategory::Industrial, base)],
    )
}

// -----------------------------------------------------------------------
// Immediate recalculation
// -----------------------------------------------------------------------

#[test]
fn test_set_factor_recalculates_every_cell() {
    let mut twin = TestTwin::new();
    let result = twin.act(TwinAction::SetFactor {
        factor: Factor::Green,
        value: 90.0,
    });
    assert_eq!(result, ActionResult::Success);
    assert_eq!(twin.factors().green, 90.0);

    let factors = *twin.factors();
    for cell in twin.grid().cells() {
        let expected = emission_from_base(cell.base_emission, cell.category, &factors);
        assert_eq!(cell.emission, expected);
    }
}

#[test]
fn test_industrial_end_to_end_multiplier_chain() {
    let factors = FactorSet {
        green: 0.0,
        building: 100.0,
        water: 0.0,
        vehicles: 100.0,
        industrial: 100.0,
        energy: 100.0,
        congestion: 0.0,
        public_transport: 0.0,
    };
    let mut twin = TestTwin::empty()
        .with_grid(single_industrial_cell(50.0))
        .with_factors(factors);
    twin.act(TwinAction::SetFactor {
        factor: Factor::Green,
        value: 0.0,
    });
    twin.assert_last_success();

    let expected = 50.0 * 1.0 * 1.5 * 1.0 * 1.4 * 1.75 * 1.5 * 0.8 * 1.2;
    let emission = twin.cell(CellId::new(0, 0)).emission;
    assert!(
        (emission - expected).abs() < 1e-9,
        "expected {expected}, got {emission}"
    );
}

#[test]
fn test_out_of_range_factor_warns_but_applies() {
    let mut twin = TestTwin::new();
    let result = twin.act(TwinAction::SetFactor {
        factor: Factor::Green,
        value: 400.0,
    });
    assert!(result.warning().is_some(), "got {result:?}");
    assert_eq!(twin.factors().green, 400.0);
    // 1 - 400/200 < 0: every emission floors at zero.
    assert!(twin.emissions().iter().all(|&e| e == 0.0));
    twin.assert_emissions_non_negative();
}

#[test]
fn test_non_finite_factor_rejected() {
    let mut twin = TestTwin::new();
    let before = twin.emissions();
    twin.act(TwinAction::SetFactor {
        factor: Factor::Energy,
        value: f64::NAN,
    });
    assert!(matches!(
        twin.last_result(),
        ActionResult::Error(ActionError::InvalidParameter(_))
    ));
    assert_eq!(twin.factors().energy, FactorSet::default().energy);
    assert_eq!(twin.emissions(), before);
}

#[test]
fn test_fixed_base_mode_is_repeatable() {
    let mut twin = TestTwin::new();
    twin.act(TwinAction::SetFactor {
        factor: Factor::Vehicles,
        value: 20.0,
    });
    let first = twin.emissions();
    twin.act(TwinAction::SetFactor {
        factor: Factor::Vehicles,
        value: 20.0,
    });
    assert_eq!(twin.emissions(), first);
}

#[test]
fn test_redraw_mode_changes_emissions_for_same_factors() {
    let mut twin = TestTwin::with_config(SimulationConfig {
        seed: Some(5),
        base_mode: BaseEmissionMode::RedrawEachRecalc,
    });
    twin.act(TwinAction::SetFactor {
        factor: Factor::Vehicles,
        value: 20.0,
    });
    let first = twin.emissions();
    twin.act(TwinAction::SetFactor {
        factor: Factor::Vehicles,
        value: 20.0,
    });
    assert_ne!(twin.emissions(), first);
    twin.assert_emissions_non_negative();
}

// -----------------------------------------------------------------------
// Reset
// -----------------------------------------------------------------------

#[test]
fn test_reset_restores_defaults_and_recalculates() {
    let mut twin = TestTwin::new();
    twin.act(TwinAction::SetFactor {
        factor: Factor::Industrial,
        value: 100.0,
    });
    twin.act(TwinAction::ResetFactors);
    twin.assert_last_success();
    twin.assert_latest_notice("Parameters reset to default");

    assert_eq!(*twin.factors(), FactorSet::default());
    let defaults = FactorSet::default();
    for cell in twin.grid().cells() {
        assert_eq!(
            cell.emission,
            emission_from_base(cell.base_emission, cell.category, &defaults)
        );
    }
}

// -----------------------------------------------------------------------
// Deferred recalculation
// -----------------------------------------------------------------------

#[test]
fn test_apply_factors_waits_one_second() {
    let mut twin = TestTwin::new().with_factors(FactorSet::uniform(80.0));
    let before = twin.emissions();

    twin.act(TwinAction::ApplyFactors);
    twin.assert_last_success();
    twin.assert_latest_notice("Recalculating emissions and generating recommendations...");
    assert!(twin.pending_recalc().is_pending());

    twin.elapse(Duration::from_millis(400));
    assert_eq!(twin.emissions(), before, "recalculated too early");
    assert!(twin.recommendations().items.is_empty());

    twin.elapse(Duration::from_millis(700));
    assert_ne!(twin.emissions(), before);
    assert!(!twin.pending_recalc().is_pending());
    assert_eq!(twin.recommendations().items.len(), 4);
    twin.assert_latest_notice("Recommendations generated successfully!");
}

#[test]
fn test_recommendations_follow_highest_emitters() {
    let mut twin = TestTwin::new();
    twin.act(TwinAction::ApplyFactors);
    twin.elapse(Duration::from_secs(1));

    let mut emissions = twin.emissions();
    emissions.sort_by(|a, b| b.total_cmp(a));
    let recommended: Vec<f64> = twin
        .recommendations()
        .items
        .iter()
        .map(|r| r.emission)
        .collect();
    assert_eq!(recommended, emissions[..4].to_vec());
}

#[test]
fn test_cancel_drops_pending_recalc() {
    let mut twin = TestTwin::new().with_factors(FactorSet::uniform(80.0));
    let before = twin.emissions();

    twin.act(TwinAction::ApplyFactors);
    twin.act(TwinAction::CancelRecalc);
    twin.assert_last_success();

    twin.elapse(Duration::from_secs(3));
    assert_eq!(twin.emissions(), before);
    assert!(twin.recommendations().items.is_empty());

    twin.act(TwinAction::CancelRecalc);
    twin.assert_last_error(ActionError::NothingPending);
}

#[test]
fn test_reapply_restarts_delay() {
    let mut twin = TestTwin::new().with_factors(FactorSet::uniform(80.0));
    let before = twin.emissions();

    twin.act(TwinAction::ApplyFactors);
    twin.elapse(Duration::from_millis(800));
    twin.act(TwinAction::ApplyFactors);
    twin.elapse(Duration::from_millis(500));
    assert_eq!(twin.emissions(), before);

    twin.elapse(Duration::from_millis(600));
    assert_ne!(twin.emissions(), before);
}
