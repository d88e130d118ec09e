use rand::Rng;

use crate::config::TRIALS_PER_YEAR;

use super::state::{GrowthFactor, GrowthRates, ProjectionPoint};

/// Apply every growth factor once, in [`GrowthFactor::ALL`] order.
pub fn run_trial<R: Rng + ?Sized>(start: f64, rates: &GrowthRates, rng: &mut R) -> f64 {
    GrowthFactor::ALL.iter().fold(start, |value, &factor| {
        let spread = factor.noise_spread();
        let noise = rng.gen_range(-spread..spread);
        value * (1.0 + rates.get(factor) / 100.0 * (1.0 + noise))
    })
}

/// Mean of `TRIALS_PER_YEAR` trials starting from `base`.
pub fn project_year<R: Rng + ?Sized>(base: f64, rates: &GrowthRates, rng: &mut R) -> f64 {
    let sum: f64 = (0..TRIALS_PER_YEAR)
        .map(|_| run_trial(base, rates, rng))
        .sum();
    sum / TRIALS_PER_YEAR as f64
}

/// Project `years` years ahead of `start`. The first point is labelled
/// `first_year`; each later year starts from the previous year's mean.
/// Zero years yields an empty projection; callers validate the horizon.
pub fn run_projection<R: Rng + ?Sized>(
    start: f64,
    rates: &GrowthRates,
    years: u32,
    first_year: i32,
    rng: &mut R,
) -> Vec<ProjectionPoint> {
    let mut points = Vec::with_capacity(years as usize);
    let mut base = start;
    for offset in 0..years {
        let emission = project_year(base, rates, rng);
        points.push(ProjectionPoint {
            year: first_year + offset as i32,
            emission,
        });
        base = emission;
    }
    points
}
