//! Backloaded vesting accrual.
//!
//! This module implements the backloaded policy: annual tranches of
//! 10%, 20%, 30% and 40% for the four years following the cliff.

/// The tranche percentages for years one through four past the cliff.
pub const BACKLOADED_TRANCHE_PERCENTS: [f64; 4] = [0.10, 0.20, 0.30, 0.40];

/// Computes vested units under the backloaded policy.
///
/// The cumulative percentage sums every tranche up to and including the year
/// currently in progress; remainder months then add a pro-rata share of that
/// same in-progress tranche on top. At an exact year boundary (no remainder)
/// only the tranche sum applies. Vested units are the floor of the grant
/// multiplied by the cumulative percentage, capped at the grant itself.
///
/// # Arguments
///
/// * `total_units` - The total number of units in the grant
/// * `months_past_cliff` - Whole months elapsed since the cliff
pub fn backloaded_vested_units(total_units: i64, months_past_cliff: i32) -> i64 {
    if months_past_cliff < 0 {
        return 0;
    }

    let full_years = (months_past_cliff / 12) as usize;
    let remainder_months = months_past_cliff % 12;

    let mut total_percent: f64 = BACKLOADED_TRANCHE_PERCENTS
        .iter()
        .take(full_years + 1)
        .sum();

    if full_years < BACKLOADED_TRANCHE_PERCENTS.len() && remainder_months > 0 {
        total_percent +=
            BACKLOADED_TRANCHE_PERCENTS[full_years] * remainder_months as f64 / 12.0;
    }

    let vested = (total_units as f64 * total_percent) as i64;
    vested.min(total_units)
}
