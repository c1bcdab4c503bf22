//! Linear vesting accrual.
//!
//! This module implements the linear policy: equal monthly accrual between
//! the cliff and the end of the schedule.

/// Computes vested units under the linear policy.
///
/// Accrual is `total_units / post_cliff_months` per month, truncated toward
/// zero after multiplying by the months vested. Once the schedule is
/// complete the full grant is returned exactly, with no rounding residue.
///
/// # Arguments
///
/// * `total_units` - The total number of units in the grant
/// * `months_past_cliff` - Whole months elapsed since the cliff
/// * `post_cliff_months` - Months between the cliff and the end of the schedule
pub fn linear_vested_units(
    total_units: i64,
    months_past_cliff: i32,
    post_cliff_months: i32,
) -> i64 {
    let months_vested = months_past_cliff.min(post_cliff_months);
    if months_vested >= post_cliff_months {
        return total_units;
    }
    if months_vested <= 0 {
        return 0;
    }

    let units_per_month = total_units as f64 / post_cliff_months as f64;
    (units_per_month * months_vested as f64) as i64
}
