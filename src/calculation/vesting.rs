//! Vesting evaluation for a single employee.
//!
//! This module ties the calendar math and the accrual policies together
//! into the engine's core operation.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, VestingOutcome, VestingPolicy};

use super::backloaded::backloaded_vested_units;
use super::calendar::{add_months, months_between};
use super::linear::linear_vested_units;

/// Evaluates an employee's grant as of the given date.
///
/// Before the cliff nothing is vested and the next vest date is the cliff
/// date itself. Past the cliff, vested units follow the schedule's policy
/// and the next vest date is one month after the evaluation date until the
/// grant is fully vested.
///
/// # Arguments
///
/// * `employee` - The employee whose grant is evaluated
/// * `as_of_date` - The date to evaluate at
///
/// # Returns
///
/// Returns the [`VestingOutcome`] for the employee, or `InvalidGrant` if the
/// grant holds no units.
///
/// # Examples
///
/// ```
/// use vesting_engine::calculation::calculate_vesting;
/// use vesting_engine::models::{Employee, VestingPolicy, VestingSchedule};
/// use chrono::NaiveDate;
///
/// let employee = Employee {
///     id: "emp001".to_string(),
///     name: "Alice Johnson".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
///     total_units: 36000,
///     schedule: VestingSchedule {
///         cliff_months: 12,
///         vesting_months: 48,
///         policy: VestingPolicy::Linear,
///     },
/// };
///
/// let as_of = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// let outcome = calculate_vesting(&employee, as_of).unwrap();
/// assert_eq!(outcome.vested_units, 12000);
/// ```
pub fn calculate_vesting(employee: &Employee, as_of_date: NaiveDate) -> EngineResult<VestingOutcome> {
    if employee.total_units <= 0 {
        return Err(EngineError::InvalidGrant {
            employee_id: employee.id.clone(),
            total_units: employee.total_units,
        });
    }

    let schedule = &employee.schedule;
    let months_employed = months_between(employee.start_date, as_of_date);

    if months_employed < schedule.cliff_months {
        // Reached only when cliff_months > months_employed >= 0, so the cast is lossless.
        let cliff_date = add_months(employee.start_date, schedule.cliff_months as u32);
        return Ok(VestingOutcome {
            employee_id: employee.id.clone(),
            vested_units: 0,
            unvested_units: employee.total_units,
            next_vest_date: Some(cliff_date),
            as_of_date,
        });
    }

    let months_past_cliff = months_employed - schedule.cliff_months;
    let vested_units = match schedule.policy {
        VestingPolicy::Linear => linear_vested_units(
            employee.total_units,
            months_past_cliff,
            schedule.post_cliff_months(),
        ),
        VestingPolicy::Backloaded => {
            backloaded_vested_units(employee.total_units, months_past_cliff)
        }
    };

    let next_vest_date =
        (vested_units < employee.total_units).then(|| add_months(as_of_date, 1));

    Ok(VestingOutcome {
        employee_id: employee.id.clone(),
        vested_units,
        unvested_units: employee.total_units - vested_units,
        next_vest_date,
        as_of_date,
    })
}
