//! Vesting schedule validation.

use crate::error::{EngineError, EngineResult};
use crate::models::VestingSchedule;

/// Validates that a vesting schedule is internally consistent.
///
/// # Arguments
///
/// * `schedule` - The schedule to validate
///
/// # Returns
///
/// Returns `Ok(())` for a consistent schedule, or an error if:
/// - `cliff_months` is negative (`InvalidSchedule`)
/// - `vesting_months` does not exceed `cliff_months` (`InvalidSchedule`)
///
/// Policy validity needs no check here: [`crate::models::VestingPolicy`] is a
/// closed enum, so unknown policies are rejected during deserialization.
pub fn validate_schedule(schedule: &VestingSchedule) -> EngineResult<()> {
    if schedule.cliff_months < 0 {
        return Err(EngineError::InvalidSchedule {
            field: "cliff_months".to_string(),
            message: format!("cannot be negative, got {}", schedule.cliff_months),
        });
    }

    if schedule.vesting_months <= schedule.cliff_months {
        return Err(EngineError::InvalidSchedule {
            field: "vesting_months".to_string(),
            message: format!(
                "must be greater than cliff_months ({}), got {}",
                schedule.cliff_months, schedule.vesting_months
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VestingPolicy;

    fn schedule(cliff_months: i32, vesting_months: i32) -> VestingSchedule {
        VestingSchedule {
            cliff_months,
            vesting_months,
            policy: VestingPolicy::Linear,
        }
    }

    /// VS-001: standard four-year schedule is valid
    #[test]
    fn test_standard_schedule_is_valid() {
        assert!(validate_schedule(&schedule(12, 48)).is_ok());
    }

    /// VS-002: zero cliff is valid
    #[test]
    fn test_zero_cliff_is_valid() {
        assert!(validate_schedule(&schedule(0, 36)).is_ok());
    }

    /// VS-003: negative cliff is rejected
    #[test]
    fn test_negative_cliff_is_rejected() {
        let result = validate_schedule(&schedule(-1, 48));
        match result.unwrap_err() {
            EngineError::InvalidSchedule { field, .. } => {
                assert_eq!(field, "cliff_months");
            }
            other => panic!("Expected InvalidSchedule, got {:?}", other),
        }
    }

    /// VS-004: vesting months equal to cliff is rejected
    #[test]
    fn test_vesting_equal_to_cliff_is_rejected() {
        let result = validate_schedule(&schedule(12, 12));
        match result.unwrap_err() {
            EngineError::InvalidSchedule { field, .. } => {
                assert_eq!(field, "vesting_months");
            }
            other => panic!("Expected InvalidSchedule, got {:?}", other),
        }
    }

    /// VS-005: vesting months shorter than cliff is rejected
    #[test]
    fn test_vesting_shorter_than_cliff_is_rejected() {
        assert!(validate_schedule(&schedule(24, 12)).is_err());
    }
}
