//! Shared result cache.
//!
//! This module provides the [`ResultCache`] type that stores vesting outcomes
//! keyed by employee ID. Every access path goes through the interior lock, so
//! concurrent batch workers can publish results without coordination of their
//! own.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::error::{EngineError, EngineResult};
use crate::models::VestingOutcome;

/// A synchronization-safe store of vesting outcomes keyed by employee ID.
///
/// Readers proceed in parallel; writers take the lock exclusively. A poisoned
/// lock is recovered rather than propagated, since an outcome write is atomic
/// at the map level and cannot leave an entry half-updated.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: RwLock<HashMap<String, VestingOutcome>>,
}

impl ResultCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an outcome, replacing any previous outcome for the same employee.
    pub fn put(&self, outcome: VestingOutcome) {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(outcome.employee_id.clone(), outcome);
    }

    /// Returns the cached outcome for an employee, if one exists.
    pub fn get(&self, employee_id: &str) -> Option<VestingOutcome> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(employee_id).cloned()
    }

    /// Returns the cached outcomes for all requested employees.
    ///
    /// The lookup is all-or-nothing under a single read lock: the first
    /// missing employee fails the whole call with `ResultNotFound` and no
    /// partial map is returned.
    pub fn get_many(
        &self,
        employee_ids: &[String],
    ) -> EngineResult<HashMap<String, VestingOutcome>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);

        let mut results = HashMap::with_capacity(employee_ids.len());
        for employee_id in employee_ids {
            match entries.get(employee_id) {
                Some(outcome) => {
                    results.insert(employee_id.clone(), outcome.clone());
                }
                None => {
                    return Err(EngineError::ResultNotFound {
                        employee_id: employee_id.clone(),
                    });
                }
            }
        }

        Ok(results)
    }

    /// Discards every cached outcome.
    pub fn reset(&self) {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *entries = HashMap::new();
    }

    /// Returns the number of cached outcomes.
    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.len()
    }

    /// Returns true if the cache holds no outcomes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn create_outcome(employee_id: &str, vested: i64) -> VestingOutcome {
        VestingOutcome {
            employee_id: employee_id.to_string(),
            vested_units: vested,
            unvested_units: 48000 - vested,
            next_vest_date: None,
            as_of_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_put_then_get() {
        let cache = ResultCache::new();
        cache.put(create_outcome("emp001", 12000));

        let outcome = cache.get("emp001").unwrap();
        assert_eq!(outcome.vested_units, 12000);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let cache = ResultCache::new();
        assert!(cache.get("emp999").is_none());
    }

    #[test]
    fn test_put_replaces_existing_entry() {
        let cache = ResultCache::new();
        cache.put(create_outcome("emp001", 12000));
        cache.put(create_outcome("emp001", 16000));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("emp001").unwrap().vested_units, 16000);
    }

    #[test]
    fn test_get_many_returns_all_requested() {
        let cache = ResultCache::new();
        cache.put(create_outcome("emp001", 12000));
        cache.put(create_outcome("emp002", 8000));
        cache.put(create_outcome("emp003", 4000));

        let ids = vec!["emp001".to_string(), "emp003".to_string()];
        let results = cache.get_many(&ids).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results["emp001"].vested_units, 12000);
        assert_eq!(results["emp003"].vested_units, 4000);
    }

    #[test]
    fn test_get_many_fails_on_first_missing_id() {
        let cache = ResultCache::new();
        cache.put(create_outcome("emp001", 12000));

        let ids = vec!["emp001".to_string(), "emp999".to_string()];
        match cache.get_many(&ids).unwrap_err() {
            EngineError::ResultNotFound { employee_id } => {
                assert_eq!(employee_id, "emp999");
            }
            other => panic!("Expected ResultNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_reset_clears_all_entries() {
        let cache = ResultCache::new();
        cache.put(create_outcome("emp001", 12000));
        cache.put(create_outcome("emp002", 8000));

        cache.reset();

        assert!(cache.is_empty());
        assert!(cache.get("emp001").is_none());
    }

    #[test]
    fn test_len_and_is_empty() {
        let cache = ResultCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);

        cache.put(create_outcome("emp001", 12000));
        assert!(!cache.is_empty());
        assert_eq!(cache.len(), 1);
    }
}
