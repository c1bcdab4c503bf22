//! Batch processing service for the Equity Vesting Engine.
//!
//! This module contains the [`VestingService`] that fans a batch of employees
//! out across tokio tasks, publishes each outcome through the shared
//! [`ResultCache`], and reports the first failure once every worker has
//! finished.

mod cache;

pub use cache::ResultCache;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::calculation::calculate_vesting;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, VestingOutcome};

/// Calculates vesting for batches of employees and caches the outcomes.
#[derive(Debug, Default)]
pub struct VestingService {
    cache: Arc<ResultCache>,
}

impl VestingService {
    /// Creates a service with an empty result cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a batch of employees concurrently as of the given date.
    ///
    /// One task is spawned per employee. Every task runs to completion
    /// regardless of failures elsewhere in the batch, and every successful
    /// outcome is published to the cache even when a sibling fails. The
    /// first error observed while joining is returned; later errors are
    /// logged and dropped. There is no cancellation.
    ///
    /// # Arguments
    ///
    /// * `employees` - The employees to evaluate
    /// * `as_of_date` - The date to evaluate every grant at
    pub async fn process_batch(
        &self,
        employees: &[Employee],
        as_of_date: NaiveDate,
    ) -> EngineResult<()> {
        info!(
            batch_size = employees.len(),
            as_of_date = %as_of_date,
            "Processing vesting batch"
        );

        let mut workers = JoinSet::new();
        for employee in employees {
            let employee = employee.clone();
            let cache = Arc::clone(&self.cache);
            workers.spawn(async move {
                let outcome = calculate_vesting(&employee, as_of_date)?;
                cache.put(outcome);
                Ok::<(), EngineError>(())
            });
        }

        let mut first_error: Option<EngineError> = None;
        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    warn!(error = %err, "Vesting calculation failed");
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
                Err(join_err) => {
                    warn!(error = %join_err, "Batch worker did not complete");
                    if first_error.is_none() {
                        first_error = Some(EngineError::WorkerFailed {
                            message: join_err.to_string(),
                        });
                    }
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => {
                info!(cached_results = self.cache.len(), "Batch completed");
                Ok(())
            }
        }
    }

    /// Returns the cached outcome for one employee.
    pub fn get_result(&self, employee_id: &str) -> EngineResult<VestingOutcome> {
        self.cache
            .get(employee_id)
            .ok_or_else(|| EngineError::ResultNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    /// Returns the cached outcomes for all requested employees.
    ///
    /// Fails with `ResultNotFound` on the first employee without a cached
    /// outcome.
    pub fn get_batch_results(
        &self,
        employee_ids: &[String],
    ) -> EngineResult<HashMap<String, VestingOutcome>> {
        self.cache.get_many(employee_ids)
    }

    /// Discards every cached outcome.
    pub fn reset_cache(&self) {
        self.cache.reset();
        info!("Result cache cleared");
    }

    /// Returns the number of cached outcomes.
    pub fn cached_results(&self) -> usize {
        self.cache.len()
    }
}
