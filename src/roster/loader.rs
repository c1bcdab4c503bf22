//! Roster loading functionality.
//!
//! This module provides the [`RosterLoader`] type for loading employee
//! rosters from YAML files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calculation::validate_schedule;
use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// An employee roster as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    /// The employees listed in the roster file.
    pub employees: Vec<Employee>,
}

/// Loads and provides access to an employee roster.
///
/// # File Format
///
/// The roster is a single YAML file:
/// ```text
/// employees:
///   - id: emp001
///     name: Alice Johnson
///     start_date: 2021-01-01
///     total_units: 48000
///     schedule:
///       cliff_months: 12
///       vesting_months: 48
///       policy: linear
/// ```
///
/// # Example
///
/// ```no_run
/// use vesting_engine::roster::RosterLoader;
///
/// let loader = RosterLoader::load("./config/roster.yaml").unwrap();
/// for employee in loader.employees() {
///     println!("{}: {} units", employee.name, employee.total_units);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RosterLoader {
    roster: Roster,
}

impl RosterLoader {
    /// Loads a roster from the specified YAML file.
    ///
    /// Every schedule in the roster is validated; the first inconsistent
    /// schedule fails the whole load.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the roster file (e.g., "./config/roster.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `RosterLoader` instance on success, or an error if:
    /// - The file is missing (`RosterNotFound`)
    /// - The file contains invalid YAML (`RosterParseError`)
    /// - Any employee carries an inconsistent schedule (`InvalidSchedule`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::RosterNotFound {
            path: path_str.clone(),
        })?;

        let roster: Roster =
            serde_yaml::from_str(&content).map_err(|e| EngineError::RosterParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        for employee in &roster.employees {
            validate_schedule(&employee.schedule)?;
        }

        Ok(Self { roster })
    }

    /// Returns the loaded roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the employees in the roster.
    pub fn employees(&self) -> &[Employee] {
        &self.roster.employees
    }
}
