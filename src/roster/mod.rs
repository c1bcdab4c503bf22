//! Roster configuration for the Equity Vesting Engine.
//!
//! This module provides loading of employee rosters from YAML files.

mod loader;

pub use loader::{Roster, RosterLoader};
