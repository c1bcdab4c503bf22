//! Application state for the Equity Vesting Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::service::VestingService;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the vesting service and its result cache.
#[derive(Clone)]
pub struct AppState {
    /// The vesting service shared by all handlers.
    service: Arc<VestingService>,
}

impl AppState {
    /// Creates a new application state wrapping the given service.
    pub fn new(service: VestingService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Returns a reference to the vesting service.
    pub fn service(&self) -> &VestingService {
        &self.service
    }
}
