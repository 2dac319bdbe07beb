//! Application state shared across handlers.
//!
//! [`AppState`] holds the [`ComputeService`] behind an `Arc`. The service is
//! immutable after startup, so handlers share it without locking.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::error::ApiError;
use crate::service::ComputeService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ComputeService>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Result<Self, ApiError> {
        Ok(AppState {
            service: Arc::new(ComputeService::new(config)?),
        })
    }

    pub fn official_email(&self) -> &str {
        self.service.official_email()
    }
}
