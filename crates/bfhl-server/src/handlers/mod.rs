//! HTTP handler modules for the bfhl API.
//!
//! Handlers extract the request, delegate to [`crate::service::ComputeService`],
//! and wrap the outcome in the response envelope.

pub mod compute;
pub mod fallback;
pub mod health;
