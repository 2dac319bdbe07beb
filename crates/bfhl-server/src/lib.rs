//! HTTP/JSON front end for the bfhl compute service.
//!
//! Provides the single compute endpoint plus a health probe. This crate
//! contains configuration loading, the AI answer resolver, the dispatch
//! service, the response envelope, error mapping, and route definitions.

pub mod answer_resolver;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
