//! API schema types for request/response definitions.
//!
//! The compute request body itself lives in `bfhl_core::request`; this
//! module holds the response side.

pub mod envelope;
