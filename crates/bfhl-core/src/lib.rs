//! Request model and pure computations for the bfhl compute service.
//!
//! Holds everything that does not touch the network: the numeric kernels,
//! the answer-normalizing text helpers, the validated request type, the
//! result value, and the shared error enum.

pub mod error;
pub mod kernels;
pub mod request;
pub mod text;
pub mod value;

// Re-export commonly used types
pub use error::CoreError;
pub use num_bigint::{BigInt, BigUint};
pub use request::{FunctionCall, FunctionKey, FunctionRequestBody};
pub use value::ComputedValue;
