//! Compute request model.
//!
//! [`FunctionRequestBody`] mirrors the JSON wire shape: five optional fields,
//! any of which may be absent or `null`. [`FunctionCall`] is the validated
//! form with exactly one active key, built by [`FunctionCall::try_from`].
//! Once a `FunctionCall` exists the "exactly one key" rule and all per-key
//! bounds hold, so evaluation never re-checks them.
//!
//! Integer fields accept JSON integers of any magnitude. Strings and numbers
//! with a fraction or exponent are rejected, never coerced.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::de::{self, Deserializer, Unexpected};
use serde::Deserialize;

use crate::error::CoreError;

/// Largest accepted Fibonacci term count.
pub const MAX_FIBONACCI_TERMS: usize = 1000;

/// Largest accepted integer-list length for `prime`, `lcm`, `hcf`.
pub const MAX_LIST_LEN: usize = 1000;

/// Largest accepted question length, in characters, before trimming.
pub const MAX_QUESTION_CHARS: usize = 300;

/// Raw compute request as it arrives on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FunctionRequestBody {
    #[serde(default, deserialize_with = "json_int::option")]
    pub fibonacci: Option<BigInt>,
    #[serde(default, deserialize_with = "json_int::option_vec")]
    pub prime: Option<Vec<BigInt>>,
    #[serde(default, deserialize_with = "json_int::option_vec")]
    pub lcm: Option<Vec<BigInt>>,
    #[serde(default, deserialize_with = "json_int::option_vec")]
    pub hcf: Option<Vec<BigInt>>,
    #[serde(rename = "AI", default)]
    pub ai: Option<String>,
}

/// Exact integer decoding through `serde_json::Number` (arbitrary precision).
mod json_int {
    use super::*;

    fn parse<E: de::Error>(n: serde_json::Number) -> Result<BigInt, E> {
        let text = n.to_string();
        BigInt::from_str(&text)
            .map_err(|_| E::invalid_type(Unexpected::Other(&format!("number {}", text)), &"an integer"))
    }

    pub fn option<'de, D: Deserializer<'de>>(d: D) -> Result<Option<BigInt>, D::Error> {
        Option::<serde_json::Number>::deserialize(d)?
            .map(parse)
            .transpose()
    }

    pub fn option_vec<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<BigInt>>, D::Error> {
        Option::<Vec<serde_json::Number>>::deserialize(d)?
            .map(|nums| nums.into_iter().map(parse).collect())
            .transpose()
    }
}

impl FunctionRequestBody {
    /// Keys whose value is present, in wire order.
    pub fn present_keys(&self) -> Vec<FunctionKey> {
        let mut keys = Vec::new();
        if self.fibonacci.is_some() {
            keys.push(FunctionKey::Fibonacci);
        }
        if self.prime.is_some() {
            keys.push(FunctionKey::Prime);
        }
        if self.lcm.is_some() {
            keys.push(FunctionKey::Lcm);
        }
        if self.hcf.is_some() {
            keys.push(FunctionKey::Hcf);
        }
        if self.ai.is_some() {
            keys.push(FunctionKey::Ai);
        }
        keys
    }
}

/// One of the five mutually exclusive functional keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKey {
    Fibonacci,
    Prime,
    Lcm,
    Hcf,
    Ai,
}

impl FunctionKey {
    /// The JSON field name for this key.
    pub fn as_str(self) -> &'static str {
        match self {
            FunctionKey::Fibonacci => "fibonacci",
            FunctionKey::Prime => "prime",
            FunctionKey::Lcm => "lcm",
            FunctionKey::Hcf => "hcf",
            FunctionKey::Ai => "AI",
        }
    }
}

impl fmt::Display for FunctionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated compute request with exactly one active key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionCall {
    /// Number of Fibonacci terms, in `0..=1000`.
    Fibonacci(usize),
    Prime(Vec<BigInt>),
    Lcm(Vec<BigInt>),
    Hcf(Vec<BigInt>),
    /// Trimmed, non-empty question.
    Ai(String),
}

impl FunctionCall {
    pub fn key(&self) -> FunctionKey {
        match self {
            FunctionCall::Fibonacci(_) => FunctionKey::Fibonacci,
            FunctionCall::Prime(_) => FunctionKey::Prime,
            FunctionCall::Lcm(_) => FunctionKey::Lcm,
            FunctionCall::Hcf(_) => FunctionKey::Hcf,
            FunctionCall::Ai(_) => FunctionKey::Ai,
        }
    }
}

impl TryFrom<FunctionRequestBody> for FunctionCall {
    type Error = CoreError;

    fn try_from(body: FunctionRequestBody) -> Result<Self, Self::Error> {
        if body.present_keys().len() != 1 {
            return Err(CoreError::invalid("Provide exactly one functional key"));
        }

        match body {
            FunctionRequestBody {
                fibonacci: Some(n), ..
            } => {
                match n.to_usize() {
                    Some(terms) if terms <= MAX_FIBONACCI_TERMS => Ok(FunctionCall::Fibonacci(terms)),
                    _ => Err(CoreError::invalid("fibonacci out of allowed range")),
                }
            }
            FunctionRequestBody {
                prime: Some(nums), ..
            } => validate_list(FunctionKey::Prime, nums).map(FunctionCall::Prime),
            FunctionRequestBody { lcm: Some(nums), .. } => {
                validate_list(FunctionKey::Lcm, nums).map(FunctionCall::Lcm)
            }
            FunctionRequestBody { hcf: Some(nums), .. } => {
                validate_list(FunctionKey::Hcf, nums).map(FunctionCall::Hcf)
            }
            FunctionRequestBody { ai: Some(q), .. } => {
                let trimmed = q.trim();
                if trimmed.is_empty() || q.chars().count() > MAX_QUESTION_CHARS {
                    return Err(CoreError::invalid("AI must be non-empty question"));
                }
                Ok(FunctionCall::Ai(trimmed.to_string()))
            }
            _ => Err(CoreError::invalid("Provide exactly one functional key")),
        }
    }
}

fn validate_list(key: FunctionKey, nums: Vec<BigInt>) -> Result<Vec<BigInt>, CoreError> {
    if nums.is_empty() || nums.len() > MAX_LIST_LEN {
        return Err(CoreError::invalid(format!("{} array size invalid", key)));
    }
    Ok(nums)
}
