//! Computed result values.
//!
//! [`ComputedValue`] serializes to the plain JSON the envelope carries in
//! `data`: an array of numbers, a number, or a string. Big integers are
//! emitted as exact JSON numbers, never strings or floats.

use std::fmt::Display;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint};
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// The successful result of one compute request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComputedValue {
    /// Fibonacci terms.
    Series(Vec<BigUint>),
    /// Integers kept from the input (prime filter).
    Integers(Vec<BigInt>),
    /// LCM or HCF of a list.
    Integer(BigUint),
    /// Single-word AI answer.
    Word(String),
}

fn big_number<E: serde::ser::Error, N: Display>(n: &N) -> Result<serde_json::Number, E> {
    serde_json::Number::from_str(&n.to_string()).map_err(E::custom)
}

impl Serialize for ComputedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ComputedValue::Series(terms) => serialize_numbers(terms, serializer),
            ComputedValue::Integers(nums) => serialize_numbers(nums, serializer),
            ComputedValue::Integer(n) => big_number::<S::Error, _>(n)?.serialize(serializer),
            ComputedValue::Word(word) => serializer.serialize_str(word),
        }
    }
}

fn serialize_numbers<S: Serializer, N: Display>(nums: &[N], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(nums.len()))?;
    for n in nums {
        seq.serialize_element(&big_number::<S::Error, _>(n)?)?;
    }
    seq.end()
}

impl From<Vec<BigUint>> for ComputedValue {
    fn from(terms: Vec<BigUint>) -> Self {
        ComputedValue::Series(terms)
    }
}

impl From<Vec<BigInt>> for ComputedValue {
    fn from(nums: Vec<BigInt>) -> Self {
        ComputedValue::Integers(nums)
    }
}

impl From<BigUint> for ComputedValue {
    fn from(n: BigUint) -> Self {
        ComputedValue::Integer(n)
    }
}

impl From<String> for ComputedValue {
    fn from(word: String) -> Self {
        ComputedValue::Word(word)
    }
}
