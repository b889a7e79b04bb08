//! Sequence subject
//!
//! An ordered, fixed-length list of integers that sort algorithms reorder in
//! place. Values need not be unique.

use crate::errors::{Result, TraceError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Range used for randomly generated sequences
pub const RANDOM_VALUE_RANGE: RangeInclusive<i64> = 1..=100;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence {
    values: Vec<i64>,
}

impl Sequence {
    pub fn new(values: Vec<i64>) -> Self {
        Sequence { values }
    }

    /// Generate `len` values uniformly drawn from [`RANDOM_VALUE_RANGE`]
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let values = (0..len)
            .map(|_| rng.gen_range(RANDOM_VALUE_RANGE))
            .collect();
        Sequence { values }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Exclusive access for in-place sorting
    pub(crate) fn values_mut(&mut self) -> &mut [i64] {
        &mut self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }

    pub fn into_vec(self) -> Vec<i64> {
        self.values
    }
}

impl From<Vec<i64>> for Sequence {
    fn from(values: Vec<i64>) -> Self {
        Sequence::new(values)
    }
}

/// Parses comma-separated integers, e.g. `"5, 3, 8, 6, 2"`.
/// Blank input yields an empty sequence.
impl FromStr for Sequence {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Sequence::default());
        }
        s.split(',')
            .map(|token| {
                let token = token.trim();
                token
                    .parse::<i64>()
                    .map_err(|_| TraceError::InvalidSequence {
                        token: token.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()
            .map(Sequence::new)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}
