//! Randomness for the low bits of each ID

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::{Result, SimpleflakeError};

/// Source of uniformly distributed random integers.
///
/// This abstraction allows plugging in the operating system generator or a
/// deterministic double in tests.
pub trait EntropySource {
    /// Returns a value drawn uniformly from `[0, max]`.
    fn random_up_to(&self, max: u64) -> Result<u64>;
}

/// Cryptographically secure randomness straight from the operating system.
///
/// Every draw is a fresh read, so a failing OS source surfaces as
/// [`SimpleflakeError::EntropyUnavailable`] rather than falling back to a
/// predictable generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl EntropySource for OsRandom {
    fn random_up_to(&self, max: u64) -> Result<u64> {
        if max == 0 {
            return Ok(0);
        }
        // smallest all-ones mask covering max; rejection keeps the draw uniform
        let mask = u64::MAX >> max.leading_zeros();
        loop {
            let candidate = OsRng
                .try_next_u64()
                .map_err(|e| SimpleflakeError::EntropyUnavailable {
                    reason: e.to_string(),
                })?
                & mask;
            if candidate <= max {
                return Ok(candidate);
            }
        }
    }
}
