use chrono::{DateTime, Utc};

use crate::config::SimpleflakeConfig;
use crate::id::SimpleflakeId;

/// Read `length` bits of `data` starting at bit `shift`
#[inline(always)]
pub const fn extract_bits(data: u64, shift: u32, length: u32) -> u64 {
    let bitmask = SimpleflakeConfig::calculate_mask(length) << shift;
    (data & bitmask) >> shift
}

/// Simpleflake component extractor bound to one configuration snapshot
#[derive(Debug, Copy, Clone)]
pub struct SimpleflakeExtractor {
    config: SimpleflakeConfig,
}

impl SimpleflakeExtractor {
    pub fn new(config: SimpleflakeConfig) -> Self {
        Self { config }
    }

    /// Raw timestamp field, milliseconds since the configured epoch
    #[inline(always)]
    pub fn relative_timestamp(&self, id: SimpleflakeId) -> u64 {
        extract_bits(
            id.as_u64(),
            self.config.random_bits(),
            self.config.timestamp_bits(),
        )
    }

    /// Absolute timestamp in milliseconds since the Unix epoch
    #[inline(always)]
    pub fn timestamp(&self, id: SimpleflakeId) -> i64 {
        // the field is at most 63 bits wide, so it always fits in an i64
        (self.relative_timestamp(id) as i64).wrapping_add(self.config.epoch())
    }

    /// Extract random component from a Simpleflake ID
    #[inline(always)]
    pub fn random(&self, id: SimpleflakeId) -> u64 {
        extract_bits(id.as_u64(), 0, self.config.random_bits())
    }

    /// Decompose into `(absolute_timestamp_ms, random)`
    #[inline]
    pub fn decompose(&self, id: SimpleflakeId) -> (i64, u64) {
        (self.timestamp(id), self.random(id))
    }

    pub fn datetime(&self, id: SimpleflakeId) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp(id))
    }
}
