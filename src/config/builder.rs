//! SimpleflakeConfig builder for constructing configuration

use chrono::{DateTime, Utc};

use super::{validate_precision, SimpleflakeConfig, DEFAULT_EPOCH, DEFAULT_TIMESTAMP_BITS};
use crate::error::Result;

/// Builder for SimpleflakeConfig
#[derive(Debug)]
pub struct SimpleflakeConfigBuilder {
    timestamp_bits: u32,
    epoch: i64,
}

impl SimpleflakeConfigBuilder {
    /// Create a new SimpleflakeConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            timestamp_bits: DEFAULT_TIMESTAMP_BITS,
            epoch: DEFAULT_EPOCH,
        }
    }

    /// Set the number of timestamp bits (1-63)
    /// Random bits will be automatically set to (64 - timestamp_bits)
    pub fn timestamp_bits(mut self, bits: u32) -> Result<Self> {
        validate_precision(bits)?;
        self.timestamp_bits = bits;
        Ok(self)
    }

    /// Set the epoch in milliseconds since the Unix epoch
    pub const fn epoch(mut self, epoch: i64) -> Self {
        self.epoch = epoch;
        self
    }

    /// Set the epoch from an instant, truncated to whole milliseconds
    pub fn epoch_at(mut self, epoch: DateTime<Utc>) -> Self {
        self.epoch = epoch.timestamp_millis();
        self
    }

    /// Build the final SimpleflakeConfig
    pub fn build(self) -> SimpleflakeConfig {
        SimpleflakeConfig::layout(self.timestamp_bits, self.epoch)
    }
}

impl Default for SimpleflakeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
