//! Configuration for the Simpleflake codec

mod builder;

use chrono::{DateTime, TimeDelta, Utc};

pub use builder::SimpleflakeConfigBuilder;

use crate::error::{Result, SimpleflakeError};
use crate::id::SimpleflakeId;

/// Total width of an identifier
pub const TOTAL_BITS: u32 = 64;
/// Default timestamp width; leaves 23 random bits
pub const DEFAULT_TIMESTAMP_BITS: u32 = 41;
/// Default epoch: 2000-01-01T00:00:00Z in milliseconds since the Unix epoch
pub const DEFAULT_EPOCH: i64 = 946_684_800_000;
/// Narrowest accepted timestamp field
pub const MIN_TIMESTAMP_BITS: u32 = 1;
/// Widest accepted timestamp field
pub const MAX_TIMESTAMP_BITS: u32 = TOTAL_BITS - 1;

/// Bit layout and epoch shared by the encoder and the decoder.
///
/// Identifiers carry no version tag, so an ID only decodes meaningfully under
/// the exact configuration that built it. The timestamp field wraps silently
/// after [`wraparound_period`](Self::wraparound_period) has elapsed since the
/// epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleflakeConfig {
    timestamp_bits: u32,
    random_bits: u32,
    epoch: i64,
    timestamp_mask: u64,
    random_mask: u64,
}

impl SimpleflakeConfig {
    #[inline]
    pub(crate) const fn calculate_mask(bits: u32) -> u64 {
        (1u64 << bits) - 1
    }

    /// Create a config after checking the timestamp width
    pub(crate) fn new(timestamp_bits: u32, epoch: i64) -> Result<Self> {
        validate_precision(timestamp_bits)?;
        Ok(Self::layout(timestamp_bits, epoch))
    }

    /// `timestamp_bits` must already be within `[1, 63]`
    pub(crate) const fn layout(timestamp_bits: u32, epoch: i64) -> Self {
        let random_bits = TOTAL_BITS - timestamp_bits;
        Self {
            timestamp_bits,
            random_bits,
            epoch,
            timestamp_mask: Self::calculate_mask(timestamp_bits),
            random_mask: Self::calculate_mask(random_bits),
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> SimpleflakeConfigBuilder {
        SimpleflakeConfigBuilder::new()
    }

    /// Copy of this config with a different timestamp width
    pub fn with_precision(self, bits: u32) -> Result<Self> {
        Self::new(bits, self.epoch)
    }

    /// Copy of this config anchored at `epoch`, truncated to whole milliseconds
    pub fn with_epoch(self, epoch: DateTime<Utc>) -> Self {
        self.with_epoch_millis(epoch.timestamp_millis())
    }

    /// Copy of this config anchored at `epoch` milliseconds since the Unix epoch
    pub const fn with_epoch_millis(mut self, epoch: i64) -> Self {
        self.epoch = epoch;
        self
    }

    #[inline(always)]
    pub const fn timestamp_bits(&self) -> u32 {
        self.timestamp_bits
    }

    #[inline(always)]
    pub const fn random_bits(&self) -> u32 {
        self.random_bits
    }

    /// Epoch in milliseconds since 1970-01-01T00:00:00Z
    #[inline(always)]
    pub const fn epoch(&self) -> i64 {
        self.epoch
    }

    pub fn epoch_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.epoch)
    }

    /// Largest value the random field can hold
    #[inline(always)]
    pub const fn max_random(&self) -> u64 {
        self.random_mask
    }

    /// Largest relative timestamp before the field wraps
    #[inline(always)]
    pub const fn max_timestamp(&self) -> u64 {
        self.timestamp_mask
    }

    /// Span covered by the timestamp field: `2^timestamp_bits` milliseconds
    pub fn wraparound_period(&self) -> Option<TimeDelta> {
        let span = 1u64 << self.timestamp_bits;
        i64::try_from(span)
            .ok()
            .and_then(TimeDelta::try_milliseconds)
    }

    /// Instant at which the timestamp field wraps back to zero
    pub fn wraparound_at(&self) -> Option<DateTime<Utc>> {
        self.epoch_datetime()?
            .checked_add_signed(self.wraparound_period()?)
    }

    #[inline(always)]
    pub(crate) const fn random_shift(&self) -> u32 {
        self.random_bits
    }

    /// Pack a relative timestamp and a random value; overflowing bits are masked off
    #[inline(always)]
    pub(crate) const fn assemble_id(&self, relative_ts: i64, random: u64) -> SimpleflakeId {
        let ts = (relative_ts as u64) & self.timestamp_mask;
        SimpleflakeId::from_raw((ts << self.random_shift()) | (random & self.random_mask))
    }
}

impl Default for SimpleflakeConfig {
    fn default() -> Self {
        Self::layout(DEFAULT_TIMESTAMP_BITS, DEFAULT_EPOCH)
    }
}

pub(crate) fn validate_precision(bits: u32) -> Result<()> {
    if !(MIN_TIMESTAMP_BITS..=MAX_TIMESTAMP_BITS).contains(&bits) {
        return Err(SimpleflakeError::InvalidPrecision {
            bits,
            min: MIN_TIMESTAMP_BITS,
            max: MAX_TIMESTAMP_BITS,
        });
    }
    Ok(())
}
