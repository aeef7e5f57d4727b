//! Simpleflake codec: builds IDs from the clock and entropy, decomposes them
//! back into parts.
//!
//! Split into modules for testability:
//! - `time` - Wall-clock source
//! - `entropy` - Random source for the low bits

mod entropy;
mod time;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
#[cfg(feature = "tracing")]
use tracing::instrument;

pub use entropy::{EntropySource, OsRandom};
pub use time::{SystemClock, TimeSource};

use crate::config::SimpleflakeConfig;
use crate::error::Result;
use crate::extractor::SimpleflakeExtractor;
use crate::id::SimpleflakeId;

/// Simpleflake codec owning a mutable configuration.
///
/// Each operation reads one snapshot of the configuration, so concurrent
/// callers never see a half-applied change. Changes apply to every ID built
/// or decomposed afterwards and never reinterpret IDs already handed out.
#[derive(Debug)]
pub struct Simpleflake<C = SystemClock, R = OsRandom> {
    config: RwLock<SimpleflakeConfig>,
    clock: C,
    entropy: R,
}

impl Simpleflake {
    /// Create with default configuration
    pub fn new() -> Self {
        Self::with_config(SimpleflakeConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: SimpleflakeConfig) -> Self {
        Self::with_sources(config, SystemClock, OsRandom)
    }
}

impl Default for Simpleflake {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, R> Simpleflake<C, R>
where
    C: TimeSource,
    R: EntropySource,
{
    /// Create with custom clock and entropy sources
    pub fn with_sources(config: SimpleflakeConfig, clock: C, entropy: R) -> Self {
        Self {
            config: RwLock::new(config),
            clock,
            entropy,
        }
    }

    /// Snapshot of the active configuration
    #[inline]
    pub fn config(&self) -> SimpleflakeConfig {
        *self.config.read()
    }

    pub fn set_config(&self, config: SimpleflakeConfig) {
        *self.config.write() = config;
        #[cfg(feature = "tracing")]
        tracing::debug!(?config, "configuration replaced");
    }

    /// Move the epoch to `epoch`, truncated to whole milliseconds
    pub fn set_epoch(&self, epoch: DateTime<Utc>) {
        self.set_epoch_millis(epoch.timestamp_millis());
    }

    pub fn set_epoch_millis(&self, epoch: i64) {
        let mut config = self.config.write();
        *config = config.with_epoch_millis(epoch);
        #[cfg(feature = "tracing")]
        tracing::debug!(epoch, "epoch changed");
    }

    /// Set the timestamp width; the random width becomes `64 - bits`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleflakeError::InvalidPrecision`](crate::SimpleflakeError::InvalidPrecision)
    /// if `bits` is outside `[1, 63]`, leaving the configuration unchanged.
    pub fn set_precision(&self, bits: u32) -> Result<()> {
        let mut config = self.config.write();
        *config = config.with_precision(bits)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            timestamp_bits = config.timestamp_bits(),
            random_bits = config.random_bits(),
            "precision changed"
        );
        Ok(())
    }

    /// Pack an epoch-relative timestamp and a random value into an ID.
    ///
    /// Bits that do not fit their field are masked off, so a timestamp past
    /// the wraparound point silently restarts from zero.
    #[inline]
    pub fn build(&self, relative_ts: i64, random: u64) -> SimpleflakeId {
        self.config().assemble_id(relative_ts, random)
    }

    /// Generate a new Simpleflake ID from the current time and fresh entropy
    ///
    /// # Errors
    ///
    /// Returns [`SimpleflakeError::EntropyUnavailable`](crate::SimpleflakeError::EntropyUnavailable)
    /// if the random source fails.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self) -> Result<SimpleflakeId> {
        let config = self.config();
        let random = self.entropy.random_up_to(config.max_random())?;
        let relative_ts = self.clock.now_millis().wrapping_sub(config.epoch());
        Ok(config.assemble_id(relative_ts, random))
    }

    /// Split an ID into `(absolute_timestamp_ms, random)` using the current
    /// configuration.
    #[inline]
    pub fn decompose(&self, id: SimpleflakeId) -> (i64, u64) {
        self.extractor().decompose(id)
    }

    /// Extractor bound to the current configuration
    pub fn extractor(&self) -> SimpleflakeExtractor {
        SimpleflakeExtractor::new(self.config())
    }
}
