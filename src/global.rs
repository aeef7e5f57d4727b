//! Process-wide default codec.
//!
//! Free functions over one lazily created [`Simpleflake`] shared by the whole
//! process. Prefer owning a [`Simpleflake`] when different parts of a program
//! need different layouts.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use crate::codec::Simpleflake;
use crate::config::SimpleflakeConfig;
use crate::error::Result;
use crate::id::SimpleflakeId;

static DEFAULT: Lazy<Simpleflake> = Lazy::new(Simpleflake::new);

/// The shared codec itself
pub fn codec() -> &'static Simpleflake {
    &DEFAULT
}

/// Generate a new ID with the process-wide configuration
pub fn generate() -> Result<SimpleflakeId> {
    DEFAULT.generate()
}

/// Split an ID into `(absolute_timestamp_ms, random)`
pub fn decompose(id: SimpleflakeId) -> (i64, u64) {
    DEFAULT.decompose(id)
}

pub fn set_epoch(epoch: DateTime<Utc>) {
    DEFAULT.set_epoch(epoch);
}

pub fn set_precision(bits: u32) -> Result<()> {
    DEFAULT.set_precision(bits)
}

pub fn config() -> SimpleflakeConfig {
    DEFAULT.config()
}

/// Restore the default 41/23 layout and the 2000-01-01 epoch
pub fn reset() {
    DEFAULT.set_config(SimpleflakeConfig::default());
}
