//! # Simpleflake
//!
//! Compact 64-bit identifiers made of a millisecond timestamp and random bits.
//!
//! ```text
//! | timestamp_bits: ms since epoch (default 41) | random_bits: 64 - timestamp_bits (default 23) |
//! ```
//!
//! - 📈 Roughly time-sorted
//! - 🎲 Collision-resistant without coordination (cryptographic randomness)
//! - 🔒 Safe to reconfigure while other threads generate
//! - 🧾 JSON-safe: serialized as decimal strings
//!
//! Uniqueness is probabilistic. IDs carry no version tag, so decode them with
//! the same layout and epoch that built them.

#![forbid(unsafe_code)]

mod codec;
mod config;
mod error;
mod extractor;
pub mod global;
mod id;
pub mod json;


// Re-export main types
pub use codec::{EntropySource, OsRandom, Simpleflake, SystemClock, TimeSource};
pub use config::{
    SimpleflakeConfig, SimpleflakeConfigBuilder, DEFAULT_EPOCH, DEFAULT_TIMESTAMP_BITS,
    MAX_TIMESTAMP_BITS, MIN_TIMESTAMP_BITS, TOTAL_BITS,
};
pub use error::{Result, SimpleflakeError};
pub use extractor::{extract_bits, SimpleflakeExtractor};
pub use id::SimpleflakeId;
