use chrono::{TimeZone, Utc};
use simpleflake::{Simpleflake, SimpleflakeConfig};

fn main() {
    // Fewer timestamp bits, more randomness: 36 bits covers ~2.2 years
    let config = SimpleflakeConfig::builder()
        .timestamp_bits(36)
        .unwrap()
        .epoch_at(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
        .build();

    let codec = Simpleflake::with_config(config);

    println!("Codec configuration:");
    println!("  Timestamp bits: {}", config.timestamp_bits());
    println!("  Random bits: {}", config.random_bits());
    println!("  Max random value: {}", config.max_random());
    match config.wraparound_at() {
        Some(at) => println!("  Timestamp wraps at: {at}"),
        None => println!("  Timestamp never wraps within the calendar"),
    }

    // Generate and analyze an ID
    let id = codec.generate().unwrap();
    let (ts, random) = codec.decompose(id);

    println!("\nGenerated ID: {}", id);
    println!("Components:");
    println!("  Timestamp: {} ms since 1970", ts);
    println!("  Random: {} (of {})", random, config.max_random());
}
