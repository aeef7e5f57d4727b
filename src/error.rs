use std::num::ParseIntError;

use thiserror::Error;

/// Represents errors that can occur during Simpleflake operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimpleflakeError {
    /// The random source could not supply the requested randomness
    #[error("Entropy source unavailable: {reason}")]
    EntropyUnavailable { reason: String },
    /// Requested timestamp width leaves no room for either field
    #[error("Timestamp precision {bits} is invalid. Must be between {min} and {max} bits")]
    InvalidPrecision { bits: u32, min: u32, max: u32 },
    /// Text is not an unsigned 64-bit decimal numeral
    #[error("Invalid identifier {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: ParseIntError,
    },
    /// JSON value was neither a string nor an unsigned integer
    #[error("expected a string or an integer")]
    Format,
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SimpleflakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let precision = SimpleflakeError::InvalidPrecision {
            bits: 64,
            min: 1,
            max: 63,
        };
        assert_eq!(
            precision.to_string(),
            "Timestamp precision 64 is invalid. Must be between 1 and 63 bits"
        );

        assert_eq!(
            SimpleflakeError::Format.to_string(),
            "expected a string or an integer"
        );

        let entropy = SimpleflakeError::EntropyUnavailable {
            reason: "device not ready".into(),
        };
        assert_eq!(
            entropy.to_string(),
            "Entropy source unavailable: device not ready"
        );
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let source = "12a".parse::<u64>().unwrap_err();
        let err = SimpleflakeError::Parse {
            input: "12a".into(),
            source: source.clone(),
        };
        assert_eq!(
            err.to_string(),
            format!("Invalid identifier \"12a\": {source}")
        );
        let inner = std::error::Error::source(&err).expect("source is preserved");
        assert_eq!(inner.to_string(), source.to_string());
    }

    #[test]
    fn test_error_clone() {
        let original = SimpleflakeError::InvalidPrecision {
            bits: 0,
            min: 1,
            max: 63,
        };
        let cloned = original.clone();
        assert_eq!(original, cloned);
        assert!(format!("{:?}", cloned).contains("InvalidPrecision"));
    }
}
