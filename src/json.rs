//! Serde adapters for IDs stored as plain integers

/// Serialize a `u64` as a decimal string and accept either a string or an
/// integer back, the same wire treatment [`SimpleflakeId`](crate::SimpleflakeId)
/// gets.
///
/// ```
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Row {
///     #[serde(with = "simpleflake::json::as_decimal_string")]
///     id: u64,
/// }
///
/// let json = serde_json::to_string(&Row { id: 7 }).unwrap();
/// assert_eq!(json, r#"{"id":"7"}"#);
/// ```
pub mod as_decimal_string {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::SimpleflakeId;

    /// Serialize an ID as its base-10 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &u64, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(id)
    }

    /// Deserialize an ID from a decimal string or an unsigned integer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The value is neither a string nor an unsigned integer
    /// - The string is not a base-10 numeral within `u64` range
    pub fn deserialize<'de, D>(d: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        SimpleflakeId::deserialize(d).map(u64::from)
    }
}
