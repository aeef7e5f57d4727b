//! The identifier value and its text and JSON representations

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Result, SimpleflakeError};

/// A 64-bit identifier: `timestamp | random`, high bits to low.
///
/// The value carries no configuration of its own; decode it with the same
/// layout and epoch that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct SimpleflakeId(u64);

impl SimpleflakeId {
    #[inline(always)]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline(always)]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Parse an unsigned base-10 numeral
    pub fn from_string(text: &str) -> Result<Self> {
        let parsed = if text.starts_with('+') {
            // the integer parser tolerates a leading plus; a bare sign reports it as an invalid digit
            "+".parse::<u64>()
        } else {
            text.parse::<u64>()
        };
        parsed
            .map(Self)
            .map_err(|source| SimpleflakeError::Parse {
                input: text.to_owned(),
                source,
            })
    }

    /// JSON form of the ID: always a string of decimal digits, never a bare
    /// number, so consumers parsing numbers as doubles lose nothing.
    pub fn to_json(self) -> Value {
        Value::String(self.to_string())
    }

    /// Decode a JSON number or a JSON string of decimal digits.
    ///
    /// Any other value, including negative or fractional numbers, yields
    /// [`SimpleflakeError::Format`].
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => n.as_u64().map(Self).ok_or(SimpleflakeError::Format),
            Value::String(s) => Self::from_string(s),
            _ => Err(SimpleflakeError::Format),
        }
    }
}

impl fmt::Display for SimpleflakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SimpleflakeId {
    type Err = SimpleflakeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl From<u64> for SimpleflakeId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<SimpleflakeId> for u64 {
    fn from(id: SimpleflakeId) -> Self {
        id.0
    }
}

impl Serialize for SimpleflakeId {
    fn serialize<S>(&self, s: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SimpleflakeId {
    fn deserialize<D>(d: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_any(IdVisitor)
    }
}

struct IdVisitor;

impl Visitor<'_> for IdVisitor {
    type Value = SimpleflakeId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or an integer")
    }

    #[inline]
    fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(SimpleflakeId(v))
    }

    fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(v)
            .map(SimpleflakeId)
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        SimpleflakeId::from_string(v).map_err(E::custom)
    }
}
