//! MoySklad timestamps.
//!
//! The API exchanges local times as `YYYY-MM-DD HH:MM:SS.fff` strings
//! (Moscow time, no offset). Fractional seconds are optional on input.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

const OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
const INPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
const INPUT_FORMAT_NO_FRACTION: &str = "%Y-%m-%d %H:%M:%S";

/// A MoySklad timestamp.
///
/// # Example
///
/// ```rust
/// use moysklad_api::api::Moment;
///
/// let moment: Moment = "2024-03-01 09:15:00".parse().unwrap();
/// assert_eq!(moment.to_string(), "2024-03-01 09:15:00.000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Moment(pub NaiveDateTime);

impl Moment {
    /// Returns the wrapped date and time.
    #[must_use]
    pub const fn naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for Moment {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl FromStr for Moment {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveDateTime::parse_from_str(s, INPUT_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(s, INPUT_FORMAT_NO_FRACTION))
            .map(Self)
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(OUTPUT_FORMAT))
    }
}

impl Serialize for Moment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Moment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| de::Error::custom(format!("invalid moment '{s}': {e}")))
    }
}
