//! Datetime handling for the extended-JSON wire format.
//!
//! The API serializes datetimes the way its document store does:
//! `{"$date": {"$numberLong": "<epoch millis>"}}`, occasionally as a bare
//! millisecond integer. `WireDateTime` decodes both and keeps the raw epoch
//! millis so derived instants (token expiry, connection expiry) are simple
//! arithmetic.

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A point in time as transmitted by the API, in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WireDateTime(i64);

impl WireDateTime {
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub const fn timestamp_millis(self) -> i64 {
        self.0
    }

    /// The instant `seconds` after this one, saturating on overflow.
    #[must_use]
    pub const fn plus_seconds(self, seconds: u64) -> Self {
        Self(self.0.saturating_add((seconds as i64).saturating_mul(1000)))
    }

    fn to_utc(self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.0)
    }

    /// `MM/DD/YYYY`, zero padded.
    #[must_use]
    pub fn date_string(self) -> String {
        self.to_utc().map_or_else(
            || "invalid date".to_string(),
            |dt| format!("{:02}/{:02}/{:04}", dt.month(), dt.day(), dt.year()),
        )
    }

    /// `HH:MM:SS`, zero padded.
    #[must_use]
    pub fn time_string(self) -> String {
        self.to_utc().map_or_else(
            || "invalid date".to_string(),
            |dt| format!("{:02}:{:02}:{:02}", dt.hour(), dt.minute(), dt.second()),
        )
    }

    #[must_use]
    pub fn full_string(self) -> String {
        format!("{} {}", self.date_string(), self.time_string())
    }
}

impl fmt::Display for WireDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ExtendedDate {
    NumberLong {
        #[serde(rename = "$numberLong")]
        number_long: String,
    },
    Millis(i64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Extended {
        #[serde(rename = "$date")]
        date: ExtendedDate,
    },
    Millis(i64),
}

impl<'de> Deserialize<'de> for WireDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let millis = match Repr::deserialize(deserializer)? {
            Repr::Extended {
                date: ExtendedDate::NumberLong { number_long },
            } => number_long
                .parse::<i64>()
                .map_err(|err| D::Error::custom(format!("invalid $numberLong: {err}")))?,
            Repr::Extended {
                date: ExtendedDate::Millis(millis),
            }
            | Repr::Millis(millis) => millis,
        };

        Ok(Self(millis))
    }
}

impl Serialize for WireDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut outer = serializer.serialize_map(Some(1))?;
        outer.serialize_entry(
            "$date",
            &serde_json::json!({ "$numberLong": self.0.to_string() }),
        )?;
        outer.end()
    }
}
