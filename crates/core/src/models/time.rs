use chrono::NaiveTime;

use crate::errors::{ShiftError, ShiftResult};

/// Wire format for wall-clock times, e.g. `"09:30"`.
pub const TIME_FORMAT: &str = "%H:%M";

pub fn parse_hhmm(value: &str) -> ShiftResult<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|_| ShiftError::Validation(format!("Invalid time (expected HH:mm): {value}")))
}

pub fn format_hhmm(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Serde adapter serializing `NaiveTime` as `HH:mm`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::TIME_FORMAT;

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&value, TIME_FORMAT).map_err(de::Error::custom)
    }
}
