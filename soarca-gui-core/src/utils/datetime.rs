//! Serde helpers for `last_modified` style timestamps.
//!
//! - Serialization: `DateTime<Utc>` -> RFC3339 string
//! - Deserialization: RFC3339 string or Unix timestamp -> `DateTime<Utc>`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Serializes `DateTime<Utc>` as an RFC3339 string.
pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339())
}

/// Deserializes `DateTime<Utc>` from RFC3339 or a Unix timestamp.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Text(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp: {e}"))),
        Raw::Number(ts) => {
            parse_unix_timestamp(ts).ok_or_else(|| Error::custom("Invalid Unix timestamp"))
        }
    }
}

/// Parses a Unix timestamp with second/millisecond auto-detection.
fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    // Values larger than 10^11 are milliseconds.
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "crate::utils::datetime")]
        at: DateTime<Utc>,
    }

    #[test]
    fn accepts_rfc3339() {
        let s: Stamped = serde_json::from_str(r#"{"at":"2025-03-15T10:00:00Z"}"#).unwrap();
        assert_eq!(s.at, Utc.with_ymd_and_hms(2025, 3, 15, 10, 0, 0).unwrap());
    }

    #[test]
    fn accepts_seconds_and_millis() {
        let secs: Stamped = serde_json::from_str(r#"{"at":1742032800}"#).unwrap();
        let millis: Stamped = serde_json::from_str(r#"{"at":1742032800000}"#).unwrap();
        assert_eq!(secs.at, millis.at);
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Stamped>(r#"{"at":"yesterday"}"#).is_err());
    }

    #[test]
    fn writes_rfc3339() {
        let s = Stamped {
            at: Utc.with_ymd_and_hms(2024, 11, 20, 9, 15, 0).unwrap(),
        };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"at":"2024-11-20T09:15:00+00:00"}"#);
    }
}
