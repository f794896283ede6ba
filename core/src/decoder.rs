//! The response decoding pipeline.
//!
//! # Design
//! `Decoder` is an explicit, immutable value. It is built once (normally from
//! `ClientConfig`) and handed to every decode call; nothing here is global.
//!
//! Field names map mechanically: model fields are snake_case, the same as the
//! wire, so serde's default naming is the key strategy. Dates go through
//! `Timestamp`. Optional fields go through `lenient`, so a null, absent or
//! malformed optional value becomes `None` without failing its parent, while a
//! broken required field fails the whole decode with its JSON path.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::de::{self, DeserializeOwned, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ApiError, ApiResult};
use crate::types::TimeSeries;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoder {
    validate_time_series: bool,
}

impl Decoder {
    /// Permissive decoder: statistics series are not cross-checked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject statistics whose `values` length differs from `quantity`.
    #[must_use]
    pub fn with_time_series_validation(mut self, enabled: bool) -> Self {
        self.validate_time_series = enabled;
        self
    }

    pub fn validates_time_series(&self) -> bool {
        self.validate_time_series
    }

    /// Decode a JSON body into `T`, reporting the path of the first failing
    /// required field.
    pub fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> ApiResult<T> {
        let mut de = serde_json::Deserializer::from_slice(body);
        let value: T = serde_path_to_error::deserialize(&mut de).map_err(|err| {
            let parent = err.path().to_string();
            let message = err.into_inner().to_string();
            let path = field_path(parent, &message);
            tracing::warn!(
                target_type = std::any::type_name::<T>(),
                %path,
                %message,
                "response body did not match schema"
            );
            ApiError::decode(path, message)
        })?;
        de.end().map_err(|e| ApiError::decode(".", e.to_string()))?;
        Ok(value)
    }

    /// Cross-check a statistics series when validation is enabled.
    pub fn check_time_series(&self, path: &str, series: &TimeSeries) -> ApiResult<()> {
        if !self.validate_time_series {
            return Ok(());
        }
        let actual = series.values.len();
        if actual != series.quantity as usize {
            return Err(ApiError::decode(
                format!("{path}.values"),
                format!("expected {} entries, found {actual}", series.quantity),
            ));
        }
        Ok(())
    }
}

/// serde reports a missing field at its parent; point at the field itself.
fn field_path(parent: String, message: &str) -> String {
    let missing = message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split_once('`'))
        .map(|(name, _)| name);
    match missing {
        Some(name) if parent == "." => name.to_string(),
        Some(name) => format!("{parent}.{name}"),
        None => parent,
    }
}

/// Deserialize an optional field, turning null, absence or a malformed value
/// into `None`. Pair with `#[serde(default)]`.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Some(value) = Option::<serde_json::Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => {
            tracing::debug!(%err, "dropping malformed optional field");
            Ok(None)
        }
    }
}

/// Identifiers that older payloads send as numbers (collection ids).
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

/// A point in time as the API reports it.
///
/// Accepts RFC 3339 (`2016-05-03T11:00:28-04:00`), offset-less date-times
/// (taken as UTC), bare dates (`2017-05-01`, midnight UTC) and Unix epoch
/// seconds. Serializes as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn parse(s: &str) -> Option<Self> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self(dt.with_timezone(&Utc)));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(Self(naive.and_utc()));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self(naive.and_utc()))
    }

    pub fn from_unix(seconds: i64) -> Option<Self> {
        Utc.timestamp_opt(seconds, 0).single().map(Self)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

struct TimestampVisitor;

impl Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an ISO-8601 date or date-time, or Unix seconds")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Timestamp, E> {
        Timestamp::parse(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Timestamp, E> {
        Timestamp::from_unix(v).ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Timestamp, E> {
        i64::try_from(v)
            .ok()
            .and_then(Timestamp::from_unix)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }
}
