//! Raw point-forecast payload as delivered by the upstream feed, and its
//! reduction to one value per parameter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::source::{SourceValue, resolve};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Failed to decode the weather payload: {0}")]
    DecodingFailure(#[from] serde_json::Error),
}

/// Decodes a raw JSON payload.
pub fn decode(body: &str) -> Result<StormglassResponse, DecodeError> {
    Ok(serde_json::from_str(body)?)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StormglassResponse {
    #[serde(default)]
    pub hours: Option<Vec<StormglassHour>>,
    #[serde(default)]
    pub meta: Option<StormglassMeta>,
}

impl StormglassResponse {
    pub fn hours(&self) -> &[StormglassHour] {
        self.hours.as_deref().unwrap_or_default()
    }

    /// Request coordinates echoed back in `meta`, or the origin when absent.
    pub fn coordinates(&self) -> (f64, f64) {
        self.meta.as_ref().map(|m| (m.lat, m.lng)).unwrap_or((0.0, 0.0))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StormglassMeta {
    pub cost: Option<i64>,
    pub daily_quota: Option<i64>,
    pub end: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub params: Option<Vec<String>>,
    pub request_count: Option<i64>,
    pub start: Option<String>,
}

/// One hourly observation with every parameter reported per source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StormglassHour {
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_temperature: Option<SourceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<SourceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<SourceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<SourceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<SourceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_cover: Option<SourceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precipitation: Option<SourceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<SourceValue>,
}

impl StormglassHour {
    /// An hour with no readings at all, stamped at `at`.
    pub fn empty_at(at: DateTime<Utc>) -> Self {
        Self { time: at.to_rfc3339(), ..Default::default() }
    }

    pub fn resolve(&self) -> ResolvedHour {
        ResolvedHour {
            time: self.time.clone(),
            instant: parse_time(&self.time),
            air_temperature: resolve(self.air_temperature.as_ref()),
            humidity: resolve(self.humidity.as_ref()),
            wind_speed: resolve(self.wind_speed.as_ref()),
            wind_direction: resolve(self.wind_direction.as_ref()),
            pressure: resolve(self.pressure.as_ref()),
            cloud_cover: resolve(self.cloud_cover.as_ref()),
            precipitation: resolve(self.precipitation.as_ref()),
            visibility: resolve(self.visibility.as_ref()),
        }
    }
}

/// Parses an RFC 3339 timestamp (fractional seconds optional) into UTC.
pub fn parse_time(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim()).ok().map(|dt| dt.with_timezone(&Utc))
}

/// An hour reduced to a single value per parameter.
///
/// Units follow the feed: °F, %RH, mph, degrees, Pa, %, inches and meters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedHour {
    pub time: String,
    pub instant: Option<DateTime<Utc>>,
    pub air_temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<f64>,
    pub pressure: Option<f64>,
    pub cloud_cover: Option<f64>,
    pub precipitation: Option<f64>,
    pub visibility: Option<f64>,
}
