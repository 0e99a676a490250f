//! Display-ready structures produced by the normalizer. Every physical value is
//! carried in both unit systems.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::condition::Condition;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub tz_id: String,
    pub localtime_epoch: i64,
    pub localtime: String,
}

impl Location {
    pub fn new(name: impl Into<String>, (lat, lon): (f64, f64), now: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            region: String::new(),
            country: String::new(),
            lat,
            lon,
            tz_id: "UTC".to_string(),
            localtime_epoch: now.timestamp(),
            localtime: now.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Current {
    pub last_updated_epoch: i64,
    pub last_updated: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub is_day: u8,
    pub condition: Condition,
    pub wind_mph: f64,
    pub wind_kph: f64,
    pub wind_degree: i32,
    pub wind_dir: String,
    pub pressure_mb: f64,
    pub pressure_in: f64,
    pub precip_mm: f64,
    pub precip_in: f64,
    pub humidity: i32,
    pub cloud: i32,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub vis_km: f64,
    pub vis_miles: f64,
    pub uv: f64,
    pub gust_mph: Option<f64>,
    pub gust_kph: Option<f64>,
}

impl Default for Current {
    fn default() -> Self {
        Self {
            last_updated_epoch: 0,
            last_updated: String::new(),
            temp_c: 0.0,
            temp_f: 0.0,
            is_day: 1,
            condition: Condition::Unknown,
            wind_mph: 0.0,
            wind_kph: 0.0,
            wind_degree: 0,
            wind_dir: "N".to_string(),
            pressure_mb: 0.0,
            pressure_in: 0.0,
            precip_mm: 0.0,
            precip_in: 0.0,
            humidity: 0,
            cloud: 0,
            feelslike_c: 0.0,
            feelslike_f: 0.0,
            vis_km: 0.0,
            vis_miles: 0.0,
            uv: 0.0,
            gust_mph: None,
            gust_kph: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourForecast {
    pub time_epoch: i64,
    pub time: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub is_day: u8,
    pub condition: Condition,
    pub wind_mph: f64,
    pub wind_kph: f64,
    pub wind_degree: i32,
    pub wind_dir: String,
    pub pressure_mb: f64,
    pub pressure_in: f64,
    pub precip_mm: f64,
    pub precip_in: f64,
    pub humidity: i32,
    pub cloud: i32,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub windchill_c: f64,
    pub windchill_f: f64,
    pub heatindex_c: f64,
    pub heatindex_f: f64,
    pub dewpoint_c: f64,
    pub dewpoint_f: f64,
    pub will_it_rain: u8,
    pub chance_of_rain: u8,
    pub will_it_snow: u8,
    pub chance_of_snow: u8,
    pub vis_km: f64,
    pub vis_miles: f64,
    pub gust_mph: f64,
    pub gust_kph: f64,
    pub uv: f64,
}

/// Aggregates for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    pub maxtemp_c: f64,
    pub maxtemp_f: f64,
    pub mintemp_c: f64,
    pub mintemp_f: f64,
    pub avgtemp_c: f64,
    pub avgtemp_f: f64,
    pub maxwind_mph: f64,
    pub maxwind_kph: f64,
    pub totalprecip_mm: f64,
    pub totalprecip_in: f64,
    pub totalsnow_cm: f64,
    pub avgvis_km: f64,
    pub avgvis_miles: f64,
    pub avghumidity: f64,
    pub daily_will_it_rain: u8,
    pub daily_chance_of_rain: u8,
    pub daily_will_it_snow: u8,
    pub daily_chance_of_snow: u8,
    pub condition: Condition,
    pub uv: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// `yyyy-MM-dd`, UTC.
    pub date: String,
    pub date_epoch: i64,
    pub day: DayForecast,
    pub astro: Astro,
    pub hour: Vec<HourForecast>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Astro {
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
    pub moonset: String,
    pub moon_phase: String,
    pub moon_illumination: f64,
}

impl Astro {
    /// The feed carries no astronomy, so every field reads as unavailable.
    pub fn unavailable() -> Self {
        let na = || "N/A".to_string();
        Self {
            sunrise: na(),
            sunset: na(),
            moonrise: na(),
            moonset: na(),
            moon_phase: "Unknown".to_string(),
            moon_illumination: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Astronomy {
    pub astro: Astro,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstronomyResponse {
    pub location: Location,
    pub astronomy: Astronomy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub location: Location,
    pub current: Current,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub location: Location,
    pub current: Current,
    pub forecast: Forecast,
}

/// Everything produced from one payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: Location,
    pub current: Current,
    pub forecast: Vec<ForecastDay>,
    pub astronomy: AstronomyResponse,
}

impl WeatherReport {
    pub fn weather_response(&self) -> WeatherResponse {
        WeatherResponse { location: self.location.clone(), current: self.current.clone() }
    }

    pub fn forecast_response(&self) -> ForecastResponse {
        ForecastResponse {
            location: self.location.clone(),
            current: self.current.clone(),
            forecast: Forecast { forecastday: self.forecast.clone() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn default_current_is_unknown_daytime() {
        let current = Current::default();
        assert_eq!(current.condition, Condition::Unknown);
        assert_eq!(current.is_day, 1);
        assert_eq!(current.wind_dir, "N");
        assert_eq!(current.gust_mph, None);
    }

    #[test]
    fn unavailable_astro() {
        let astro = Astro::unavailable();
        assert_eq!(astro.sunrise, "N/A");
        assert_eq!(astro.moonset, "N/A");
        assert_eq!(astro.moon_phase, "Unknown");
        assert_eq!(astro.moon_illumination, 0.0);
    }

    #[test]
    fn location_is_utc() {
        let now = Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap();
        let location = Location::new("Oslo", (59.9, 10.7), now);
        assert_eq!(location.tz_id, "UTC");
        assert_eq!(location.localtime, "2024-02-03T04:05:06Z");
        assert_eq!(location.localtime_epoch, now.timestamp());
        assert_eq!(location.lon, 10.7);
    }

    #[test]
    fn gusts_serialize_as_null_on_current() {
        let json = serde_json::to_value(Current::default()).unwrap();
        assert!(json["gust_mph"].is_null());
        assert_eq!(json["condition"]["text"], "Unknown");
    }
}
