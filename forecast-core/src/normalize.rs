//! Turns a raw multi-source payload into current conditions, a daily forecast
//! and an astronomy block.

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::{
    aggregate::{DayStats, RAIN_CHANCE_PCT},
    bucket::{DayBucket, bucket_by_day},
    condition::Condition,
    derived,
    model::{
        Astro, Astronomy, AstronomyResponse, Current, ForecastDay, HourForecast, Location,
        WeatherReport,
    },
    payload::{ResolvedHour, StormglassHour, StormglassResponse},
    units,
};

pub const DEFAULT_MAX_DAYS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Upper bound on forecast days, earliest first.
    pub max_days: usize,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self { max_days: DEFAULT_MAX_DAYS }
    }
}

/// Normalizes `hours` using the current wall clock as the reference instant.
pub fn normalize(
    hours: &[StormglassHour],
    location_name: &str,
    coordinates: (f64, f64),
    options: NormalizeOptions,
) -> WeatherReport {
    normalize_at(hours, location_name, coordinates, options, Utc::now())
}

/// Normalizes `hours` against a fixed reference instant.
///
/// `now` stamps the location block and stands in for any timestamp the current
/// snapshot cannot parse. The first hour is taken as current as-is; the feed
/// is expected to deliver hours in ascending order.
pub fn normalize_at(
    hours: &[StormglassHour],
    location_name: &str,
    coordinates: (f64, f64),
    options: NormalizeOptions,
    now: DateTime<Utc>,
) -> WeatherReport {
    let location = Location::new(location_name, coordinates, now);

    let current = match hours.first() {
        Some(first) => current_from(&first.resolve(), now),
        None => {
            debug!("payload has no hours, using an empty snapshot");
            current_from(&StormglassHour::empty_at(now).resolve(), now)
        }
    };

    let resolved: Vec<ResolvedHour> = hours.iter().map(StormglassHour::resolve).collect();
    trace!(hours = resolved.len(), "resolved hourly readings");

    let forecast: Vec<ForecastDay> =
        bucket_by_day(resolved, options.max_days).iter().map(forecast_day).collect();

    let astronomy = AstronomyResponse {
        location: location.clone(),
        astronomy: Astronomy { astro: Astro::unavailable() },
    };

    WeatherReport { location, current, forecast, astronomy }
}

impl StormglassResponse {
    /// Normalizes this payload, falling back to its echoed coordinates.
    pub fn normalize(&self, location_name: &str, options: NormalizeOptions) -> WeatherReport {
        normalize(self.hours(), location_name, self.coordinates(), options)
    }
}

fn forecast_day(bucket: &DayBucket) -> ForecastDay {
    let stats = DayStats::from_hours(&bucket.hours);
    ForecastDay {
        date: bucket.date.format("%Y-%m-%d").to_string(),
        date_epoch: bucket.first_instant().map(|at| at.timestamp()).unwrap_or_default(),
        day: stats.to_day_forecast(),
        astro: Astro::unavailable(),
        hour: bucket.hours.iter().map(|h| hour_forecast(&h.reading, h.at)).collect(),
    }
}

/// Per-hour values with absent readings taken as zero.
struct HourMetrics {
    at: DateTime<Utc>,
    temp_f: f64,
    humidity: f64,
    wind_mph: f64,
    wind_degree: f64,
    pressure_pa: f64,
    cloud: f64,
    precip_in: f64,
    visibility_m: f64,
    feels_like_f: f64,
    condition: Condition,
}

impl HourMetrics {
    fn new(reading: &ResolvedHour, at: DateTime<Utc>) -> Self {
        let temp_f = reading.air_temperature.unwrap_or(0.0);
        let humidity = reading.humidity.unwrap_or(0.0);
        let cloud = reading.cloud_cover.unwrap_or(0.0);
        let precip_in = reading.precipitation.unwrap_or(0.0);

        Self {
            at,
            temp_f,
            humidity,
            wind_mph: reading.wind_speed.unwrap_or(0.0),
            wind_degree: reading.wind_direction.unwrap_or(0.0),
            pressure_pa: reading.pressure.unwrap_or(0.0),
            cloud,
            precip_in,
            visibility_m: reading.visibility.unwrap_or(0.0),
            feels_like_f: derived::apparent_temperature(temp_f, humidity),
            condition: Condition::from_readings(cloud, precip_in),
        }
    }

    fn epoch(&self) -> i64 {
        self.at.timestamp()
    }

    fn stamp(&self) -> String {
        self.at.format("%Y-%m-%d %H:%M").to_string()
    }

    fn is_day(&self) -> u8 {
        u8::from(derived::is_day(self.at))
    }

    fn will_rain(&self) -> bool {
        self.precip_in > 0.0
    }
}

fn current_from(reading: &ResolvedHour, now: DateTime<Utc>) -> Current {
    let m = HourMetrics::new(reading, reading.instant.unwrap_or(now));

    Current {
        last_updated_epoch: m.epoch(),
        last_updated: m.stamp(),
        temp_c: units::celsius(m.temp_f),
        temp_f: m.temp_f,
        is_day: m.is_day(),
        condition: m.condition,
        wind_mph: m.wind_mph,
        wind_kph: units::kph(m.wind_mph),
        wind_degree: m.wind_degree as i32,
        wind_dir: derived::cardinal_direction(m.wind_degree).to_string(),
        pressure_mb: units::millibars(m.pressure_pa),
        pressure_in: units::inches_of_mercury(m.pressure_pa),
        precip_mm: units::millimeters(m.precip_in),
        precip_in: m.precip_in,
        humidity: m.humidity as i32,
        cloud: m.cloud as i32,
        feelslike_c: units::celsius(m.feels_like_f),
        feelslike_f: m.feels_like_f,
        vis_km: units::kilometers(m.visibility_m),
        vis_miles: units::miles(m.visibility_m),
        uv: 0.0,
        gust_mph: None,
        gust_kph: None,
    }
}

fn hour_forecast(reading: &ResolvedHour, at: DateTime<Utc>) -> HourForecast {
    let m = HourMetrics::new(reading, at);
    let wind_chill_f = derived::wind_chill(m.temp_f, m.wind_mph);
    let heat_index_f = derived::heat_index(m.temp_f, m.humidity);
    let will_rain = m.will_rain();

    HourForecast {
        time_epoch: m.epoch(),
        time: m.stamp(),
        temp_c: units::celsius(m.temp_f),
        temp_f: m.temp_f,
        is_day: m.is_day(),
        condition: m.condition,
        wind_mph: m.wind_mph,
        wind_kph: units::kph(m.wind_mph),
        wind_degree: m.wind_degree as i32,
        wind_dir: derived::cardinal_direction(m.wind_degree).to_string(),
        pressure_mb: units::millibars(m.pressure_pa),
        pressure_in: units::inches_of_mercury(m.pressure_pa),
        precip_mm: units::millimeters(m.precip_in),
        precip_in: m.precip_in,
        humidity: m.humidity as i32,
        cloud: m.cloud as i32,
        feelslike_c: units::celsius(m.feels_like_f),
        feelslike_f: m.feels_like_f,
        windchill_c: units::celsius(wind_chill_f),
        windchill_f: wind_chill_f,
        heatindex_c: units::celsius(heat_index_f),
        heatindex_f: heat_index_f,
        dewpoint_c: 0.0,
        dewpoint_f: 0.0,
        will_it_rain: u8::from(will_rain),
        chance_of_rain: if will_rain { RAIN_CHANCE_PCT } else { 0 },
        will_it_snow: 0,
        chance_of_snow: 0,
        vis_km: units::kilometers(m.visibility_m),
        vis_miles: units::miles(m.visibility_m),
        gust_mph: 0.0,
        gust_kph: 0.0,
        uv: 0.0,
    }
}
