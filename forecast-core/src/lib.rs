//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Decoding of the raw multi-source hourly payload
//! - Per-hour resolution, unit conversion and derived metrics
//! - Day bucketing and daily aggregation into display-ready models
//! - Configuration handling
//!
//! It performs no I/O besides reading and writing its own config file.

pub mod aggregate;
pub mod bucket;
pub mod condition;
pub mod config;
pub mod derived;
pub mod model;
pub mod normalize;
pub mod payload;
pub mod source;
pub mod units;

pub use condition::Condition;
pub use config::{Config, UnitSystem};
pub use model::{
    Astro, AstronomyResponse, Current, DayForecast, ForecastDay, ForecastResponse, HourForecast,
    Location, WeatherReport, WeatherResponse,
};
pub use normalize::{DEFAULT_MAX_DAYS, NormalizeOptions, normalize, normalize_at};
pub use payload::{DecodeError, StormglassHour, StormglassResponse, decode};
pub use source::{Source, SourceValue};
