use crate::{
    bucket::StampedHour,
    condition::Condition,
    model::DayForecast,
    payload::ResolvedHour,
    units,
};

/// Percentage reported whenever a day (or hour) has any precipitation.
pub const RAIN_CHANCE_PCT: u8 = 50;

/// Daily statistics in feed units (°F, mph, inches, meters, %).
///
/// Each statistic only considers hours that reported that parameter; a
/// parameter nobody reported reads `0`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DayStats {
    pub max_temp: f64,
    pub min_temp: f64,
    pub avg_temp: f64,
    pub max_wind: f64,
    pub total_precip: f64,
    pub avg_humidity: f64,
    pub avg_visibility: f64,
    pub avg_cloud: f64,
    pub condition: Condition,
}

impl DayStats {
    pub fn from_hours(hours: &[StampedHour]) -> Self {
        if hours.is_empty() {
            return Self::default();
        }

        let temps = column(hours, |r| r.air_temperature);
        let total_precip: f64 = column(hours, |r| r.precipitation).iter().sum();
        let avg_cloud = mean(&column(hours, |r| r.cloud_cover));

        Self {
            max_temp: max(&temps),
            min_temp: min(&temps),
            avg_temp: mean(&temps),
            max_wind: max(&column(hours, |r| r.wind_speed)),
            total_precip,
            avg_humidity: mean(&column(hours, |r| r.humidity)),
            avg_visibility: mean(&column(hours, |r| r.visibility)),
            avg_cloud,
            condition: Condition::from_readings(avg_cloud, total_precip),
        }
    }

    pub fn will_rain(&self) -> bool {
        self.total_precip > 0.0
    }

    pub fn to_day_forecast(&self) -> DayForecast {
        let will_rain = self.will_rain();
        DayForecast {
            maxtemp_c: units::celsius(self.max_temp),
            maxtemp_f: self.max_temp,
            mintemp_c: units::celsius(self.min_temp),
            mintemp_f: self.min_temp,
            avgtemp_c: units::celsius(self.avg_temp),
            avgtemp_f: self.avg_temp,
            maxwind_mph: self.max_wind,
            maxwind_kph: units::kph(self.max_wind),
            totalprecip_mm: units::millimeters(self.total_precip),
            totalprecip_in: self.total_precip,
            totalsnow_cm: 0.0,
            avgvis_km: units::kilometers(self.avg_visibility),
            avgvis_miles: units::miles(self.avg_visibility),
            avghumidity: self.avg_humidity,
            daily_will_it_rain: u8::from(will_rain),
            daily_chance_of_rain: if will_rain { RAIN_CHANCE_PCT } else { 0 },
            daily_will_it_snow: 0,
            daily_chance_of_snow: 0,
            condition: self.condition,
            uv: 0.0,
        }
    }
}

/// Values of one parameter across the hours that reported it.
fn column(hours: &[StampedHour], pick: impl Fn(&ResolvedHour) -> Option<f64>) -> Vec<f64> {
    hours.iter().filter_map(|h| pick(&h.reading)).collect()
}

fn max(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

fn min(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
