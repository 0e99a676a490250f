//! Metrics derived from resolved readings. All temperatures are °F, wind in mph
//! and humidity in %RH.

use chrono::{DateTime, Timelike, Utc};

const CARDINALS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Rothfusz regression, applied from 80 °F upward.
pub fn heat_index(temp_f: f64, humidity: f64) -> f64 {
    if temp_f < 80.0 {
        return temp_f;
    }
    let t = temp_f;
    let h = humidity;
    -42.379 + 2.04901523 * t + 10.14333127 * h
        - 0.22475541 * t * h
        - 0.00683783 * t * t
        - 0.05481717 * h * h
        + 0.00122874 * t * t * h
        + 0.00085282 * t * h * h
        - 0.00000199 * t * t * h * h
}

/// NWS wind chill, applied at or below 50 °F with at least 3 mph of wind.
pub fn wind_chill(temp_f: f64, wind_mph: f64) -> f64 {
    if temp_f > 50.0 || wind_mph < 3.0 {
        return temp_f;
    }
    let v = wind_mph.powf(0.16);
    35.74 + 0.6215 * temp_f - 35.75 * v + 0.4275 * temp_f * v
}

/// "Feels like" temperature.
///
/// Cold temperatures are returned unchanged: wind chill is not applied here
/// because this figure is computed from temperature and humidity only.
pub fn apparent_temperature(temp_f: f64, humidity: f64) -> f64 {
    if temp_f >= 80.0 {
        heat_index(temp_f, humidity)
    } else if temp_f <= 50.0 {
        temp_f
    } else {
        temp_f + (humidity - 50.0) * 0.1
    }
}

/// 16-point compass label for a bearing in degrees.
pub fn cardinal_direction(degrees: f64) -> &'static str {
    let index = ((degrees + 11.25) / 22.5).floor() as i64;
    CARDINALS[index.rem_euclid(16) as usize]
}

/// Fixed 06:00–20:00 daytime window.
pub fn is_day(at: DateTime<Utc>) -> bool {
    (6..20).contains(&at.hour())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn heat_index_discontinuity_at_80() {
        assert_eq!(apparent_temperature(79.999, 50.0), 79.999);
        assert_eq!(heat_index(79.999, 90.0), 79.999);

        let rothfusz = heat_index(80.0, 50.0);
        assert_ne!(rothfusz, 80.0);
        assert_eq!(apparent_temperature(80.0, 50.0), rothfusz);
    }

    #[test]
    fn heat_index_reference_value() {
        // NWS table: 90 °F at 50 % RH reads 95 °F.
        let hi = heat_index(90.0, 50.0);
        assert!((hi - 94.6).abs() < 0.5, "got {hi}");
    }

    #[test]
    fn wind_chill_boundary_on_wind() {
        assert_eq!(wind_chill(50.0, 2.999), 50.0);

        let expected = 35.74 + 0.6215 * 50.0 - 35.75 * 3f64.powf(0.16)
            + 0.4275 * 50.0 * 3f64.powf(0.16);
        assert!(close(wind_chill(50.0, 3.0), expected));
    }

    #[test]
    fn wind_chill_not_applied_above_50() {
        assert_eq!(wind_chill(50.5, 30.0), 50.5);
    }

    #[test]
    fn wind_chill_reference_value() {
        // NWS table: 0 °F with 15 mph reads -19 °F.
        let wc = wind_chill(0.0, 15.0);
        assert!((wc + 19.0).abs() < 0.5, "got {wc}");
    }

    #[test]
    fn cold_apparent_temperature_ignores_wind() {
        assert_eq!(apparent_temperature(20.0, 80.0), 20.0);
        assert_eq!(apparent_temperature(50.0, 10.0), 50.0);
    }

    #[test]
    fn mild_apparent_temperature_tracks_humidity() {
        assert!(close(apparent_temperature(65.0, 50.0), 65.0));
        assert!(close(apparent_temperature(65.0, 80.0), 68.0));
        assert!(close(apparent_temperature(65.0, 20.0), 62.0));
    }

    #[test]
    fn cardinal_points() {
        assert_eq!(cardinal_direction(0.0), "N");
        assert_eq!(cardinal_direction(11.24), "N");
        assert_eq!(cardinal_direction(11.25), "NNE");
        assert_eq!(cardinal_direction(90.0), "E");
        assert_eq!(cardinal_direction(180.0), "S");
        assert_eq!(cardinal_direction(270.0), "W");
        assert_eq!(cardinal_direction(348.75), "N");
        assert_eq!(cardinal_direction(360.0), "N");
        assert_eq!(cardinal_direction(-22.5), "NNW");
    }

    #[test]
    fn day_window() {
        let at = |h| Utc.with_ymd_and_hms(2024, 6, 1, h, 0, 0).unwrap();
        assert!(!is_day(at(5)));
        assert!(is_day(at(6)));
        assert!(is_day(at(19)));
        assert!(!is_day(at(20)));
        assert!(!is_day(at(0)));
    }
}
