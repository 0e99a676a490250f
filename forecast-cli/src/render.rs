use chrono::NaiveDate;
use forecast_core::{Current, ForecastDay, UnitSystem, WeatherReport};
use std::fmt::Write;

/// Plain-text summary; numbers are truncated to whole units.
pub fn report(report: &WeatherReport, units: UnitSystem) -> String {
    let mut out = String::new();

    let location = &report.location;
    let _ = writeln!(out, "{} ({:.2}, {:.2})", location.name, location.lat, location.lon);
    out.push_str(&current(&report.current, units));

    if report.forecast.is_empty() {
        out.push_str("\nNo forecast days available.\n");
        return out;
    }

    out.push('\n');
    for day in &report.forecast {
        out.push_str(&forecast_day(day, units));
    }
    out
}

fn current(c: &Current, units: UnitSystem) -> String {
    let (temp, feels, t_unit) = match units {
        UnitSystem::Imperial => (c.temp_f, c.feelslike_f, "°F"),
        UnitSystem::Metric => (c.temp_c, c.feelslike_c, "°C"),
    };
    let (wind, w_unit) = match units {
        UnitSystem::Imperial => (c.wind_mph, "mph"),
        UnitSystem::Metric => (c.wind_kph, "km/h"),
    };
    let (vis, v_unit) = match units {
        UnitSystem::Imperial => (c.vis_miles, "mi"),
        UnitSystem::Metric => (c.vis_km, "km"),
    };
    let pressure = match units {
        UnitSystem::Imperial => format!("{:.2} inHg", c.pressure_in),
        UnitSystem::Metric => format!("{} mb", c.pressure_mb as i64),
    };

    format!(
        "Now ({}): {} {}{t_unit}, feels like {}{t_unit}\n  \
         Wind {} {w_unit} {}, humidity {}%, clouds {}%\n  \
         Pressure {pressure}, visibility {} {v_unit}\n",
        c.last_updated,
        c.condition.text(),
        temp as i64,
        feels as i64,
        wind as i64,
        c.wind_dir,
        c.humidity,
        c.cloud,
        vis as i64,
    )
}

fn forecast_day(day: &ForecastDay, units: UnitSystem) -> String {
    let d = &day.day;
    let (hi, lo, t_unit) = match units {
        UnitSystem::Imperial => (d.maxtemp_f, d.mintemp_f, "°F"),
        UnitSystem::Metric => (d.maxtemp_c, d.mintemp_c, "°C"),
    };
    let precip = match units {
        UnitSystem::Imperial => format!("{:.2} in", d.totalprecip_in),
        UnitSystem::Metric => format!("{:.1} mm", d.totalprecip_mm),
    };
    let weekday = NaiveDate::parse_from_str(&day.date, "%Y-%m-%d")
        .map(|date| date.format("%a").to_string())
        .unwrap_or_default();

    format!(
        "{weekday:<3} {}  {:<13} {:>4}{t_unit} / {:>4}{t_unit}  rain {:>2}%  {precip}  ({}h)\n",
        day.date,
        d.condition.text(),
        hi as i64,
        lo as i64,
        d.daily_chance_of_rain,
        day.hour.len(),
    )
}
