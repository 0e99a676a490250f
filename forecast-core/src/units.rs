//! Unit conversions between the feed's imperial-native values and their
//! metric counterparts. No rounding happens here.

pub const KPH_PER_MPH: f64 = 1.60934;
pub const PASCALS_PER_INCH_OF_MERCURY: f64 = 3386.39;
pub const PASCALS_PER_MILLIBAR: f64 = 100.0;
pub const METERS_PER_KILOMETER: f64 = 1000.0;
pub const METERS_PER_MILE: f64 = 1609.34;
pub const MILLIMETERS_PER_INCH: f64 = 25.4;

pub fn celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

pub fn fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn kph(mph: f64) -> f64 {
    mph * KPH_PER_MPH
}

pub fn mph(kph: f64) -> f64 {
    kph / KPH_PER_MPH
}

pub fn inches_of_mercury(pascals: f64) -> f64 {
    pascals / PASCALS_PER_INCH_OF_MERCURY
}

pub fn millibars(pascals: f64) -> f64 {
    pascals / PASCALS_PER_MILLIBAR
}

pub fn kilometers(meters: f64) -> f64 {
    meters / METERS_PER_KILOMETER
}

pub fn miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}

pub fn millimeters(inches: f64) -> f64 {
    inches * MILLIMETERS_PER_INCH
}
