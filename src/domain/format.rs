// Value formatting - total functions that never emit NaN into rendered output
use chrono::{NaiveDate, NaiveDateTime};

/// Placeholder shown wherever a value is absent or non-finite
pub const SENTINEL: &str = "--";

pub const INHG_PER_HPA: f64 = 0.0295299831;

const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

fn finite(x: Option<f64>) -> Option<f64> {
    x.filter(|v| v.is_finite())
}

/// Round to the nearest integer, ties toward positive infinity.
///
/// `-0.4` rounds to `0`, never `-0`.
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded + 0.0
}

pub fn format_rounded(x: Option<f64>) -> String {
    match finite(x) {
        Some(value) => format!("{:.0}", round_half_up(value)),
        None => SENTINEL.to_string(),
    }
}

/// Fixed decimals; a value that rounds to zero never keeps its minus sign
pub fn format_fixed(x: Option<f64>, digits: usize) -> String {
    let Some(value) = finite(x) else {
        return SENTINEL.to_string();
    };

    let text = format!("{:.*}", digits, value);
    match text.strip_prefix('-') {
        Some(magnitude) if magnitude.chars().all(|c| c == '0' || c == '.') => {
            magnitude.to_string()
        }
        _ => text,
    }
}

/// Seconds to hours with one decimal place
pub fn format_duration(seconds: Option<f64>) -> String {
    format_fixed(finite(seconds).map(|s| s / 3600.0), 1)
}

pub fn compass_from_degrees(degrees: Option<f64>) -> &'static str {
    match finite(degrees) {
        Some(deg) => {
            let normalized = deg.rem_euclid(360.0);
            let index = round_half_up(normalized / 45.0) as usize % COMPASS_POINTS.len();
            COMPASS_POINTS[index]
        }
        None => SENTINEL,
    }
}

/// Absent rather than NaN when the input is unusable
pub fn convert_pressure_hpa_to_inhg(hpa: Option<f64>) -> Option<f64> {
    finite(hpa).map(|p| p * INHG_PER_HPA)
}

/// Append a unit suffix, leaving the sentinel bare
pub fn with_unit(formatted: String, unit: &str) -> String {
    if formatted == SENTINEL {
        formatted
    } else {
        format!("{}{}", formatted, unit)
    }
}

fn parse_timestamp(stamp: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(stamp, fmt).ok())
}

/// "2025-01-14T15:00" -> "3 PM"
pub fn format_hour_label(stamp: Option<&str>) -> String {
    stamp
        .and_then(parse_timestamp)
        .map(|time| time.format("%-I %p").to_string())
        .unwrap_or_else(|| SENTINEL.to_string())
}

/// "2025-01-14T07:42" -> "7:42 AM"
pub fn format_clock_label(stamp: Option<&str>) -> String {
    stamp
        .and_then(parse_timestamp)
        .map(|time| time.format("%-I:%M %p").to_string())
        .unwrap_or_else(|| SENTINEL.to_string())
}

/// "2025-01-14" -> "Tue"
pub fn format_weekday_label(date: Option<&str>) -> String {
    date.and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .map(|day| day.format("%a").to_string())
        .unwrap_or_else(|| SENTINEL.to_string())
}
