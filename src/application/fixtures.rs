// Shared payload builders for unit tests
use crate::domain::forecast::{DailySeries, ForecastPayload, ForecastSnapshot, HourlySeries, Readings};
use crate::domain::location::Location;
use chrono::{TimeZone, Utc};
use std::collections::HashMap;

pub fn location(id: &str, short_name: &str) -> Location {
    Location {
        id: id.to_string(),
        short_name: short_name.to_string(),
        label: String::new(),
        address: format!("{} address", short_name),
        latitude: 40.75,
        longitude: -111.82,
    }
}

pub fn locations() -> Vec<Location> {
    vec![
        location("cleveland", "Cleveland"),
        location("perrys-hollow", "Perrys Hollow"),
        location("eastwood", "Eastwood"),
    ]
}

/// Hourly stamps starting at midnight on 2025-01-14
pub fn hour_stamps(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let day = 14 + i / 24;
            format!("2025-01-{:02}T{:02}:00", day, i % 24)
        })
        .collect()
}

pub fn samples(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

/// A complete payload: constant current readings, a 48 hour ramp and 3 days
pub fn payload(current_temp: f64) -> ForecastPayload {
    let temps: Vec<f64> = (0..48).map(|i| current_temp - 5.0 + (i % 24) as f64 * 0.5).collect();
    let precip: Vec<f64> = (0..48).map(|i| ((i * 7) % 60) as f64).collect();
    let codes: Vec<f64> = (0..48).map(|i| if i < 12 { 0.0 } else { 61.0 }).collect();

    ForecastPayload {
        timezone: "America/Denver".to_string(),
        current: Readings {
            temperature: Some(current_temp),
            apparent_temperature: Some(current_temp - 3.0),
            relative_humidity: Some(45.0),
            weather_code: Some(2.0),
            wind_speed: Some(8.4),
            wind_direction: Some(310.0),
            wind_gusts: Some(17.9),
            pressure_msl: Some(1013.25),
            surface_pressure: Some(850.0),
            cloud_cover: Some(40.0),
            precipitation: Some(0.05),
            is_day: Some(1.0),
        },
        hourly: HourlySeries {
            time: hour_stamps(48),
            temperature: samples(&temps),
            precipitation_probability: samples(&precip),
            weather_code: samples(&codes),
            apparent_temperature: samples(&temps),
            relative_humidity: samples(&[50.0; 48]),
            wind_speed: samples(&[6.0; 48]),
        },
        daily: DailySeries {
            time: vec![
                "2025-01-14".to_string(),
                "2025-01-15".to_string(),
                "2025-01-16".to_string(),
            ],
            weather_code: samples(&[2.0, 61.0, 73.0]),
            temperature_max: samples(&[48.4, 51.0, 39.6]),
            temperature_min: samples(&[30.2, 33.5, 25.0]),
            precipitation_probability_max: samples(&[20.0, 65.0, 80.0]),
            precipitation_sum: samples(&[0.0, 0.12, 0.3]),
            uv_index_max: samples(&[2.35, 1.8, 1.1]),
            sunrise: vec!["2025-01-14T07:48".to_string()],
            sunset: vec!["2025-01-14T17:21".to_string()],
            daylight_duration: samples(&[34560.0]),
            sunshine_duration: samples(&[28800.0]),
        },
    }
}

pub fn snapshot(entries: Vec<(&str, ForecastPayload)>) -> ForecastSnapshot {
    let payloads: HashMap<String, ForecastPayload> = entries
        .into_iter()
        .map(|(id, payload)| (id.to_string(), payload))
        .collect();
    ForecastSnapshot::new(payloads, Utc.with_ymd_and_hms(2025, 1, 14, 12, 0, 0).unwrap())
}
