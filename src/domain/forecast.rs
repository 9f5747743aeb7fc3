// Forecast payload domain models - every metric is optional and independently sized
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// Current conditions for one location
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Readings {
    #[serde(rename = "temperature_2m")]
    pub temperature: Option<f64>,
    pub apparent_temperature: Option<f64>,
    #[serde(rename = "relative_humidity_2m")]
    pub relative_humidity: Option<f64>,
    pub weather_code: Option<f64>,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: Option<f64>,
    #[serde(rename = "wind_direction_10m")]
    pub wind_direction: Option<f64>,
    #[serde(rename = "wind_gusts_10m")]
    pub wind_gusts: Option<f64>,
    pub pressure_msl: Option<f64>,
    pub surface_pressure: Option<f64>,
    pub cloud_cover: Option<f64>,
    pub precipitation: Option<f64>,
    pub is_day: Option<f64>,
}

impl Readings {
    pub fn is_day(&self) -> Option<bool> {
        self.is_day.filter(|v| v.is_finite()).map(|v| v != 0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HourlySeries {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m")]
    pub temperature: Vec<Option<f64>>,
    pub precipitation_probability: Vec<Option<f64>>,
    pub weather_code: Vec<Option<f64>>,
    pub apparent_temperature: Vec<Option<f64>>,
    #[serde(rename = "relative_humidity_2m")]
    pub relative_humidity: Vec<Option<f64>>,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub weather_code: Vec<Option<f64>>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Vec<Option<f64>>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Vec<Option<f64>>,
    pub precipitation_probability_max: Vec<Option<f64>>,
    pub precipitation_sum: Vec<Option<f64>>,
    pub uv_index_max: Vec<Option<f64>>,
    pub sunrise: Vec<String>,
    pub sunset: Vec<String>,
    pub daylight_duration: Vec<Option<f64>>,
    pub sunshine_duration: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForecastPayload {
    pub timezone: String,
    pub current: Readings,
    pub hourly: HourlySeries,
    pub daily: DailySeries,
}

/// Bounds-checked access that also drops absent and non-finite samples
pub fn sample_at(series: &[Option<f64>], index: usize) -> Option<f64> {
    series
        .get(index)
        .copied()
        .flatten()
        .filter(|v| v.is_finite())
}

pub fn stamp_at(stamps: &[String], index: usize) -> Option<&str> {
    stamps.get(index).map(String::as_str)
}

/// Every location's payload from one completed fetch cycle
#[derive(Debug, Clone)]
pub struct ForecastSnapshot {
    payloads: HashMap<String, ForecastPayload>,
    fetched_at: DateTime<Utc>,
}

impl ForecastSnapshot {
    pub fn new(payloads: HashMap<String, ForecastPayload>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            payloads,
            fetched_at,
        }
    }

    pub fn payload(&self, location_id: &str) -> Option<&ForecastPayload> {
        self.payloads.get(location_id)
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}
