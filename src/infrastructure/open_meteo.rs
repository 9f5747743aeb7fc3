// Open-Meteo forecast source implementation
use crate::application::forecast_source::ForecastSource;
use crate::domain::forecast::ForecastPayload;
use crate::domain::location::Location;
use crate::infrastructure::config::ForecastApiSettings;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

const CURRENT_METRICS: &[&str] = &[
    "temperature_2m",
    "apparent_temperature",
    "relative_humidity_2m",
    "weather_code",
    "wind_speed_10m",
    "wind_direction_10m",
    "wind_gusts_10m",
    "pressure_msl",
    "surface_pressure",
    "cloud_cover",
    "precipitation",
    "is_day",
];

const HOURLY_METRICS: &[&str] = &[
    "temperature_2m",
    "precipitation_probability",
    "weather_code",
    "apparent_temperature",
    "relative_humidity_2m",
    "wind_speed_10m",
];

const DAILY_METRICS: &[&str] = &[
    "weather_code",
    "temperature_2m_max",
    "temperature_2m_min",
    "precipitation_probability_max",
    "precipitation_sum",
    "uv_index_max",
    "sunrise",
    "sunset",
    "daylight_duration",
    "sunshine_duration",
];

#[derive(Debug, Clone)]
pub struct OpenMeteoSource {
    client: reqwest::Client,
    base_url: String,
    forecast_days: u32,
}

impl OpenMeteoSource {
    pub fn new(settings: &ForecastApiSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            forecast_days: settings.forecast_days,
        })
    }

    fn forecast_url(&self) -> String {
        format!("{}/v1/forecast", self.base_url)
    }

    /// Imperial units with the location's own timezone
    fn query_params(&self, location: &Location) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
            ("current", CURRENT_METRICS.join(",")),
            ("hourly", HOURLY_METRICS.join(",")),
            ("daily", DAILY_METRICS.join(",")),
            ("forecast_days", self.forecast_days.to_string()),
            ("temperature_unit", "fahrenheit".to_string()),
            ("wind_speed_unit", "mph".to_string()),
            ("precipitation_unit", "inch".to_string()),
            ("timezone", "auto".to_string()),
        ]
    }
}

#[async_trait]
impl ForecastSource for OpenMeteoSource {
    async fn fetch(&self, location: &Location) -> Result<ForecastPayload> {
        let response = self
            .client
            .get(self.forecast_url())
            .query(&self.query_params(location))
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request to Open-Meteo")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Open-Meteo request for {} failed with status {}: {}",
                location.id,
                status,
                body
            );
        }

        let payload = response
            .json::<ForecastPayload>()
            .await
            .context("Failed to parse Open-Meteo response")?;

        tracing::debug!(
            "Fetched {} hourly samples for {} ({})",
            payload.hourly.time.len(),
            location.id,
            payload.timezone
        );

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> OpenMeteoSource {
        OpenMeteoSource::new(&ForecastApiSettings {
            base_url: "https://api.open-meteo.com/".to_string(),
            forecast_days: 5,
            timeout_secs: 10,
        })
        .unwrap()
    }

    fn location() -> Location {
        Location {
            id: "slc-2300e".to_string(),
            short_name: "S 2300 E".to_string(),
            label: String::new(),
            address: "859 S 2300 E, Salt Lake City, UT 84108".to_string(),
            latitude: 40.751,
            longitude: -111.821,
        }
    }

    #[test]
    fn test_forecast_url() {
        assert_eq!(source().forecast_url(), "https://api.open-meteo.com/v1/forecast");
    }

    #[test]
    fn test_query_params() {
        let params = source().query_params(&location());
        let get = |key: &str| {
            params
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };

        assert_eq!(get("latitude"), "40.751");
        assert_eq!(get("longitude"), "-111.821");
        assert_eq!(get("forecast_days"), "5");
        assert_eq!(get("temperature_unit"), "fahrenheit");
        assert_eq!(get("wind_speed_unit"), "mph");
        assert_eq!(get("precipitation_unit"), "inch");
        assert!(get("hourly").starts_with("temperature_2m,precipitation_probability"));
        assert!(get("daily").contains("uv_index_max"));
        assert!(get("current").contains("wind_direction_10m"));
    }
}
