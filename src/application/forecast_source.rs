// Source trait for forecast payload retrieval
use crate::domain::forecast::ForecastPayload;
use crate::domain::location::Location;
use async_trait::async_trait;

#[async_trait]
pub trait ForecastSource: Send + Sync {
    /// Fetch current, hourly and daily forecast for one location
    async fn fetch(&self, location: &Location) -> anyhow::Result<ForecastPayload>;
}
