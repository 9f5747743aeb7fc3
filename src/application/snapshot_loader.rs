// Snapshot loader - Use case for fetching every location in one cycle
use crate::application::forecast_source::ForecastSource;
use crate::domain::forecast::ForecastSnapshot;
use crate::domain::location::Location;
use anyhow::Context;
use chrono::Utc;
use futures::future::try_join_all;
use std::sync::Arc;

#[derive(Clone)]
pub struct SnapshotLoader {
    source: Arc<dyn ForecastSource>,
}

impl SnapshotLoader {
    pub fn new(source: Arc<dyn ForecastSource>) -> Self {
        Self { source }
    }

    /// Fetch all locations concurrently. Any single failure fails the whole cycle.
    pub async fn load(&self, locations: &[Location]) -> anyhow::Result<ForecastSnapshot> {
        let fetches = locations.iter().map(|location| async move {
            let payload = self
                .source
                .fetch(location)
                .await
                .with_context(|| format!("Failed to fetch forecast for {}", location.id))?;
            Ok::<_, anyhow::Error>((location.id.clone(), payload))
        });

        let payloads = try_join_all(fetches).await?;
        tracing::debug!("Fetched forecasts for {} locations", payloads.len());

        Ok(ForecastSnapshot::new(payloads.into_iter().collect(), Utc::now()))
    }
}
