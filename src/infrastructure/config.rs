use crate::application::series_aligner::WINDOW_SIZE;
use crate::domain::chart::ChartLayout;
use crate::domain::location::Location;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
    pub forecast: ForecastApiSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_address: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastApiSettings {
    pub base_url: String,
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub locations: Vec<Location>,
    #[serde(default)]
    pub default_location: Option<String>,
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    #[serde(default)]
    pub chart: ChartLayout,
    #[serde(default)]
    pub sections: SectionToggles,
}

/// Reduced views switch sections off instead of maintaining separate variants
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SectionToggles {
    pub hero: bool,
    pub temperature_chart: bool,
    pub precip_timeline: bool,
    pub comparison: bool,
    pub stats: bool,
    pub hourly: bool,
}

impl Default for SectionToggles {
    fn default() -> Self {
        Self {
            hero: true,
            temperature_chart: true,
            precip_timeline: true,
            comparison: true,
            stats: true,
            hourly: true,
        }
    }
}

fn default_forecast_days() -> u32 {
    5
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_palette() -> Vec<String> {
    ["#0f6df2", "#2aa889", "#f18f01", "#e94f37"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

fn default_window_size() -> usize {
    WINDOW_SIZE
}

impl DashboardConfig {
    pub fn validate(self) -> anyhow::Result<Self> {
        if self.locations.is_empty() {
            anyhow::bail!("dashboard config must list at least one location");
        }

        let mut seen = HashSet::new();
        for location in &self.locations {
            if !seen.insert(location.id.as_str()) {
                anyhow::bail!("duplicate location id '{}'", location.id);
            }
        }

        if self.palette.is_empty() {
            anyhow::bail!("palette must contain at least one color");
        }
        if self.window_size == 0 {
            anyhow::bail!("window_size must be at least 1");
        }

        if let Some(id) = &self.default_location {
            if Location::find(&self.locations, id).is_none() {
                tracing::warn!(
                    "Default location '{}' is not configured, using '{}'",
                    id,
                    self.locations[0].id
                );
            }
        }

        Ok(self)
    }

    /// Configured default if it names a known location, else the first one
    pub fn default_location_id(&self) -> &str {
        self.default_location
            .as_deref()
            .filter(|id| Location::find(&self.locations, id).is_some())
            .or_else(|| self.locations.first().map(|location| location.id.as_str()))
            .unwrap_or_default()
    }
}

pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .build()?;

    settings.try_deserialize::<DashboardConfig>()?.validate()
}
