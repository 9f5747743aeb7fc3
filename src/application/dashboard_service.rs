// Dashboard service - Use case for rendering every section from one snapshot
use crate::application::chart_geometry::build_temperature_chart_geometry;
use crate::application::comparison::build_comparison;
use crate::application::details::{build_hourly_details, build_stat_panels};
use crate::application::hero::build_hero;
use crate::application::precip_timeline::build_precip_timeline;
use crate::application::series_aligner::build_series;
use crate::domain::dashboard::{Dashboard, Section};
use crate::domain::error::DataUnavailable;
use crate::domain::forecast::{ForecastPayload, ForecastSnapshot};
use crate::domain::format::format_hour_label;
use crate::domain::location::Location;
use crate::infrastructure::config::DashboardConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    config: Arc<DashboardConfig>,
}

/// Guard one section so its failure never blanks another
fn section<T>(
    name: &str,
    enabled: bool,
    build: impl FnOnce() -> Result<T, DataUnavailable>,
) -> Section<T> {
    if !enabled {
        return Section::Disabled;
    }

    let result = build();
    if let Err(e) = &result {
        tracing::warn!("Section {} unavailable: {}", name, e);
    }
    Section::from_result(result)
}

impl DashboardService {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn locations(&self) -> &[Location] {
        &self.config.locations
    }

    pub fn default_location_id(&self) -> &str {
        self.config.default_location_id()
    }

    /// Requested location if it has data, then the default, then the first with data
    pub fn resolve_primary<'a>(
        &'a self,
        snapshot: &ForecastSnapshot,
        requested: Option<&str>,
    ) -> Option<&'a Location> {
        let has_data = |location: &&Location| snapshot.payload(&location.id).is_some();

        requested
            .and_then(|id| Location::find(self.locations(), id))
            .filter(has_data)
            .or_else(|| Location::find(self.locations(), self.default_location_id()).filter(has_data))
            .or_else(|| self.locations().iter().find(has_data))
    }

    pub fn render(&self, snapshot: &ForecastSnapshot, requested_primary: Option<&str>) -> Dashboard {
        let toggles = &self.config.sections;
        let window = self.config.window_size;
        let primary = self.resolve_primary(snapshot, requested_primary);
        let primary_payload = primary.and_then(|location| snapshot.payload(&location.id));

        tracing::debug!(
            "Rendering dashboard with primary {:?}",
            primary.map(|location| location.id.as_str())
        );

        let missing_primary = || {
            DataUnavailable::MissingPayload(
                requested_primary
                    .unwrap_or_else(|| self.default_location_id())
                    .to_string(),
            )
        };
        let with_primary_payload = || primary_payload.ok_or_else(missing_primary);

        let hero = section("hero", toggles.hero, || {
            build_hero(primary.ok_or_else(missing_primary)?, snapshot)
        });

        let temperature_chart = section("temperature_chart", toggles.temperature_chart, || {
            let set = build_series(self.locations(), snapshot, window, &self.config.palette)?;
            build_temperature_chart_geometry(&set, &self.config.chart)
        });

        let precip_timeline = section("precip_timeline", toggles.precip_timeline, || {
            let payload: &ForecastPayload = with_primary_payload()?;
            // Missing stamps only blank their own bar labels
            let labels: Vec<String> = payload
                .hourly
                .time
                .iter()
                .take(window)
                .map(|stamp| format_hour_label(Some(stamp.as_str())))
                .collect();
            build_precip_timeline(&payload.hourly.precipitation_probability, &labels, window)
        });

        let comparison = section("comparison", toggles.comparison, || {
            let location = primary.ok_or_else(missing_primary)?;
            Ok(build_comparison(self.locations(), snapshot, &location.id))
        });

        let stats = section("stats", toggles.stats, || {
            Ok(build_stat_panels(with_primary_payload()?))
        });

        let hourly = section("hourly", toggles.hourly, || {
            build_hourly_details(with_primary_payload()?, window)
        });

        Dashboard {
            primary_id: primary.map(|location| location.id.clone()),
            updated_at: snapshot.fetched_at(),
            hero,
            temperature_chart,
            precip_timeline,
            comparison,
            stats,
            hourly,
        }
    }
}
