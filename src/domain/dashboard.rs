// Dashboard domain model - every section is independently available
use super::chart::{ChartGeometry, PrecipTimeline};
use super::condition::Condition;
use super::error::DataUnavailable;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Section<T> {
    Ready { data: T },
    Unavailable { reason: String },
    Disabled,
}

impl<T> Section<T> {
    pub fn from_result(result: Result<T, DataUnavailable>) -> Self {
        match result {
            Ok(data) => Section::Ready { data },
            Err(err) => Section::Unavailable {
                reason: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
impl<T> Section<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Section::Ready { data } => Some(data),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Section::Ready { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlookDay {
    pub day_label: String,
    pub condition: Condition,
    pub high_low: String,
    pub precip_chance: String,
    pub precip_total: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroSummary {
    pub location_id: String,
    pub short_name: String,
    pub address: String,
    pub condition: Condition,
    pub temperature: String,
    pub is_day: Option<bool>,
    pub outlook: Vec<OutlookDay>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaTrend {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonEntry {
    pub location_id: String,
    pub short_name: String,
    pub address: String,
    pub is_primary: bool,
    pub delta: Option<f64>,
    pub delta_label: String,
    pub trend: Option<DeltaTrend>,
    pub condition: Condition,
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind: String,
    pub precip_chance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatPanel {
    pub id: &'static str,
    pub title: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyDetail {
    pub hour_label: String,
    pub condition: Condition,
    pub temperature: String,
    pub feels_like: String,
    pub precip_chance: String,
    pub humidity: String,
    pub wind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub primary_id: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub hero: Section<HeroSummary>,
    pub temperature_chart: Section<ChartGeometry>,
    pub precip_timeline: Section<PrecipTimeline>,
    pub comparison: Section<Vec<ComparisonEntry>>,
    pub stats: Section<Vec<StatPanel>>,
    pub hourly: Section<Vec<HourlyDetail>>,
}
