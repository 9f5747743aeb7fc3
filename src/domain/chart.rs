// Chart domain models - geometry and display data, never markup
use serde::{Deserialize, Serialize};

/// One location's aligned window of samples
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

/// Aligned series plus the hour labels of the reference location
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSet {
    pub hour_labels: Vec<String>,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
    pub value_unit: String,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 320.0,
            padding: Padding {
                top: 24.0,
                right: 18.0,
                bottom: 48.0,
                left: 42.0,
            },
            value_unit: "°F".to_string(),
        }
    }
}

impl ChartLayout {
    pub fn plot_width(&self) -> f64 {
        self.width - self.padding.left - self.padding.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.padding.top - self.padding.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLine {
    pub name: String,
    pub color: String,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gridline {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub lines: Vec<ChartLine>,
    pub gridlines: Vec<Gridline>,
    pub time_ticks: Vec<TickLabel>,
    pub value_ticks: Vec<TickLabel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecipBar {
    pub height_px: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecipTimeline {
    pub bars: Vec<PrecipBar>,
    pub peak_percent: f64,
    pub peak_label: String,
}
