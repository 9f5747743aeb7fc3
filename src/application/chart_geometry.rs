// Chart geometry engine - aligned series to plot coordinates for a fixed canvas
use crate::domain::chart::{
    ChartGeometry, ChartLayout, ChartLine, Gridline, Point, SeriesSet, TickLabel,
};
use crate::domain::error::DataUnavailable;
use crate::domain::format::{format_rounded, round_half_up, with_unit};

/// Band added below the minimum and above the maximum sample
const DOMAIN_PADDING: f64 = 2.0;

const GRID_FRACTIONS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

const TIME_TICK_INDICES: [usize; 4] = [0, 6, 12, 18];

const TIME_TICK_BASELINE: f64 = 18.0;
const VALUE_TICK_X: f64 = 6.0;
const VALUE_TICK_BASELINE_SHIFT: f64 = 4.0;

/// Linear mapping from (sample index, value) to canvas pixels
struct PlotScale {
    min_value: f64,
    max_value: f64,
    left: f64,
    top: f64,
    plot_width: f64,
    plot_height: f64,
    last_index: f64,
}

impl PlotScale {
    fn new(min_value: f64, max_value: f64, window: usize, layout: &ChartLayout) -> Self {
        Self {
            min_value,
            max_value,
            left: layout.padding.left,
            top: layout.padding.top,
            plot_width: layout.plot_width(),
            plot_height: layout.plot_height(),
            last_index: window.saturating_sub(1) as f64,
        }
    }

    fn x(&self, index: usize) -> f64 {
        let divisor = if self.last_index == 0.0 { 1.0 } else { self.last_index };
        self.left + (index as f64 / divisor) * self.plot_width
    }

    fn y(&self, value: f64) -> f64 {
        let span = self.max_value - self.min_value;
        let divisor = if span == 0.0 { 1.0 } else { span };
        self.top + ((self.max_value - value) / divisor) * self.plot_height
    }
}

fn validate(set: &SeriesSet) -> Result<usize, DataUnavailable> {
    let window = set
        .series
        .first()
        .map(|s| s.values.len())
        .ok_or(DataUnavailable::NoSeries)?;
    if window == 0 {
        return Err(DataUnavailable::TooShort {
            series: "reference series".to_string(),
            actual: 0,
            required: 1,
        });
    }

    for series in &set.series {
        if series.values.len() != window {
            return Err(DataUnavailable::LengthMismatch {
                expected: window,
                found: series.values.len(),
            });
        }
        if let Some(index) = series.values.iter().position(|v| !v.is_finite()) {
            return Err(DataUnavailable::NonFinite {
                series: series.name.clone(),
                index,
            });
        }
    }

    if set.hour_labels.len() < window {
        return Err(DataUnavailable::TooShort {
            series: "hour labels".to_string(),
            actual: set.hour_labels.len(),
            required: window,
        });
    }

    Ok(window)
}

/// Sample indices that carry a time label: every 6 hours plus the last sample
pub fn time_tick_indices(window: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = TIME_TICK_INDICES
        .iter()
        .copied()
        .filter(|&i| i < window)
        .chain(window.checked_sub(1))
        .collect();
    indices.sort_unstable();
    indices.dedup();
    indices
}

pub fn build_temperature_chart_geometry(
    set: &SeriesSet,
    layout: &ChartLayout,
) -> Result<ChartGeometry, DataUnavailable> {
    let window = validate(set)?;

    let (lowest, highest) = set
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    let min_value = (lowest - DOMAIN_PADDING).floor();
    let max_value = (highest + DOMAIN_PADDING).ceil();
    let scale = PlotScale::new(min_value, max_value, window, layout);

    let lines = set
        .series
        .iter()
        .map(|series| ChartLine {
            name: series.name.clone(),
            color: series.color.clone(),
            points: series
                .values
                .iter()
                .enumerate()
                .map(|(index, &value)| Point {
                    x: scale.x(index),
                    y: scale.y(value),
                })
                .collect(),
        })
        .collect();

    let gridlines = GRID_FRACTIONS
        .iter()
        .map(|fraction| Gridline {
            x1: scale.left,
            x2: scale.left + scale.plot_width,
            y: scale.top + fraction * scale.plot_height,
        })
        .collect();

    let time_ticks = time_tick_indices(window)
        .into_iter()
        .map(|index| TickLabel {
            x: scale.x(index),
            y: layout.height - TIME_TICK_BASELINE,
            text: set.hour_labels[index].clone(),
        })
        .collect();

    let value_ticks = [
        min_value,
        min_value + (max_value - min_value) / 2.0,
        max_value,
    ]
    .into_iter()
    .map(|value| {
        let rounded = round_half_up(value);
        TickLabel {
            x: VALUE_TICK_X,
            y: scale.y(rounded) + VALUE_TICK_BASELINE_SHIFT,
            text: with_unit(format_rounded(Some(rounded)), &layout.value_unit),
        }
    })
    .collect();

    Ok(ChartGeometry {
        width: layout.width,
        height: layout.height,
        min_value,
        max_value,
        lines,
        gridlines,
        time_ticks,
        value_ticks,
    })
}
