// Series aligner - fixed hourly window per location, one colored line each
use crate::domain::chart::{Series, SeriesSet};
use crate::domain::error::DataUnavailable;
use crate::domain::forecast::{ForecastSnapshot, sample_at};
use crate::domain::format::format_hour_label;
use crate::domain::location::Location;

pub const WINDOW_SIZE: usize = 24;

const FALLBACK_COLOR: &str = "#0f6df2";

pub fn color_for_index(palette: &[String], index: usize) -> String {
    if palette.is_empty() {
        return FALLBACK_COLOR.to_string();
    }
    palette[index % palette.len()].clone()
}

/// First `window` samples, all finite; never padded
pub fn window_of(
    samples: &[Option<f64>],
    window: usize,
    series: &str,
) -> Result<Vec<f64>, DataUnavailable> {
    if samples.len() < window {
        return Err(DataUnavailable::TooShort {
            series: series.to_string(),
            actual: samples.len(),
            required: window,
        });
    }

    (0..window)
        .map(|index| {
            sample_at(samples, index).ok_or_else(|| DataUnavailable::NonFinite {
                series: series.to_string(),
                index,
            })
        })
        .collect()
}

pub fn hour_labels(
    stamps: &[String],
    window: usize,
    series: &str,
) -> Result<Vec<String>, DataUnavailable> {
    if stamps.len() < window {
        return Err(DataUnavailable::TooShort {
            series: series.to_string(),
            actual: stamps.len(),
            required: window,
        });
    }

    Ok(stamps[..window]
        .iter()
        .map(|stamp| format_hour_label(Some(stamp.as_str())))
        .collect())
}

/// Hourly temperature lines for every location, in configured order.
///
/// The first location is the reference for the shared hour axis. Any
/// location with a missing or short temperature array fails the whole set.
pub fn build_series(
    locations: &[Location],
    snapshot: &ForecastSnapshot,
    window: usize,
    palette: &[String],
) -> Result<SeriesSet, DataUnavailable> {
    let reference = locations.first().ok_or(DataUnavailable::NoSeries)?;
    let reference_payload = snapshot
        .payload(&reference.id)
        .ok_or_else(|| DataUnavailable::MissingPayload(reference.id.clone()))?;
    let hour_labels = hour_labels(
        &reference_payload.hourly.time,
        window,
        &format!("{} hourly time", reference.id),
    )?;

    let series = locations
        .iter()
        .enumerate()
        .map(|(index, location)| {
            let payload = snapshot
                .payload(&location.id)
                .ok_or_else(|| DataUnavailable::MissingPayload(location.id.clone()))?;
            let values = window_of(
                &payload.hourly.temperature,
                window,
                &format!("{} hourly temperature", location.id),
            )?;

            Ok(Series {
                name: location.short_name.clone(),
                color: color_for_index(palette, index),
                values,
            })
        })
        .collect::<Result<Vec<_>, DataUnavailable>>()?;

    tracing::debug!(
        "Aligned {} series over a {} sample window",
        series.len(),
        window
    );

    Ok(SeriesSet {
        hour_labels,
        series,
    })
}
