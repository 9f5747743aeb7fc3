// Precipitation timeline - hourly probability bars for the primary location
use crate::application::series_aligner::window_of;
use crate::domain::chart::{PrecipBar, PrecipTimeline};
use crate::domain::error::DataUnavailable;
use crate::domain::format::{SENTINEL, format_rounded, round_half_up, with_unit};

/// Zero-probability bars still render as a sliver
const MIN_BAR_HEIGHT_PX: f64 = 4.0;

const LABEL_EVERY: usize = 3;

pub fn build_precip_timeline(
    samples: &[Option<f64>],
    hour_labels: &[String],
    window: usize,
) -> Result<PrecipTimeline, DataUnavailable> {
    let values = window_of(samples, window, "hourly precipitation probability")?;
    if values.is_empty() {
        return Err(DataUnavailable::TooShort {
            series: "hourly precipitation probability".to_string(),
            actual: 0,
            required: 1,
        });
    }

    let last = values.len() - 1;
    let bars = values
        .iter()
        .enumerate()
        .map(|(index, &percent)| {
            let label = if index % LABEL_EVERY == 0 || index == last {
                hour_labels
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| SENTINEL.to_string())
            } else {
                String::new()
            };
            PrecipBar {
                height_px: round_half_up(percent).max(MIN_BAR_HEIGHT_PX),
                label,
            }
        })
        .collect();

    let peak_percent = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(PrecipTimeline {
        bars,
        peak_percent,
        peak_label: with_unit(format_rounded(Some(peak_percent)), "%"),
    })
}
