// Detail panels - stat tiles and hourly cards for the primary location
use crate::application::series_aligner::hour_labels;
use crate::domain::condition::Condition;
use crate::domain::dashboard::{HourlyDetail, StatPanel};
use crate::domain::error::DataUnavailable;
use crate::domain::forecast::{ForecastPayload, sample_at, stamp_at};
use crate::domain::format::{
    SENTINEL, compass_from_degrees, convert_pressure_hpa_to_inhg, format_clock_label,
    format_duration, format_fixed, format_rounded, with_unit,
};

fn panel(id: &'static str, title: &'static str, value: String) -> StatPanel {
    StatPanel { id, title, value }
}

/// "12 mph NW", or just the speed when the bearing is unknown
fn wind_summary(speed: Option<f64>, direction: Option<f64>) -> String {
    let speed = with_unit(format_rounded(speed), " mph");
    match compass_from_degrees(direction) {
        SENTINEL => speed,
        bearing => format!("{} {}", speed, bearing),
    }
}

pub fn build_stat_panels(payload: &ForecastPayload) -> Vec<StatPanel> {
    let current = &payload.current;
    let daily = &payload.daily;
    let pressure_hpa = current
        .pressure_msl
        .filter(|p| p.is_finite())
        .or(current.surface_pressure);

    vec![
        panel(
            "feels_like",
            "Feels like",
            with_unit(format_rounded(current.apparent_temperature), "°F"),
        ),
        panel(
            "humidity",
            "Humidity",
            with_unit(format_rounded(current.relative_humidity), "%"),
        ),
        panel(
            "wind",
            "Wind",
            wind_summary(current.wind_speed, current.wind_direction),
        ),
        panel(
            "gusts",
            "Gusts",
            with_unit(format_rounded(current.wind_gusts), " mph"),
        ),
        panel(
            "pressure",
            "Pressure",
            with_unit(
                format_fixed(convert_pressure_hpa_to_inhg(pressure_hpa), 2),
                " inHg",
            ),
        ),
        panel(
            "cloud_cover",
            "Cloud cover",
            with_unit(format_rounded(current.cloud_cover), "%"),
        ),
        panel(
            "precipitation",
            "Precipitation",
            with_unit(format_fixed(current.precipitation, 2), " in"),
        ),
        panel(
            "uv_index",
            "UV index",
            format_fixed(sample_at(&daily.uv_index_max, 0), 1),
        ),
        panel(
            "sunrise",
            "Sunrise",
            format_clock_label(stamp_at(&daily.sunrise, 0)),
        ),
        panel(
            "sunset",
            "Sunset",
            format_clock_label(stamp_at(&daily.sunset, 0)),
        ),
        panel(
            "daylight",
            "Daylight",
            with_unit(format_duration(sample_at(&daily.daylight_duration, 0)), " h"),
        ),
        panel(
            "sunshine",
            "Sunshine",
            with_unit(format_duration(sample_at(&daily.sunshine_duration, 0)), " h"),
        ),
    ]
}

pub fn build_hourly_details(
    payload: &ForecastPayload,
    window: usize,
) -> Result<Vec<HourlyDetail>, DataUnavailable> {
    let hourly = &payload.hourly;
    let labels = hour_labels(&hourly.time, window, "hourly time")?;

    Ok(labels
        .into_iter()
        .enumerate()
        .map(|(index, hour_label)| HourlyDetail {
            hour_label,
            condition: Condition::from_sample(sample_at(&hourly.weather_code, index)),
            temperature: with_unit(format_rounded(sample_at(&hourly.temperature, index)), "°F"),
            feels_like: with_unit(
                format_rounded(sample_at(&hourly.apparent_temperature, index)),
                "°F",
            ),
            precip_chance: with_unit(
                format_rounded(sample_at(&hourly.precipitation_probability, index)),
                "%",
            ),
            humidity: with_unit(
                format_rounded(sample_at(&hourly.relative_humidity, index)),
                "%",
            ),
            wind: with_unit(format_rounded(sample_at(&hourly.wind_speed, index)), " mph"),
        })
        .collect())
}
