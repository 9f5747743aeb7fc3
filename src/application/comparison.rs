// Comparison engine - every location's current reading against the primary
use crate::domain::condition::Condition;
use crate::domain::dashboard::{ComparisonEntry, DeltaTrend};
use crate::domain::forecast::{ForecastPayload, ForecastSnapshot, sample_at};
use crate::domain::format::{SENTINEL, format_rounded, with_unit};
use crate::domain::location::Location;

const PRIMARY_LABEL: &str = "Primary";

/// Zero counts as not-warmer. Product has not confirmed this tie-break.
pub fn trend_for_delta(delta: f64) -> DeltaTrend {
    if delta > 0.0 {
        DeltaTrend::Positive
    } else {
        DeltaTrend::Negative
    }
}

pub fn delta_label(delta: Option<f64>) -> String {
    match delta {
        Some(d) => {
            let sign = if d > 0.0 { "+" } else { "" };
            format!("{}{}° vs primary", sign, format_rounded(Some(d)))
        }
        None => SENTINEL.to_string(),
    }
}

fn finite_temperature(payload: &ForecastPayload) -> Option<f64> {
    payload.current.temperature.filter(|t| t.is_finite())
}

fn comparison_entry(
    location: &Location,
    payload: &ForecastPayload,
    is_primary: bool,
    primary_temperature: Option<f64>,
) -> ComparisonEntry {
    let current = &payload.current;

    let (delta, delta_label, trend) = if is_primary {
        (Some(0.0), PRIMARY_LABEL.to_string(), None)
    } else {
        let delta = finite_temperature(payload)
            .zip(primary_temperature)
            .map(|(temperature, primary)| temperature - primary);
        (delta, self::delta_label(delta), delta.map(trend_for_delta))
    };

    ComparisonEntry {
        location_id: location.id.clone(),
        short_name: location.short_name.clone(),
        address: location.address.clone(),
        is_primary,
        delta,
        delta_label,
        trend,
        condition: Condition::from_sample(current.weather_code),
        temperature: with_unit(format_rounded(current.temperature), "°F"),
        feels_like: with_unit(format_rounded(current.apparent_temperature), "°F"),
        humidity: with_unit(format_rounded(current.relative_humidity), "%"),
        wind: with_unit(format_rounded(current.wind_speed), " mph"),
        precip_chance: with_unit(
            format_rounded(sample_at(&payload.daily.precipitation_probability_max, 0)),
            "%",
        ),
    }
}

/// One entry per location with a payload, in configured order.
///
/// Locations without a payload are skipped. A missing temperature only
/// blanks the affected deltas.
pub fn build_comparison(
    locations: &[Location],
    snapshot: &ForecastSnapshot,
    primary_id: &str,
) -> Vec<ComparisonEntry> {
    let primary_temperature = snapshot.payload(primary_id).and_then(finite_temperature);

    locations
        .iter()
        .filter_map(|location| {
            let payload = snapshot.payload(&location.id)?;
            Some(comparison_entry(
                location,
                payload,
                location.id == primary_id,
                primary_temperature,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fixtures::{locations, payload, snapshot};

    #[test]
    fn test_warmer_location_is_positive() {
        let snapshot = snapshot(vec![
            ("cleveland", payload(70.0)),
            ("perrys-hollow", payload(75.0)),
            ("eastwood", payload(62.4)),
        ]);

        let entries = build_comparison(&locations(), &snapshot, "cleveland");
        assert_eq!(entries.len(), 3);

        let warmer = &entries[1];
        assert_eq!(warmer.delta, Some(5.0));
        assert_eq!(warmer.delta_label, "+5° vs primary");
        assert_eq!(warmer.trend, Some(DeltaTrend::Positive));

        let cooler = &entries[2];
        assert_eq!(cooler.delta_label, "-8° vs primary");
        assert_eq!(cooler.trend, Some(DeltaTrend::Negative));
    }

    #[test]
    fn test_zero_delta_is_negative() {
        let snapshot = snapshot(vec![
            ("cleveland", payload(70.0)),
            ("perrys-hollow", payload(70.0)),
        ]);

        let entries = build_comparison(&locations(), &snapshot, "cleveland");
        assert_eq!(entries[1].delta, Some(0.0));
        assert_eq!(entries[1].delta_label, "0° vs primary");
        assert_eq!(entries[1].trend, Some(DeltaTrend::Negative));
    }

    #[test]
    fn test_primary_entry_is_flagged() {
        let snapshot = snapshot(vec![
            ("cleveland", payload(70.0)),
            ("perrys-hollow", payload(75.0)),
        ]);

        let entries = build_comparison(&locations(), &snapshot, "perrys-hollow");
        let primary = &entries[1];
        assert!(primary.is_primary);
        assert_eq!(primary.delta, Some(0.0));
        assert_eq!(primary.delta_label, "Primary");
        assert_eq!(primary.trend, None);
        assert!(!entries[0].is_primary);
        assert_eq!(entries[0].delta, Some(-5.0));
    }

    #[test]
    fn test_formatted_fields() {
        let snapshot = snapshot(vec![("cleveland", payload(70.0))]);
        let entry = &build_comparison(&locations(), &snapshot, "cleveland")[0];

        assert_eq!(entry.short_name, "Cleveland");
        assert_eq!(entry.temperature, "70°F");
        assert_eq!(entry.feels_like, "67°F");
        assert_eq!(entry.humidity, "45%");
        assert_eq!(entry.wind, "8 mph");
        assert_eq!(entry.precip_chance, "20%");
        assert_eq!(entry.condition.label, "Partly Cloudy");
    }

    #[test]
    fn test_missing_payloads_are_skipped() {
        let snapshot = snapshot(vec![
            ("cleveland", payload(70.0)),
            ("eastwood", payload(71.0)),
        ]);

        let entries = build_comparison(&locations(), &snapshot, "cleveland");
        let ids: Vec<&str> = entries.iter().map(|e| e.location_id.as_str()).collect();
        assert_eq!(ids, vec!["cleveland", "eastwood"]);
    }

    #[test]
    fn test_missing_temperature_only_blanks_its_delta() {
        let mut no_temp = payload(75.0);
        no_temp.current.temperature = None;
        let snapshot = snapshot(vec![
            ("cleveland", payload(70.0)),
            ("perrys-hollow", no_temp),
            ("eastwood", payload(72.0)),
        ]);

        let entries = build_comparison(&locations(), &snapshot, "cleveland");
        assert_eq!(entries[1].delta, None);
        assert_eq!(entries[1].delta_label, SENTINEL);
        assert_eq!(entries[1].trend, None);
        assert_eq!(entries[1].temperature, SENTINEL);
        assert_eq!(entries[2].delta_label, "+2° vs primary");
    }

    #[test]
    fn test_missing_primary_temperature_blanks_all_deltas() {
        let mut no_temp = payload(70.0);
        no_temp.current.temperature = Some(f64::NAN);
        let snapshot = snapshot(vec![
            ("cleveland", no_temp),
            ("perrys-hollow", payload(75.0)),
        ]);

        let entries = build_comparison(&locations(), &snapshot, "cleveland");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].delta, None);
        assert_eq!(entries[1].temperature, "75°F");
    }
}
