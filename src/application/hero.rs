// Hero summary - primary location's current condition and multi-day outlook
use crate::domain::condition::Condition;
use crate::domain::dashboard::{HeroSummary, OutlookDay};
use crate::domain::error::DataUnavailable;
use crate::domain::forecast::{DailySeries, ForecastSnapshot, sample_at};
use crate::domain::format::{format_fixed, format_rounded, format_weekday_label, with_unit};
use crate::domain::location::Location;

fn outlook(daily: &DailySeries) -> Vec<OutlookDay> {
    daily
        .time
        .iter()
        .enumerate()
        .map(|(index, date)| OutlookDay {
            day_label: format_weekday_label(Some(date.as_str())),
            condition: Condition::from_sample(sample_at(&daily.weather_code, index)),
            high_low: format!(
                "{}° / {}°",
                format_rounded(sample_at(&daily.temperature_max, index)),
                format_rounded(sample_at(&daily.temperature_min, index)),
            ),
            precip_chance: with_unit(
                format_rounded(sample_at(&daily.precipitation_probability_max, index)),
                "%",
            ),
            precip_total: with_unit(format_fixed(sample_at(&daily.precipitation_sum, index), 2), " in"),
        })
        .collect()
}

pub fn build_hero(
    location: &Location,
    snapshot: &ForecastSnapshot,
) -> Result<HeroSummary, DataUnavailable> {
    let payload = snapshot
        .payload(&location.id)
        .ok_or_else(|| DataUnavailable::MissingPayload(location.id.clone()))?;

    Ok(HeroSummary {
        location_id: location.id.clone(),
        short_name: location.short_name.clone(),
        address: location.address.clone(),
        condition: Condition::from_sample(payload.current.weather_code),
        temperature: with_unit(format_rounded(payload.current.temperature), "°F"),
        is_day: payload.current.is_day(),
        outlook: outlook(&payload.daily),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fixtures::{location, payload, snapshot};
    use crate::domain::condition::ConditionCategory;
    use crate::domain::format::SENTINEL;

    #[test]
    fn test_build_hero() {
        let snapshot = snapshot(vec![("eastwood", payload(41.6))]);
        let hero = build_hero(&location("eastwood", "Eastwood"), &snapshot).unwrap();

        assert_eq!(hero.short_name, "Eastwood");
        assert_eq!(hero.temperature, "42°F");
        assert_eq!(hero.condition.category, ConditionCategory::Partly);
        assert_eq!(hero.is_day, Some(true));

        assert_eq!(hero.outlook.len(), 3);
        assert_eq!(hero.outlook[0].day_label, "Tue");
        assert_eq!(hero.outlook[0].high_low, "48° / 30°");
        assert_eq!(hero.outlook[1].condition.category, ConditionCategory::Rain);
        assert_eq!(hero.outlook[2].condition.category, ConditionCategory::Snow);
        assert_eq!(hero.outlook[2].precip_chance, "80%");
        assert_eq!(hero.outlook[0].precip_total, "0.00 in");
        assert_eq!(hero.outlook[1].precip_total, "0.12 in");
    }

    #[test]
    fn test_short_daily_arrays_degrade_per_field() {
        let mut partial = payload(41.6);
        partial.daily.temperature_min.truncate(1);
        partial.daily.weather_code.clear();
        partial.daily.precipitation_sum.truncate(2);
        let snapshot = snapshot(vec![("eastwood", partial)]);

        let hero = build_hero(&location("eastwood", "Eastwood"), &snapshot).unwrap();
        assert_eq!(hero.outlook.len(), 3);
        assert_eq!(hero.outlook[1].high_low, format!("51° / {}°", SENTINEL));
        assert_eq!(hero.outlook[1].condition.category, ConditionCategory::Unknown);
        assert_eq!(hero.outlook[2].precip_total, SENTINEL);
    }

    #[test]
    fn test_missing_payload() {
        let snapshot = snapshot(vec![]);
        let err = build_hero(&location("eastwood", "Eastwood"), &snapshot).unwrap_err();
        assert_eq!(err, DataUnavailable::MissingPayload("eastwood".to_string()));
    }
}
