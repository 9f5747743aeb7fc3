// Weather condition catalog - classification code to icon category and label
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionCategory {
    Clear,
    Partly,
    Cloudy,
    Fog,
    Rain,
    Snow,
    Storm,
    Unknown,
}

impl ConditionCategory {
    pub fn icon(self) -> &'static str {
        match self {
            ConditionCategory::Clear => "☀️",
            ConditionCategory::Partly => "🌤️",
            ConditionCategory::Cloudy => "☁️",
            ConditionCategory::Fog => "🌫️",
            ConditionCategory::Rain => "🌧️",
            ConditionCategory::Snow => "❄️",
            ConditionCategory::Storm => "⛈️",
            ConditionCategory::Unknown => "🌡️",
        }
    }
}

pub fn category_for_code(code: i64) -> ConditionCategory {
    match code {
        0 => ConditionCategory::Clear,
        1 | 2 => ConditionCategory::Partly,
        3 => ConditionCategory::Cloudy,
        45 | 48 => ConditionCategory::Fog,
        51 | 53 | 55 | 56 | 57 | 61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => ConditionCategory::Rain,
        71 | 73 | 75 | 77 | 85 | 86 => ConditionCategory::Snow,
        95 | 96 | 99 => ConditionCategory::Storm,
        _ => ConditionCategory::Unknown,
    }
}

pub fn label_for_code(code: i64) -> &'static str {
    match code {
        0 => "Clear",
        1 => "Mostly Clear",
        2 => "Partly Cloudy",
        3 => "Cloudy",
        45 => "Fog",
        48 => "Rime Fog",
        51 => "Light Drizzle",
        53 => "Drizzle",
        55 => "Dense Drizzle",
        56 | 57 => "Freezing Drizzle",
        61 => "Light Rain",
        63 => "Rain",
        65 => "Heavy Rain",
        66 | 67 => "Freezing Rain",
        71 => "Light Snow",
        73 => "Snow",
        75 => "Heavy Snow",
        77 => "Snow Grains",
        80 | 81 => "Rain Showers",
        82 => "Heavy Showers",
        85 => "Snow Showers",
        86 => "Heavy Snow Showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunder + Hail",
        _ => "Weather",
    }
}

/// Codes arrive as JSON numbers; only finite integral samples are codes
pub fn code_from_sample(sample: Option<f64>) -> Option<i64> {
    sample
        .filter(|v| v.is_finite() && v.fract() == 0.0)
        .map(|v| v as i64)
}

/// Display-ready condition for one weather code sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub category: ConditionCategory,
    pub icon: &'static str,
    pub label: &'static str,
}

impl Condition {
    pub fn from_sample(sample: Option<f64>) -> Self {
        let (category, label) = match code_from_sample(sample) {
            Some(code) => (category_for_code(code), label_for_code(code)),
            None => (ConditionCategory::Unknown, label_for_code(-1)),
        };
        Self {
            category,
            icon: category.icon(),
            label,
        }
    }
}
