// Location domain model
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub short_name: String,
    #[serde(default)]
    pub label: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Label shown in the location picker, falling back to the short name
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.short_name
        } else {
            &self.label
        }
    }

    pub fn find<'a>(locations: &'a [Location], id: &str) -> Option<&'a Location> {
        locations.iter().find(|location| location.id == id)
    }
}
