// Normalized snapshot domain models
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub const LIGHT_CATEGORIES: [&str; 2] = ["DARK", "BRIGHT"];
pub const SOIL_CATEGORIES: [&str; 2] = ["DRY", "WET"];
pub const ACTION_CATEGORIES: [&str; 3] = ["None", "Fan ON", "Watered"];

/// Placeholder used for a missing action or plant.
pub const NONE_LABEL: &str = "None";

pub const SOIL_WET: &str = "WET";

/// One sanitized observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub time: String,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub light: Option<String>,
    pub soil: Option<String>,
    pub image_url: Option<String>,
    pub disease: Option<String>,
    pub action: String,
    pub plant: String,
    pub prompt: Option<String>,
    pub response: Option<String>,
}

impl Reading {
    pub fn is_soil_wet(&self) -> bool {
        self.soil.as_deref() == Some(SOIL_WET)
    }
}

/// Category label -> occurrence count, kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<(String, u32)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table pre-populated with zero counts so these keys always render.
    pub fn seeded(categories: &[&str]) -> Self {
        Self {
            entries: categories.iter().map(|c| (c.to_string(), 0)).collect(),
        }
    }

    pub fn increment(&mut self, category: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == category) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((category.to_string(), 1)),
        }
    }

    #[cfg(test)]
    pub fn get(&self, category: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, count) in &self.entries {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

/// Complete result of one ingestion cycle.
///
/// `labels`, `temperatures`, `humidities` and `soil_series` are aligned by
/// index with `readings`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub readings: Vec<Reading>,
    pub labels: Vec<String>,
    pub temperatures: Vec<Option<f64>>,
    pub humidities: Vec<Option<f64>>,
    pub soil_series: Vec<u8>,
    pub light: FrequencyTable,
    pub soil: FrequencyTable,
    pub actions: FrequencyTable,
    pub diseases: FrequencyTable,
    pub latest_prompt: Option<String>,
    pub latest_response: Option<String>,
}

impl Snapshot {
    pub fn reading_count(&self) -> usize {
        self.readings.len()
    }

    pub fn latest(&self) -> Option<&Reading> {
        self.readings.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_table_keeps_order_and_grows() {
        let mut table = FrequencyTable::seeded(&LIGHT_CATEGORIES);
        table.increment("BRIGHT");
        table.increment("DIM");
        table.increment("BRIGHT");

        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![("DARK", 0), ("BRIGHT", 2), ("DIM", 1)]);
    }

    #[test]
    fn test_table_serializes_as_ordered_map() {
        let mut table = FrequencyTable::seeded(&ACTION_CATEGORIES);
        table.increment("Watered");
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"None":0,"Fan ON":0,"Watered":1}"#);
    }
}
