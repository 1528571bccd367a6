// Dashboard domain model
use super::analysis::AiAnalysis;
use super::chart::ChartData;
use super::sheet_date::format_full;
use super::snapshot::Reading;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub id: String,
    pub title: String,
    pub value: Option<String>,
    pub unit: Option<String>,
    pub color: String,
}

impl StatCard {
    pub fn new(id: &str, title: &str, value: Option<String>, unit: Option<&str>, color: &str) -> Self {
        // No unit next to an empty value
        let unit = value.as_ref().and(unit).map(str::to_string);
        Self {
            id: id.to_string(),
            title: title.to_string(),
            value,
            unit,
            color: color.to_string(),
        }
    }
}

/// A reading plus its human-readable time label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    #[serde(flatten)]
    pub reading: Reading,
    pub time_label: String,
}

impl From<&Reading> for TableRow {
    fn from(reading: &Reading) -> Self {
        Self {
            time_label: format_full(&reading.time),
            reading: reading.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub stats: Vec<StatCard>,
    pub charts: Vec<ChartData>,
    pub rows: Vec<TableRow>,
    pub analysis: Option<AiAnalysis>,
}

impl Dashboard {
    pub fn new(
        title: String,
        stats: Vec<StatCard>,
        charts: Vec<ChartData>,
        rows: Vec<TableRow>,
        analysis: Option<AiAnalysis>,
    ) -> Self {
        Self {
            title,
            stats,
            charts,
            rows,
            analysis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_card_drops_unit_without_value() {
        let card = StatCard::new("temperature", "Temperature", None, Some("°C"), "#fff");
        assert!(card.unit.is_none());

        let card = StatCard::new("temperature", "Temperature", Some("21.5".into()), Some("°C"), "#fff");
        assert_eq!(card.unit.as_deref(), Some("°C"));
    }

    #[test]
    fn test_table_row_keys_are_camel_case() {
        let reading = Reading {
            time: "Date(2024,0,15,10,30,0)".to_string(),
            temperature: Some(21.5),
            humidity: None,
            light: None,
            soil: None,
            image_url: Some("https://img/1.png".to_string()),
            disease: None,
            action: "None".to_string(),
            plant: "None".to_string(),
            prompt: None,
            response: None,
        };
        let json = serde_json::to_value(TableRow::from(&reading)).unwrap();
        assert_eq!(json["timeLabel"], "15 Jan, 10:30");
        assert_eq!(json["imageUrl"], "https://img/1.png");
        assert!(json.get("time_label").is_none());
    }
}
