// Chart-ready projections of a snapshot
use super::sheet_date::format_short;
use super::snapshot::FrequencyTable;
use serde::Serialize;

pub mod palette {
    pub const GREEN: &str = "#22c55e";
    pub const BLUE: &str = "#38bdf8";
    pub const RED: &str = "#f87171";
    pub const ORANGE: &str = "#fb923c";
    pub const PURPLE: &str = "#a78bfa";
    pub const YELLOW: &str = "#fbbf24";
    pub const SLATE: &str = "#475569";
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaPoint {
    pub time: String,
    pub label: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DualPoint {
    pub time: String,
    pub label: String,
    pub temp: Option<f64>,
    pub hum: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPoint {
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Area,
    DualLine,
    Pie,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartPoints {
    Area(Vec<AreaPoint>),
    DualLine(Vec<DualPoint>),
    Category(Vec<CategoryPoint>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub unit: Option<String>,
    pub kind: ChartKind,
    pub colors: Vec<String>,
    pub points: ChartPoints,
}

impl ChartData {
    pub fn new(
        id: &str,
        title: &str,
        unit: Option<&str>,
        kind: ChartKind,
        colors: &[&str],
        points: ChartPoints,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            unit: unit.map(str::to_string),
            kind,
            colors: colors.iter().map(|c| c.to_string()).collect(),
            points,
        }
    }
}

/// Single-series area/line chart. Missing values stay as gaps.
pub fn area_points(labels: &[String], values: &[Option<f64>]) -> Vec<AreaPoint> {
    labels
        .iter()
        .enumerate()
        .map(|(i, time)| AreaPoint {
            time: time.clone(),
            label: format_short(time),
            value: values.get(i).copied().flatten(),
        })
        .collect()
}

/// Temperature against humidity on a shared time axis.
pub fn dual_line_points(
    labels: &[String],
    temps: &[Option<f64>],
    hums: &[Option<f64>],
) -> Vec<DualPoint> {
    labels
        .iter()
        .enumerate()
        .map(|(i, time)| DualPoint {
            time: time.clone(),
            label: format_short(time),
            temp: temps.get(i).copied().flatten(),
            hum: hums.get(i).copied().flatten(),
        })
        .collect()
}

/// Pie and bar charts share the same shape.
pub fn category_points(table: &FrequencyTable) -> Vec<CategoryPoint> {
    table
        .iter()
        .map(|(name, value)| CategoryPoint {
            name: name.to_string(),
            value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_points_fill_gaps_with_none() {
        let labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let points = area_points(&labels, &[Some(1.0), None]);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].value, Some(1.0));
        assert_eq!(points[1].value, None);
        assert_eq!(points[2].value, None);
    }

    #[test]
    fn test_dual_line_points_align_by_index() {
        let labels = vec!["Date(2024,0,15,10,30,0)".to_string()];
        let points = dual_line_points(&labels, &[Some(21.5)], &[Some(55.0)]);
        assert_eq!(points[0].label, "10:30");
        assert_eq!(points[0].temp, Some(21.5));
        assert_eq!(points[0].hum, Some(55.0));
    }

    #[test]
    fn test_category_points_follow_table_order() {
        let mut table = FrequencyTable::seeded(&["DRY", "WET"]);
        table.increment("WET");
        let points = category_points(&table);
        let names: Vec<_> = points.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["DRY", "WET"]);
        assert_eq!(points[1].value, 1);
    }
}
