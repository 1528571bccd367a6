// Dashboard service - Projects the current snapshot into cards, charts and table rows
use crate::application::refresh_service::RefreshService;
use crate::domain::analysis::AiAnalysis;
use crate::domain::chart::{
    ChartData, ChartKind, ChartPoints, area_points, category_points, dual_line_points, palette,
};
use crate::domain::dashboard::{Dashboard, StatCard, TableRow};
use crate::domain::snapshot::Snapshot;
use crate::domain::table::TableQuery;

const DASHBOARD_TITLE: &str = "AI + IoT Smart Agriculture System";

#[derive(Clone)]
pub struct DashboardService {
    refresh_service: RefreshService,
}

impl DashboardService {
    pub fn new(refresh_service: RefreshService) -> Self {
        Self { refresh_service }
    }

    /// `None` until the first snapshot lands.
    pub fn get_dashboard(&self) -> Option<Dashboard> {
        let snapshot = self.refresh_service.current().snapshot?;
        Some(build_dashboard(&snapshot))
    }

    pub fn get_readings(&self, query: &TableQuery) -> Option<Vec<TableRow>> {
        let snapshot = self.refresh_service.current().snapshot?;
        Some(
            query
                .apply(&snapshot.readings)
                .into_iter()
                .map(TableRow::from)
                .collect(),
        )
    }
}

pub fn build_dashboard(snapshot: &Snapshot) -> Dashboard {
    Dashboard::new(
        DASHBOARD_TITLE.to_string(),
        build_stats(snapshot),
        build_charts(snapshot),
        snapshot.readings.iter().map(TableRow::from).collect(),
        AiAnalysis::new(snapshot.latest_prompt.clone(), snapshot.latest_response.clone()),
    )
}

fn build_stats(snapshot: &Snapshot) -> Vec<StatCard> {
    let latest = snapshot.latest();
    let number = |v: Option<f64>| v.map(|n| n.to_string());

    vec![
        StatCard::new(
            "temperature",
            "Temperature",
            number(latest.and_then(|r| r.temperature)),
            Some("°C"),
            palette::ORANGE,
        ),
        StatCard::new(
            "humidity",
            "Humidity",
            number(latest.and_then(|r| r.humidity)),
            Some("%"),
            palette::BLUE,
        ),
        StatCard::new(
            "light",
            "Light",
            latest.and_then(|r| r.light.clone()),
            None,
            palette::YELLOW,
        ),
        StatCard::new(
            "soil",
            "Soil",
            latest.and_then(|r| r.soil.clone()),
            None,
            palette::GREEN,
        ),
    ]
}

fn build_charts(snapshot: &Snapshot) -> Vec<ChartData> {
    let soil_values: Vec<Option<f64>> = snapshot
        .soil_series
        .iter()
        .map(|v| Some(f64::from(*v)))
        .collect();

    vec![
        ChartData::new(
            "temperature",
            "Temperature (°C)",
            Some("°C"),
            ChartKind::Area,
            &[palette::ORANGE],
            ChartPoints::Area(area_points(&snapshot.labels, &snapshot.temperatures)),
        ),
        ChartData::new(
            "humidity",
            "Humidity (%)",
            Some("%"),
            ChartKind::Area,
            &[palette::BLUE],
            ChartPoints::Area(area_points(&snapshot.labels, &snapshot.humidities)),
        ),
        ChartData::new(
            "temp_vs_humidity",
            "Temp vs Humidity",
            None,
            ChartKind::DualLine,
            &[palette::ORANGE, palette::BLUE],
            ChartPoints::DualLine(dual_line_points(
                &snapshot.labels,
                &snapshot.temperatures,
                &snapshot.humidities,
            )),
        ),
        ChartData::new(
            "soil_condition",
            "Soil Condition Over Time",
            None,
            ChartKind::Area,
            &[palette::GREEN],
            ChartPoints::Area(area_points(&snapshot.labels, &soil_values)),
        ),
        ChartData::new(
            "light_distribution",
            "Light Distribution",
            None,
            ChartKind::Pie,
            &[palette::SLATE, palette::YELLOW],
            ChartPoints::Category(category_points(&snapshot.light)),
        ),
        ChartData::new(
            "soil_distribution",
            "Soil Distribution",
            None,
            ChartKind::Pie,
            &[palette::ORANGE, palette::BLUE],
            ChartPoints::Category(category_points(&snapshot.soil)),
        ),
        ChartData::new(
            "actions",
            "Actions Count",
            None,
            ChartKind::Bar,
            &[palette::PURPLE],
            ChartPoints::Category(category_points(&snapshot.actions)),
        ),
        ChartData::new(
            "diseases",
            "Disease Count",
            None,
            ChartKind::Bar,
            &[palette::RED],
            ChartPoints::Category(category_points(&snapshot.diseases)),
        ),
    ]
}
