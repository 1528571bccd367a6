// Sorting and filtering for the readings table
use super::snapshot::Reading;
use serde::Deserialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[serde(alias = "temperature")]
    Temp,
    #[serde(alias = "humidity")]
    Hum,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableQuery {
    pub sort: Option<SortField>,
    #[serde(default)]
    pub order: SortOrder,
    pub light: Option<String>,
    pub soil: Option<String>,
}

impl TableQuery {
    fn matches(&self, reading: &Reading) -> bool {
        let light_ok = self
            .light
            .as_deref()
            .is_none_or(|l| reading.light.as_deref() == Some(l));
        let soil_ok = self
            .soil
            .as_deref()
            .is_none_or(|s| reading.soil.as_deref() == Some(s));
        light_ok && soil_ok
    }

    /// Filters then sorts. Absent numbers sort as 0; ties keep arrival order.
    pub fn apply<'a>(&self, readings: &'a [Reading]) -> Vec<&'a Reading> {
        let mut rows: Vec<&Reading> = readings.iter().filter(|r| self.matches(r)).collect();

        if let Some(field) = self.sort {
            let key = |r: &Reading| match field {
                SortField::Temp => r.temperature.unwrap_or(0.0),
                SortField::Hum => r.humidity.unwrap_or(0.0),
            };
            rows.sort_by(|a, b| {
                let ord = key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal);
                match self.order {
                    SortOrder::Asc => ord,
                    SortOrder::Desc => ord.reverse(),
                }
            });
        }

        rows
    }
}
