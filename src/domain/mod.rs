// Domain layer - Plain data and pure transformations
pub mod analysis;
pub mod chart;
pub mod dashboard;
pub mod sheet;
pub mod sheet_date;
pub mod snapshot;
pub mod table;
