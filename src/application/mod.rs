// Application layer - Use cases over the sheet source
pub mod dashboard_service;
pub mod normalizer;
pub mod refresh_service;
pub mod scheduler;
pub mod sheet_source;
