// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod gviz;
pub mod sheets_fetcher;
