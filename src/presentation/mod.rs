// Presentation layer - HTTP surface for dashboard consumers
pub mod app_state;
pub mod handlers;
pub mod sse;
