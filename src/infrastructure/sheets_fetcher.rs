// Google Sheets GViz fetcher
use crate::application::sheet_source::{FetchError, SheetSource};
use crate::domain::sheet::RawRow;
use crate::infrastructure::gviz::parse_rows;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GoogleSheetsSource {
    client: reqwest::Client,
    base_url: String,
    sheet_id: String,
    sheet_name: String,
    window: usize,
}

impl GoogleSheetsSource {
    pub fn new(
        base_url: String,
        sheet_id: String,
        sheet_name: String,
        window: usize,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            sheet_id,
            sheet_name,
            window,
        })
    }

    fn build_query_url(&self, cache_buster: i64) -> String {
        format!(
            "{}/{}/gviz/tq?sheet={}&t={}",
            self.base_url,
            self.sheet_id,
            urlencoding::encode(&self.sheet_name),
            cache_buster
        )
    }
}

#[async_trait]
impl SheetSource for GoogleSheetsSource {
    async fn fetch_rows(&self) -> Result<Vec<RawRow>, FetchError> {
        let url = self.build_query_url(chrono::Utc::now().timestamp_millis());
        tracing::debug!("Fetching sheet rows from {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.text().await?;
        parse_rows(&body, self.window)
    }
}
