// GViz query response wire format
use crate::application::sheet_source::FetchError;
use crate::domain::sheet::{CellValue, RawRow};
use serde::Deserialize;

/// Length of `/*O_o*/\ngoogle.visualization.Query.setResponse(`.
pub const ENVELOPE_PREFIX_LEN: usize = 47;
/// Length of the closing `);`.
pub const ENVELOPE_SUFFIX_LEN: usize = 2;

#[derive(Debug, Deserialize)]
struct GvizResponse {
    table: GvizTable,
}

// Rows stay untyped so one malformed row degrades to absent cells
// instead of failing the whole payload.
#[derive(Debug, Deserialize)]
struct GvizTable {
    #[serde(default)]
    rows: Vec<serde_json::Value>,
}

/// Strip the fixed-length callback envelope around the JSON payload.
pub fn unwrap_envelope(body: &str) -> Result<&str, FetchError> {
    let invalid = || FetchError::Envelope { len: body.len() };

    if body.len() < ENVELOPE_PREFIX_LEN + ENVELOPE_SUFFIX_LEN {
        return Err(invalid());
    }
    body.get(ENVELOPE_PREFIX_LEN..body.len() - ENVELOPE_SUFFIX_LEN)
        .ok_or_else(invalid)
}

/// Parse a full response body and keep the trailing `window` rows.
pub fn parse_rows(body: &str, window: usize) -> Result<Vec<RawRow>, FetchError> {
    let payload = unwrap_envelope(body)?;
    let response: GvizResponse = serde_json::from_str(payload)?;

    let rows = response.table.rows;
    let skip = rows.len().saturating_sub(window);
    tracing::debug!(total = rows.len(), kept = rows.len() - skip, "parsed sheet rows");

    Ok(rows.into_iter().skip(skip).map(to_raw_row).collect())
}

fn to_raw_row(mut row: serde_json::Value) -> RawRow {
    let cells = match row.get_mut("c").map(serde_json::Value::take) {
        Some(serde_json::Value::Array(cells)) => cells,
        _ => Vec::new(),
    };

    RawRow::new(
        cells
            .into_iter()
            .map(|mut cell| {
                cell.get_mut("v")
                    .map(serde_json::Value::take)
                    .and_then(to_cell_value)
            })
            .collect(),
    )
}

fn to_cell_value(value: serde_json::Value) -> Option<CellValue> {
    match value {
        serde_json::Value::String(s) => Some(CellValue::Text(s)),
        serde_json::Value::Number(n) => n.as_f64().map(CellValue::Number),
        serde_json::Value::Bool(b) => Some(CellValue::Bool(b)),
        // Nulls and nested values carry nothing we can use
        _ => None,
    }
}
