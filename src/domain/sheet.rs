// Raw spreadsheet rows as delivered by the tabular feed

/// Fixed column positions agreed with the sheet writer.
pub mod column {
    pub const TIME: usize = 0;
    pub const TEMPERATURE: usize = 1;
    pub const HUMIDITY: usize = 2;
    pub const LIGHT: usize = 3;
    pub const SOIL: usize = 4;
    pub const IMAGE_URL: usize = 5;
    pub const DISEASE: usize = 6;
    // 7 is reserved
    pub const ACTION: usize = 8;
    pub const PLANT: usize = 9;
    pub const PROMPT: usize = 10;
    pub const RESPONSE: usize = 11;
}

/// A single scalar cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

/// One positional row. Missing trailing cells are simply absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: Vec<Option<CellValue>>,
}

impl RawRow {
    pub fn new(cells: Vec<Option<CellValue>>) -> Self {
        Self { cells }
    }

    pub fn cell(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index).and_then(Option::as_ref)
    }

    /// Non-empty string at `index`. Other cell types count as no value.
    pub fn text(&self, index: usize) -> Option<&str> {
        match self.cell(index) {
            Some(CellValue::Text(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Numeric cell at `index`, passed through unmodified.
    pub fn number(&self, index: usize) -> Option<f64> {
        match self.cell(index) {
            Some(CellValue::Number(n)) => Some(*n),
            _ => None,
        }
    }
}
