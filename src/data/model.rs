use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell, interpreted
// ---------------------------------------------------------------------------

/// A raw CSV cell interpreted as either a number or text.
///
/// Cells are stored as strings; the interpretation is recomputed wherever a
/// comparison or sort key is needed.
#[derive(Debug, Clone, Copy)]
pub enum CellValue<'a> {
    Number(f64),
    Text(&'a str),
}

impl<'a> CellValue<'a> {
    /// Interpret `raw`: a number if its trimmed text parses as `f64`.
    pub fn parse(raw: &'a str) -> Self {
        match parse_number(raw) {
            Some(v) => CellValue::Number(v),
            None => CellValue::Text(raw),
        }
    }
}

/// Parse a cell as a float, ignoring surrounding whitespace.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

// -- Total order used for sort keys: every number before every text --

impl PartialEq for CellValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CellValue<'_> {}

impl PartialOrd for CellValue<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        use CellValue::*;
        match (self, other) {
            // partial_cmp keeps -0.0 == 0.0; only NaN falls through to total_cmp.
            (Number(a), Number(b)) => a.partial_cmp(b).unwrap_or_else(|| {
                match (a.is_nan(), b.is_nan()) {
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    _ => a.total_cmp(b),
                }
            }),
            (Number(_), Text(_)) => Ordering::Less,
            (Text(_), Number(_)) => Ordering::Greater,
            (Text(a), Text(b)) => a.cmp(b),
        }
    }
}

impl fmt::Display for CellValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Row – one record of the CSV file
// ---------------------------------------------------------------------------

/// A single CSV record: column name → raw cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: BTreeMap<String, String>,
}

impl Row {
    pub fn new(cells: BTreeMap<String, String>) -> Self {
        Row { cells }
    }

    /// Raw text of `column`, if the row has it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the loaded file
// ---------------------------------------------------------------------------

/// Rows sharing one column set, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Column names in header order (used for rendering).
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Table { columns, rows }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
