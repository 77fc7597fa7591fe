use std::str::FromStr;

use log::debug;

use super::error::QueryError;
use super::model::{CellValue, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = QueryError;

    /// Case-insensitive `asc` / `desc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(QueryError::InvalidDirection(s.to_string())),
        }
    }
}

/// Split `column=direction` at the first `=` and trim the column.
///
/// The direction is returned raw so the caller can validate the column
/// before it.
pub fn split_sort_spec(text: &str) -> Result<(&str, &str), QueryError> {
    text.split_once('=')
        .map(|(column, direction)| (column.trim(), direction))
        .ok_or_else(|| QueryError::InvalidOrderFormat(text.to_string()))
}

/// Stable sort of `table` by `column`.
///
/// Keys are [`CellValue`]s, so numbers sort numerically and ahead of text.
/// `Desc` reverses the ascending result, which also reverses the relative
/// order of rows with equal keys.
pub fn sort_rows(table: Table, column: &str, direction: SortDirection) -> Result<Table, QueryError> {
    if !table.has_column(column) {
        return Err(QueryError::ColumnNotFound(column.to_string()));
    }

    let Table { columns, mut rows } = table;
    rows.sort_by(|a, b| {
        let ka = CellValue::parse(a.get(column).unwrap_or(""));
        let kb = CellValue::parse(b.get(column).unwrap_or(""));
        ka.cmp(&kb)
    });
    if direction == SortDirection::Desc {
        rows.reverse();
    }

    debug!("sorted {} rows by {column} {direction:?}", rows.len());
    Ok(Table::new(columns, rows))
}
