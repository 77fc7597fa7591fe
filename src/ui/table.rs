use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Grid rendering
// ---------------------------------------------------------------------------

/// Render `table` as a grid: header row, separator, one line per row.
///
/// Every column is rendered as text exactly as it appeared in the file.
pub fn render_table(table: &Table) -> Result<String> {
    let fields: Vec<Field> = table
        .columns
        .iter()
        .map(|name| Field::new(name, DataType::Utf8, true))
        .collect();

    let arrays: Vec<ArrayRef> = table
        .columns
        .iter()
        .map(|name| {
            let values: StringArray = table.rows.iter().map(|row| row.get(name)).collect();
            Arc::new(values) as ArrayRef
        })
        .collect();

    let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)
        .context("building record batch for output")?;
    let grid = pretty_format_batches(&[batch]).context("formatting table")?;
    Ok(grid.to_string())
}

/// One-row grid for an aggregation, e.g. `| min |` over `| 149.00 |`.
pub fn render_aggregate(name: &str, value: f64) -> Result<String> {
    let schema = Schema::new(vec![Field::new(name, DataType::Utf8, false)]);
    let column: ArrayRef = Arc::new(StringArray::from(vec![format!("{value:.2}")]));
    let batch = RecordBatch::try_new(Arc::new(schema), vec![column])
        .context("building aggregate batch")?;
    let grid = pretty_format_batches(&[batch]).context("formatting aggregate")?;
    Ok(grid.to_string())
}
