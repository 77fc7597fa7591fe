use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use log::info;

use crate::data::compare::TEXT_ORDERING_WARNING;
use crate::data::error::QueryError;
use crate::data::loader::read_table;
use crate::state::{Aggregation, Pipeline};
use crate::ui::table::{render_aggregate, render_table};

pub const EMPTY_FILE_MESSAGE: &str = "File is empty or has no data rows";
pub const NO_MATCHES_MESSAGE: &str = "No rows match the given conditions";

// ---------------------------------------------------------------------------
// Run request
// ---------------------------------------------------------------------------

/// Everything one run needs, independent of how it was parsed.
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub file: PathBuf,
    pub where_clause: Option<String>,
    pub order_by: Option<String>,
    pub aggregate: Option<String>,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Load the file, run filter → sort → aggregate, and write the result.
///
/// User mistakes (unknown column, bad direction, ...) are written to `out`
/// and return `Ok`. Unreadable files and unparseable conditions are `Err`.
/// Warnings for rejected comparisons are written before either.
pub fn run(request: &Request, out: &mut impl Write) -> Result<()> {
    let table = read_table(&request.file)?;
    info!("{} rows from {}", table.len(), request.file.display());

    let mut pipeline = Pipeline::new(table);
    let result = execute(request, &mut pipeline);

    for _ in 0..pipeline.rejected_comparisons {
        writeln!(out, "{TEXT_ORDERING_WARNING}")?;
    }

    let text = match result {
        Ok(text) => text,
        Err(err) => match err.downcast::<QueryError>() {
            Ok(user_error) => user_error.to_string(),
            Err(fatal) => return Err(fatal),
        },
    };
    writeln!(out, "{}", text.trim_end())?;
    Ok(())
}

/// Run the stages and return the text to print: a grid or a notice.
fn execute(request: &Request, pipeline: &mut Pipeline) -> Result<String> {
    if pipeline.table.is_empty() {
        return Ok(EMPTY_FILE_MESSAGE.to_string());
    }

    if let Some(text) = &request.where_clause {
        pipeline.apply_where(text)?;
    }
    if let Some(text) = &request.order_by {
        pipeline.apply_order(text)?;
    }

    if let Some(text) = &request.aggregate {
        return match pipeline.aggregate(text)? {
            Aggregation {
                function,
                value: Some(value),
                ..
            } => render_aggregate(function.name(), value),
            Aggregation {
                column,
                function,
                value: None,
            } => Ok(format!(
                "No data for aggregation \"{function}\" on column \"{column}\""
            )),
        };
    }

    if pipeline.table.is_empty() {
        return Ok(NO_MATCHES_MESSAGE.to_string());
    }
    render_table(&pipeline.table)
}
