use log::{debug, warn};

use super::compare::{evaluate, Comparison, TEXT_ORDERING_WARNING};
use super::condition::Condition;
use super::error::QueryError;
use super::model::Table;

/// Rows kept by a filter, plus how many evaluations were rejected
/// (ordering operators on text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filtered {
    pub table: Table,
    pub rejected: usize,
}

/// Keep the rows of `table` for which `condition` holds, in input order.
///
/// The column is checked once, up front. A row that lacks the cell is
/// compared as an empty string.
pub fn filter_rows(table: Table, condition: &Condition) -> Result<Filtered, QueryError> {
    if !table.has_column(&condition.column) {
        return Err(QueryError::ColumnNotFound(condition.column.clone()));
    }

    let Table { columns, rows } = table;
    let total = rows.len();
    let mut rejected = 0;

    let kept: Vec<_> = rows
        .into_iter()
        .filter(|row| {
            let cell = row.get(&condition.column).unwrap_or("");
            let outcome = evaluate(cell, condition.op, &condition.operand);
            if outcome == Comparison::Rejected {
                warn!(
                    "{TEXT_ORDERING_WARNING} ({cell:?} {} {:?})",
                    condition.op, condition.operand
                );
                rejected += 1;
            }
            outcome.is_match()
        })
        .collect();

    debug!(
        "filter {}{}{}: kept {}/{} rows ({} rejected)",
        condition.column,
        condition.op,
        condition.operand,
        kept.len(),
        total,
        rejected
    );

    Ok(Filtered {
        table: Table::new(columns, kept),
        rejected,
    })
}
