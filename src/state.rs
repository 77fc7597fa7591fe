use anyhow::Result;
use log::debug;

use crate::data::aggregate::{aggregate, AggregateFn};
use crate::data::condition::{parse_assignment, parse_condition};
use crate::data::error::QueryError;
use crate::data::filter::filter_rows;
use crate::data::model::Table;
use crate::data::sort::{sort_rows, split_sort_spec, SortDirection};

// ---------------------------------------------------------------------------
// Pipeline state
// ---------------------------------------------------------------------------

/// The table as it moves through the stages of one run.
#[derive(Debug, Default)]
pub struct Pipeline {
    /// Current rows (filtered and/or sorted so far).
    pub table: Table,

    /// Comparisons rejected by the filter (ordering operator on text).
    pub rejected_comparisons: usize,
}

/// A computed aggregation, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub column: String,
    pub function: AggregateFn,
    /// `None` when the column had no numeric cells.
    pub value: Option<f64>,
}

impl Pipeline {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            rejected_comparisons: 0,
        }
    }

    /// Apply a `--where` condition.
    ///
    /// A malformed condition surfaces as [`ConditionParseError`]; an unknown
    /// column as [`QueryError`].
    ///
    /// [`ConditionParseError`]: crate::data::error::ConditionParseError
    pub fn apply_where(&mut self, text: &str) -> Result<()> {
        let condition = parse_condition(text)?;
        let filtered = filter_rows(std::mem::take(&mut self.table), &condition)?;
        self.table = filtered.table;
        self.rejected_comparisons += filtered.rejected;
        Ok(())
    }

    /// Apply an `--order-by` spec.
    pub fn apply_order(&mut self, text: &str) -> Result<(), QueryError> {
        let (column, direction) = split_sort_spec(text)?;
        if !self.table.has_column(column) {
            return Err(QueryError::ColumnNotFound(column.to_string()));
        }
        let direction: SortDirection = direction.parse()?;
        self.table = sort_rows(std::mem::take(&mut self.table), column, direction)?;
        Ok(())
    }

    /// Evaluate an `--aggregate` spec over the current rows.
    pub fn aggregate(&self, text: &str) -> Result<Aggregation> {
        let (column, name) = parse_assignment(text)?;
        if !self.table.has_column(&column) {
            return Err(QueryError::ColumnNotFound(column).into());
        }
        let function: AggregateFn = name.parse()?;
        let value = aggregate(&self.table, &column, function)?;
        debug!("{function}({column}) = {value:?}");
        Ok(Aggregation {
            column,
            function,
            value,
        })
    }
}
