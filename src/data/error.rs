use thiserror::Error;

/// User errors that end a run early with a message but are not fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Column \"{0}\" not found")]
    ColumnNotFound(String),

    #[error("--order-by must look like \"column=asc\" or \"column=desc\", got \"{0}\"")]
    InvalidOrderFormat(String),

    #[error("Sort direction must be \"asc\" or \"desc\", got \"{0}\"")]
    InvalidDirection(String),

    #[error("Aggregation must be one of: min, max, avg (got \"{0}\")")]
    InvalidFunction(String),
}

/// A `--where` or `--aggregate` argument with no recognised operator.
///
/// Unlike [`QueryError`] this aborts the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionParseError {
    #[error("Cannot parse condition: {0}")]
    NoOperator(String),
}
