use std::fmt;
use std::str::FromStr;

use log::debug;

use super::error::QueryError;
use super::model::{parse_number, Table};

/// The closed set of supported aggregations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateFn {
    Min,
    Max,
    Avg,
}

impl AggregateFn {
    pub fn name(self) -> &'static str {
        match self {
            AggregateFn::Min => "min",
            AggregateFn::Max => "max",
            AggregateFn::Avg => "avg",
        }
    }

    /// Reduce `values`; `None` when empty.
    pub fn apply(self, values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        let result = match self {
            AggregateFn::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
            AggregateFn::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            AggregateFn::Avg => values.iter().sum::<f64>() / values.len() as f64,
        };
        Some(result)
    }
}

impl FromStr for AggregateFn {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" => Ok(AggregateFn::Min),
            "max" => Ok(AggregateFn::Max),
            "avg" => Ok(AggregateFn::Avg),
            other => Err(QueryError::InvalidFunction(other.to_string())),
        }
    }
}

impl fmt::Display for AggregateFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Aggregate the numeric cells of `column`.
///
/// Non-numeric and missing cells are skipped. Returns `Ok(None)` when no
/// cell is numeric.
pub fn aggregate(table: &Table, column: &str, function: AggregateFn) -> Result<Option<f64>, QueryError> {
    if !table.has_column(column) {
        return Err(QueryError::ColumnNotFound(column.to_string()));
    }

    let values: Vec<f64> = table
        .rows
        .iter()
        .filter_map(|row| row.get(column).and_then(parse_number))
        .collect();

    debug!(
        "{function}({column}): {} numeric of {} rows",
        values.len(),
        table.len()
    );
    Ok(function.apply(&values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Row;

    fn prices(values: &[&str]) -> Table {
        let rows = values
            .iter()
            .map(|v| [("price", *v)].into_iter().collect::<Row>())
            .collect();
        Table::new(vec!["price".into()], rows)
    }

    #[test]
    fn min_max_avg() {
        let t = prices(&["999", "899", "149", "299"]);
        assert_eq!(aggregate(&t, "price", AggregateFn::Min).unwrap(), Some(149.0));
        assert_eq!(aggregate(&t, "price", AggregateFn::Max).unwrap(), Some(999.0));
        assert_eq!(aggregate(&t, "price", AggregateFn::Avg).unwrap(), Some(586.5));
    }

    #[test]
    fn skips_non_numeric_and_missing_cells() {
        let mut t = prices(&["10", "n/a", "", "20"]);
        t.rows.push(Row::default());
        assert_eq!(aggregate(&t, "price", AggregateFn::Avg).unwrap(), Some(15.0));
    }

    #[test]
    fn all_text_column_is_none() {
        let t = prices(&["apple", "samsung"]);
        assert_eq!(aggregate(&t, "price", AggregateFn::Max).unwrap(), None);
        assert_eq!(aggregate(&prices(&[]), "price", AggregateFn::Avg).unwrap(), None);
    }

    #[test]
    fn parses_function_names() {
        assert_eq!("avg".parse::<AggregateFn>().unwrap(), AggregateFn::Avg);
        assert_eq!(
            "mediana".parse::<AggregateFn>().unwrap_err(),
            QueryError::InvalidFunction("mediana".into())
        );
        assert!("MIN".parse::<AggregateFn>().is_err());
    }

    #[test]
    fn unknown_column() {
        assert_eq!(
            aggregate(&prices(&["1"]), "cost", AggregateFn::Min).unwrap_err(),
            QueryError::ColumnNotFound("cost".into())
        );
    }
}
