/// Data layer: table model, loading, and the query stages.
///
/// Pipeline:
/// ```text
///        .csv
///          │
///          ▼
///     ┌──────────┐
///     │  loader   │  parse file → Table
///     └──────────┘
///          │
///          ▼
///     ┌──────────┐   condition: column op value
///     │  filter   │  compare each row (numeric or text)
///     └──────────┘
///          │
///          ▼
///     ┌──────────┐
///     │   sort    │  stable, numbers before text, desc = reversed
///     └──────────┘
///          │
///          ▼
///     ┌───────────┐
///     │ aggregate  │  min / max / avg over numeric cells
///     └───────────┘
/// ```

pub mod aggregate;
pub mod compare;
pub mod condition;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod sort;
