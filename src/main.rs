mod app;
mod data;
mod state;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use app::Request;

/// Filter, sort and aggregate a CSV file.
#[derive(Parser)]
#[command(name = "csv-query", version, about, long_about = None)]
struct Cli {
    /// CSV file with a header row
    #[arg(long)]
    file: PathBuf,

    /// Filter condition, e.g. `price>100` or `brand=apple`
    #[arg(long = "where", value_name = "CONDITION")]
    where_clause: Option<String>,

    /// Sort order, e.g. `price=asc` or `brand=desc`
    #[arg(long, value_name = "COLUMN=DIRECTION")]
    order_by: Option<String>,

    /// Aggregation, e.g. `price=min` (min, max or avg)
    #[arg(long, value_name = "COLUMN=FUNCTION")]
    aggregate: Option<String>,
}

impl From<Cli> for Request {
    fn from(cli: Cli) -> Self {
        Request {
            file: cli.file,
            where_clause: cli.where_clause,
            order_by: cli.order_by,
            aggregate: cli.aggregate,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let request = Request::from(Cli::parse());
    let stdout = io::stdout();
    app::run(&request, &mut stdout.lock())
}
