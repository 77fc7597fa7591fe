use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use super::model::{Row, Table};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a comma-delimited, UTF-8 CSV file with a header row.
///
/// The whole file is read into memory and the handle released before
/// returning. Rows whose field count differs from the header are an error.
pub fn read_table(path: &Path) -> Result<Table> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    let table = read_records(reader)?;
    debug!(
        "loaded {} rows x {} columns from {}",
        table.len(),
        table.columns.len(),
        path.display()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Header names become row keys. When a name repeats, the later field's
/// value wins and the column keeps its first position.
fn read_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Table> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut columns: Vec<String> = Vec::with_capacity(headers.len());
    for h in &headers {
        if !columns.contains(h) {
            columns.push(h.clone());
        }
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {}", row_no + 1))?;
        let cells: BTreeMap<String, String> = headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(Row::new(cells));
    }

    Ok(Table::new(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> Result<NamedTempFile> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(content.as_bytes())?;
        Ok(tmp)
    }

    #[test]
    fn reads_header_and_rows() -> Result<()> {
        let tmp = write_csv("brand,name,price\napple,iphone 15 pro,999\nxiaomi,\"redmi, 10c\",149\n")?;
        let table = read_table(tmp.path())?;

        assert_eq!(table.columns, vec!["brand", "name", "price"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1].get("name"), Some("redmi, 10c"));
        assert_eq!(table.rows[0].get("price"), Some("999"));
        Ok(())
    }

    #[test]
    fn header_only_file_has_no_rows() -> Result<()> {
        let tmp = write_csv("brand,price\n")?;
        let table = read_table(tmp.path())?;
        assert_eq!(table.columns, vec!["brand", "price"]);
        assert!(table.is_empty());
        Ok(())
    }

    #[test]
    fn empty_file_has_no_columns() -> Result<()> {
        let tmp = write_csv("")?;
        let table = read_table(tmp.path())?;
        assert!(table.columns.is_empty());
        assert!(table.is_empty());
        Ok(())
    }

    #[test]
    fn duplicate_header_keeps_last_value() -> Result<()> {
        let tmp = write_csv("a,b,a\n1,2,3\n")?;
        let table = read_table(tmp.path())?;
        assert_eq!(table.columns, vec!["a", "b"]);
        assert_eq!(table.rows[0].get("a"), Some("3"));
        Ok(())
    }

    #[test]
    fn ragged_row_is_an_error() -> Result<()> {
        let tmp = write_csv("a,b\n1,2\n3\n")?;
        let err = read_table(tmp.path()).unwrap_err();
        assert!(format!("{err:#}").contains("CSV row 2"), "{err:#}");
        Ok(())
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_table(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(err.to_string().contains("opening CSV"));
    }
}
