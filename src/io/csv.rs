use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::table::{parse_finite, Cell, ColumnType, Table};

/// Read a CSV file into a [`Table`]
///
/// A column is numeric when every non-empty cell parses as a finite number,
/// text otherwise; a column holding `NaN` or `inf` is read as text. Without a header row, columns are named `column_0`,
/// `column_1`, and so on.
pub fn read_csv<P: AsRef<Path>>(path: P, has_header: bool) -> Result<Table> {
    let file = File::open(path.as_ref())?;
    log::debug!("reading CSV from {}", path.as_ref().display());
    read_csv_from_reader(file, has_header)
}

/// Read CSV data from any reader into a [`Table`]
pub fn read_csv_from_reader<R: Read>(reader: R, has_header: bool) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut headers: Vec<String> = if has_header {
        rdr.headers()?.iter().map(|h| h.to_string()).collect()
    } else {
        Vec::new()
    };

    let mut records: Vec<Vec<String>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        records.push(record.iter().map(|field| field.to_string()).collect());
    }

    if !has_header {
        let width = records.iter().map(Vec::len).max().unwrap_or(0);
        headers = (0..width).map(|i| format!("column_{}", i)).collect();
    }

    // short rows are padded with empty cells, long rows truncated
    let width = headers.len();
    for record in &mut records {
        record.resize(width, String::new());
    }

    let types: Vec<ColumnType> = (0..width)
        .map(|col| infer_type(records.iter().map(|r| r[col].as_str())))
        .collect();

    let rows = records
        .into_iter()
        .map(|record| record.into_iter().map(Cell::Text).collect())
        .collect();

    Table::from_rows(&headers, &types, rows)
}

fn infer_type<'a, I: Iterator<Item = &'a str>>(cells: I) -> ColumnType {
    let mut seen_value = false;
    for cell in cells.filter(|c| !c.is_empty()) {
        if parse_finite(cell).is_none() {
            return ColumnType::Text;
        }
        seen_value = true;
    }
    if seen_value {
        ColumnType::Numeric
    } else {
        ColumnType::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_type() {
        assert_eq!(infer_type(["1", "2.5", ""].into_iter()), ColumnType::Numeric);
        assert_eq!(infer_type(["1", "two"].into_iter()), ColumnType::Text);
        assert_eq!(infer_type(["", ""].into_iter()), ColumnType::Text);
        assert_eq!(infer_type(["1", "NaN"].into_iter()), ColumnType::Text);
        assert_eq!(infer_type(["inf", "2"].into_iter()), ColumnType::Text);
    }

    #[test]
    fn test_non_finite_column_reads_as_text() {
        let data = "a,b
1,1
NaN,2
3,3
";
        let table = read_csv_from_reader(data.as_bytes(), true).unwrap();
        assert_eq!(table.column_type("a").unwrap(), ColumnType::Text);
        assert_eq!(table.text_column("a").unwrap(), &["1", "NaN", "3"]);
        assert_eq!(table.numeric_column("b").unwrap(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_read_from_reader() {
        let data = "model,price\nSedan,12000\nCoupe,15000\nTruck,\n";
        let table = read_csv_from_reader(data.as_bytes(), true).unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_type("model").unwrap(), ColumnType::Text);
        assert_eq!(table.numeric_column("price").unwrap(), &[12000.0, 15000.0]);
    }

    #[test]
    fn test_read_without_header() {
        let data = "1,a\n2,b\n3\n";
        let table = read_csv_from_reader(data.as_bytes(), false).unwrap();
        assert_eq!(table.column_names(), vec!["column_0", "column_1"]);
        assert_eq!(table.numeric_column("column_0").unwrap(), &[1.0, 2.0, 3.0]);
        assert_eq!(table.text_column("column_1").unwrap(), &["a", "b", ""]);
    }
}
