use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Date32Type, Float32Type, Float64Type, Int32Type, Int64Type};
use calamine::{open_workbook_auto, Data, DataType as _, Reader};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::error::{DataLoadError, LoadResult};
use super::model::{Record, SalesDataset};

// ---------------------------------------------------------------------------
// Source columns
// ---------------------------------------------------------------------------

pub const COL_ITEM: &str = "Item Names";
pub const COL_DISTRIBUTOR: &str = "Distributors";
pub const COL_STATE: &str = "State";
pub const COL_YEAR: &str = "Year";
pub const COL_MONTH: &str = "Month";
pub const COL_CASES: &str = "Case Equivs";
pub const COL_UNITS: &str = "Units Sold";
pub const COL_NET: &str = "Net Price";

/// Required columns, in the order `record_from_cells` expects them.
pub const COLUMNS: [&str; 8] = [
    COL_ITEM,
    COL_DISTRIBUTOR,
    COL_STATE,
    COL_YEAR,
    COL_MONTH,
    COL_CASES,
    COL_UNITS,
    COL_NET,
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a sales dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xlsb` / `.xls` / `.ods` – the named `sheet`
/// * `.csv`     – header row with the source column names
/// * `.json`    – `df.to_json(orient="records")` output
/// * `.parquet` – flat columns with the source column names
///
/// `sheet` is ignored for non-workbook formats.
pub fn load_file(path: &Path, sheet: &str) -> LoadResult<SalesDataset> {
    std::fs::metadata(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => load_workbook(path, sheet)?,
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => return Err(DataLoadError::UnsupportedFormat(other.to_string())),
    };

    log::debug!("parsed {} rows from {}", records.len(), path.display());
    Ok(SalesDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Cell coercion shared by all formats
// ---------------------------------------------------------------------------

/// A raw cell value, normalised across source formats.
#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
}

impl Cell {
    fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    fn raw(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) => f.to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Date(d) => d.to_string(),
        }
    }
}

fn invalid(row: usize, column: &'static str, cell: &Cell) -> DataLoadError {
    DataLoadError::InvalidValue {
        row,
        column,
        value: cell.raw(),
    }
}

fn valid_year(y: i64) -> Option<i32> {
    (1000..=9999).contains(&y).then_some(y as i32)
}

fn integral(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0).then_some(f as i64)
}

fn text_value(cell: &Cell) -> String {
    match cell {
        Cell::Float(f) => match integral(*f) {
            Some(i) => i.to_string(),
            None => f.to_string(),
        },
        Cell::Text(s) => s.trim().to_string(),
        other => other.raw(),
    }
}

/// Interpret a year cell as a date and keep its year component.
fn year_value(row: usize, cell: &Cell) -> LoadResult<i32> {
    let year = match cell {
        Cell::Date(d) => Some(d.year()),
        Cell::Int(i) => valid_year(*i),
        Cell::Float(f) => integral(*f).and_then(valid_year),
        Cell::Text(s) => parse_year_text(s),
        Cell::Empty => None,
    };
    year.ok_or_else(|| invalid(row, COL_YEAR, cell))
}

fn parse_year_text(s: &str) -> Option<i32> {
    let s = s.trim();
    if let Ok(i) = s.parse::<i64>() {
        return valid_year(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return integral(f).and_then(valid_year);
    }
    for fmt in ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.year());
        }
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.year());
        }
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.year())
}

fn month_value(row: usize, cell: &Cell) -> LoadResult<u32> {
    let month = match cell {
        Cell::Int(i) => Some(*i),
        Cell::Float(f) => integral(*f),
        Cell::Text(s) => s.trim().parse::<i64>().ok(),
        Cell::Date(_) | Cell::Empty => None,
    };
    month
        .filter(|m| (1..=12).contains(m))
        .map(|m| m as u32)
        .ok_or_else(|| invalid(row, COL_MONTH, cell))
}

/// Missing measures count as zero, matching how the sums treat blanks.
fn measure_value(row: usize, column: &'static str, cell: &Cell) -> LoadResult<f64> {
    match cell {
        Cell::Empty => Ok(0.0),
        Cell::Int(i) => Ok(*i as f64),
        Cell::Float(f) => Ok(*f),
        Cell::Text(s) => {
            let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
            if cleaned.is_empty() {
                return Ok(0.0);
            }
            cleaned.parse::<f64>().map_err(|_| invalid(row, column, cell))
        }
        Cell::Date(_) => Err(invalid(row, column, cell)),
    }
}

/// Build a record from cells ordered like [`COLUMNS`]. Blank rows yield `None`.
fn record_from_cells(row: usize, cells: &[Cell; 8]) -> LoadResult<Option<Record>> {
    if cells.iter().all(Cell::is_empty) {
        return Ok(None);
    }
    let [item, distributor, state, year, month, cases, units, net] = cells;

    let year = year_value(row, year)?;
    let month_no = month_value(row, month)?;
    let record = Record::new(
        text_value(item),
        text_value(distributor),
        text_value(state),
        year,
        month_no,
        measure_value(row, COL_CASES, cases)?,
        measure_value(row, COL_UNITS, units)?,
        measure_value(row, COL_NET, net)?,
    )
    .ok_or_else(|| invalid(row, COL_MONTH, month))?;
    Ok(Some(record))
}

/// Position of each required column within a header row.
fn column_positions<S: AsRef<str>>(headers: &[S]) -> LoadResult<[usize; 8]> {
    let mut positions = [0usize; 8];
    for (slot, name) in positions.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.as_ref().trim() == name)
            .ok_or(DataLoadError::MissingColumn(name))?;
    }
    Ok(positions)
}

// ---------------------------------------------------------------------------
// Workbook loader
// ---------------------------------------------------------------------------

/// The header is the first row of the sheet's used range, which need not be
/// row 1 of the sheet.
fn load_workbook(path: &Path, sheet: &str) -> LoadResult<Vec<Record>> {
    let workbook_err = |source| DataLoadError::Workbook {
        path: path.to_path_buf(),
        source,
    };
    let mut workbook = open_workbook_auto(path).map_err(workbook_err)?;

    let available = workbook.sheet_names();
    if !available.iter().any(|name| name == sheet) {
        return Err(DataLoadError::MissingSheet {
            sheet: sheet.to_string(),
            available,
        });
    }

    let range = workbook.worksheet_range(sheet).map_err(workbook_err)?;
    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|header| header.iter().map(|c| c.to_string()).collect())
        .unwrap_or_default();
    let positions = column_positions(&headers)?;

    // 0-based sheet row of the header.
    let header_row = range.start().map_or(0, |(row, _)| row as usize);

    let mut records = Vec::with_capacity(range.height().saturating_sub(1));
    for (i, row) in rows.enumerate() {
        let cells = positions.map(|c| row.get(c).map(workbook_cell).unwrap_or(Cell::Empty));
        if let Some(record) = record_from_cells(header_row + i + 2, &cells)? {
            records.push(record);
        }
    }
    Ok(records)
}

fn workbook_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::String(s) => Cell::Text(s.clone()),
        Data::DateTime(_) | Data::DateTimeIso(_) => data
            .as_date()
            .map(Cell::Date)
            .unwrap_or_else(|| Cell::Text(data.to_string())),
        other => Cell::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> LoadResult<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let positions = column_positions(&headers)?;

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = result?;
        let cells = positions.map(|c| match row.get(c) {
            Some(s) if !s.is_empty() => Cell::Text(s.to_string()),
            _ => Cell::Empty,
        });
        if let Some(record) = record_from_cells(i + 2, &cells)? {
            records.push(record);
        }
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "Item Names": "Gin", "Distributors": "Acme", "State": "TX",
///     "Year": 1672531200000, "Month": 1,
///     "Case Equivs": 1.5, "Units Sold": 18, "Net Price": 240.0
///   }
/// ]
/// ```
///
/// `Year` may be a year number, a date string, or epoch milliseconds
/// (the Pandas default for datetime columns).
#[derive(Debug, Deserialize)]
struct JsonRow {
    #[serde(rename = "Item Names")]
    item: JsonCell,
    #[serde(rename = "Distributors")]
    distributor: JsonCell,
    #[serde(rename = "State")]
    state: JsonCell,
    #[serde(rename = "Year")]
    year: JsonCell,
    #[serde(rename = "Month")]
    month: JsonCell,
    #[serde(rename = "Case Equivs", default)]
    cases: JsonCell,
    #[serde(rename = "Units Sold", default)]
    units: JsonCell,
    #[serde(rename = "Net Price", default)]
    net: JsonCell,
}

#[derive(Debug, Default, Deserialize)]
#[serde(untagged)]
enum JsonCell {
    #[default]
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl JsonCell {
    fn into_cell(self) -> Cell {
        match self {
            JsonCell::Null => Cell::Empty,
            JsonCell::Int(i) => Cell::Int(i),
            JsonCell::Float(f) => Cell::Float(f),
            JsonCell::Text(s) => Cell::Text(s),
            JsonCell::Bool(b) => Cell::Text(b.to_string()),
        }
    }

    /// Large integers in the year column are epoch milliseconds.
    fn into_year_cell(self) -> Cell {
        match self {
            JsonCell::Int(ms) if valid_year(ms).is_none() => DateTime::from_timestamp_millis(ms)
                .map(|dt| Cell::Date(dt.date_naive()))
                .unwrap_or(Cell::Int(ms)),
            other => other.into_cell(),
        }
    }
}

fn load_json(path: &Path) -> LoadResult<Vec<Record>> {
    let text = std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows: Vec<JsonRow> = serde_json::from_str(&text)?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        let cells = [
            row.item.into_cell(),
            row.distributor.into_cell(),
            row.state.into_cell(),
            row.year.into_year_cell(),
            row.month.into_cell(),
            row.cases.into_cell(),
            row.units.into_cell(),
            row.net.into_cell(),
        ];
        if let Some(record) = record_from_cells(i + 1, &cells)? {
            records.push(record);
        }
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one flat column per source header.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`); timestamps and dictionary-encoded
/// strings are cast to simpler types before reading.
fn load_parquet(path: &Path) -> LoadResult<Vec<Record>> {
    let file = std::fs::File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let mut records = Vec::new();
    let mut row_offset = 0usize;

    for batch_result in reader {
        let batch = batch_result?;
        let schema = batch.schema();

        let mut columns = Vec::with_capacity(COLUMNS.len());
        for name in COLUMNS {
            let idx = schema
                .index_of(name)
                .map_err(|_| DataLoadError::MissingColumn(name))?;
            columns.push(normalize_column(batch.column(idx))?);
        }

        for row in 0..batch.num_rows() {
            let cells: [Cell; 8] = std::array::from_fn(|c| arrow_cell(&columns[c], row));
            if let Some(record) = record_from_cells(row_offset + row + 1, &cells)? {
                records.push(record);
            }
        }
        row_offset += batch.num_rows();
    }
    Ok(records)
}

/// Cast exotic column types to the handful `arrow_cell` understands.
fn normalize_column(col: &ArrayRef) -> LoadResult<ArrayRef> {
    let target = match col.data_type() {
        DataType::Timestamp(_, _) | DataType::Date64 => DataType::Date32,
        DataType::Int8
        | DataType::Int16
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64 => DataType::Int64,
        DataType::Dictionary(_, _) | DataType::Utf8View | DataType::Boolean => DataType::Utf8,
        _ => return Ok(Arc::clone(col)),
    };
    Ok(cast(col, &target)?)
}

fn arrow_cell(col: &ArrayRef, row: usize) -> Cell {
    if col.is_null(row) {
        return Cell::Empty;
    }
    match col.data_type() {
        DataType::Utf8 => Cell::Text(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Cell::Text(col.as_string::<i64>().value(row).to_string()),
        DataType::Int32 => Cell::Int(col.as_primitive::<Int32Type>().value(row) as i64),
        DataType::Int64 => Cell::Int(col.as_primitive::<Int64Type>().value(row)),
        DataType::Float32 => Cell::Float(col.as_primitive::<Float32Type>().value(row) as f64),
        DataType::Float64 => Cell::Float(col.as_primitive::<Float64Type>().value(row)),
        DataType::Date32 => col
            .as_primitive::<Date32Type>()
            .value_as_date(row)
            .map(Cell::Date)
            .unwrap_or(Cell::Empty),
        other => Cell::Text(format!("{other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(ext: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(&format!(".{ext}"))
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const HEADER: &str = "Item Names,Distributors,State,Year,Month,Case Equivs,Units Sold,Net Price";

    #[test]
    fn year_accepts_dates_numbers_and_strings() {
        let d = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        assert_eq!(year_value(2, &Cell::Date(d)).unwrap(), 2023);
        assert_eq!(year_value(2, &Cell::Int(2024)).unwrap(), 2024);
        assert_eq!(year_value(2, &Cell::Float(2022.0)).unwrap(), 2022);
        assert_eq!(year_value(2, &Cell::Text("2021".into())).unwrap(), 2021);
        assert_eq!(year_value(2, &Cell::Text("2023-01-01".into())).unwrap(), 2023);
        assert_eq!(year_value(2, &Cell::Text("2023-01-01 00:00:00".into())).unwrap(), 2023);
        assert_eq!(year_value(2, &Cell::Text("01/01/2020".into())).unwrap(), 2020);
        assert_eq!(
            year_value(2, &Cell::Text("2019-01-01T00:00:00.000Z".into())).unwrap(),
            2019
        );
        assert!(year_value(7, &Cell::Text("soon".into())).is_err());
        assert!(year_value(7, &Cell::Empty).is_err());
    }

    #[test]
    fn month_must_be_between_one_and_twelve() {
        assert_eq!(month_value(2, &Cell::Int(12)).unwrap(), 12);
        assert_eq!(month_value(2, &Cell::Text(" 3 ".into())).unwrap(), 3);
        match month_value(5, &Cell::Int(13)) {
            Err(DataLoadError::InvalidValue { row, column, value }) => {
                assert_eq!(row, 5);
                assert_eq!(column, COL_MONTH);
                assert_eq!(value, "13");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn blank_measures_are_zero() {
        assert_eq!(measure_value(2, COL_NET, &Cell::Empty).unwrap(), 0.0);
        assert_eq!(measure_value(2, COL_NET, &Cell::Text("1,250.5".into())).unwrap(), 1250.5);
        assert!(measure_value(2, COL_NET, &Cell::Text("abc".into())).is_err());
    }

    #[test]
    fn csv_round_trip_preserves_order() {
        let file = write_temp(
            "csv",
            &format!(
                "{HEADER}\n\
                 Gin,Acme,TX,2023-01-01,1,1.5,18,240.0\n\
                 ,,,,,,,\n\
                 Vodka,Blue,CA,2024,2,2,24,\n"
            ),
        );
        let ds = load_file(file.path(), "ignored").unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].item_name, "Gin");
        assert_eq!(ds.records[0].year, 2023);
        assert_eq!(ds.records[0].units_sold, 18.0);
        assert_eq!(ds.records[1].item_name, "Vodka");
        assert_eq!(ds.records[1].net_price, 0.0);
        assert_eq!(ds.records[1].full_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn csv_missing_column_is_reported() {
        let file = write_temp("csv", "Item Names,Distributors,State,Year,Month\nGin,Acme,TX,2024,1\n");
        let err = load_file(file.path(), "ignored").unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn(COL_CASES)), "{err}");
    }

    #[test]
    fn csv_bad_month_reports_spreadsheet_row() {
        let file = write_temp("csv", &format!("{HEADER}\nGin,Acme,TX,2024,1,1,1,1\nGin,Acme,TX,2024,14,1,1,1\n"));
        match load_file(file.path(), "ignored") {
            Err(DataLoadError::InvalidValue { row, column, .. }) => {
                assert_eq!(row, 3);
                assert_eq!(column, COL_MONTH);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn json_records_with_epoch_millis_year() {
        // 1672531200000 ms = 2023-01-01T00:00:00Z
        let file = write_temp(
            "json",
            r#"[
                {"Item Names": "Gin", "Distributors": "Acme", "State": "TX",
                 "Year": 1672531200000, "Month": 4,
                 "Case Equivs": 1.5, "Units Sold": 18, "Net Price": null, "Extra": true},
                {"Item Names": "Rum", "Distributors": "Acme", "State": "NM",
                 "Year": "2024-01-01", "Month": 5,
                 "Case Equivs": 2, "Units Sold": 6, "Net Price": 99.5}
            ]"#,
        );
        let ds = load_file(file.path(), "ignored").unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!((ds.records[0].year, ds.records[0].month), (2023, 4));
        assert_eq!(ds.records[0].net_price, 0.0);
        assert_eq!((ds.records[1].year, ds.records[1].month), (2024, 5));
        assert_eq!(ds.records[1].net_price, 99.5);
    }

    #[test]
    fn missing_file_and_unknown_extension() {
        let err = load_file(Path::new("/definitely/not/here.xlsx"), "Sheet1").unwrap_err();
        assert!(matches!(err, DataLoadError::Io { .. }));

        let file = write_temp("txt", "hello");
        let err = load_file(file.path(), "Sheet1").unwrap_err();
        assert!(matches!(err, DataLoadError::UnsupportedFormat(ref e) if e == "txt"));
    }

    #[test]
    fn workbook_missing_sheet_lists_available() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales.xlsx");
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Other").unwrap();
        for (c, name) in COLUMNS.iter().enumerate() {
            sheet.write_string(0, c as u16, *name).unwrap();
        }
        workbook.save(&path).unwrap();

        match load_file(&path, "Rolling Periods 27 Month") {
            Err(DataLoadError::MissingSheet { sheet, available }) => {
                assert_eq!(sheet, "Rolling Periods 27 Month");
                assert_eq!(available, vec!["Other".to_string()]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn workbook_with_date_year_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales.xlsx");
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let date_format = rust_xlsxwriter::Format::new().set_num_format("yyyy-mm-dd");
        let sheet = workbook.add_worksheet();
        sheet.set_name("Rolling Periods 27 Month").unwrap();
        for (c, name) in COLUMNS.iter().enumerate() {
            sheet.write_string(0, c as u16, *name).unwrap();
        }
        let year = rust_xlsxwriter::ExcelDateTime::from_ymd(2023, 1, 1).unwrap();
        sheet.write_string(1, 0, "Gin").unwrap();
        sheet.write_string(1, 1, "Acme").unwrap();
        sheet.write_string(1, 2, "TX").unwrap();
        sheet.write_datetime_with_format(1, 3, &year, &date_format).unwrap();
        sheet.write_number(1, 4, 7).unwrap();
        sheet.write_number(1, 5, 1.25).unwrap();
        sheet.write_number(1, 6, 15).unwrap();
        sheet.write_number(1, 7, 300.0).unwrap();
        workbook.save(&path).unwrap();

        let ds = load_file(&path, "Rolling Periods 27 Month").unwrap();
        assert_eq!(ds.len(), 1);
        let rec = &ds.records[0];
        assert_eq!((rec.year, rec.month), (2023, 7));
        assert_eq!(rec.case_equivalents, 1.25);
        assert_eq!(rec.net_price, 300.0);
    }

    #[test]
    fn workbook_error_rows_count_leading_blank_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("offset.xlsx");
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Rolling Periods 27 Month").unwrap();
        // Header on sheet row 3, first data row on sheet row 4.
        for (c, name) in COLUMNS.iter().enumerate() {
            sheet.write_string(2, c as u16, *name).unwrap();
        }
        sheet.write_string(3, 0, "Gin").unwrap();
        sheet.write_string(3, 1, "Acme").unwrap();
        sheet.write_string(3, 2, "TX").unwrap();
        sheet.write_number(3, 3, 2024).unwrap();
        sheet.write_number(3, 4, 13).unwrap();
        sheet.write_number(3, 5, 1.0).unwrap();
        sheet.write_number(3, 6, 2).unwrap();
        sheet.write_number(3, 7, 3.0).unwrap();
        workbook.save(&path).unwrap();

        match load_file(&path, "Rolling Periods 27 Month") {
            Err(DataLoadError::InvalidValue { row, column, .. }) => {
                assert_eq!(row, 4);
                assert_eq!(column, COL_MONTH);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn parquet_with_timestamp_year_and_dictionary_items() {
        use arrow::array::{DictionaryArray, Float64Array, Int64Array, StringArray, TimestampNanosecondArray};
        use arrow::datatypes::{Field, Schema, TimeUnit};
        use arrow::record_batch::RecordBatch;
        use parquet::arrow::ArrowWriter;

        let items: DictionaryArray<Int32Type> = vec!["Rum", "Gin"].into_iter().collect();
        let schema = Arc::new(Schema::new(vec![
            Field::new(COL_ITEM, DataType::Dictionary(Box::new(DataType::Int32), Box::new(DataType::Utf8)), false),
            Field::new(COL_DISTRIBUTOR, DataType::Utf8, false),
            Field::new(COL_STATE, DataType::Utf8, false),
            Field::new(COL_YEAR, DataType::Timestamp(TimeUnit::Nanosecond, None), false),
            Field::new(COL_MONTH, DataType::Int64, false),
            Field::new(COL_CASES, DataType::Float64, true),
            Field::new(COL_UNITS, DataType::Int64, false),
            Field::new(COL_NET, DataType::Float64, false),
        ]));
        let columns: Vec<ArrayRef> = vec![
            Arc::new(items),
            Arc::new(StringArray::from(vec!["Acme", "Blue"])),
            Arc::new(StringArray::from(vec!["TX", "CA"])),
            // 2023-01-01 and 2024-01-01 at midnight UTC.
            Arc::new(TimestampNanosecondArray::from(vec![
                1_672_531_200_000_000_000,
                1_704_067_200_000_000_000,
            ])),
            Arc::new(Int64Array::from(vec![5, 6])),
            Arc::new(Float64Array::from(vec![None, Some(2.0)])),
            Arc::new(Int64Array::from(vec![12, 24])),
            Arc::new(Float64Array::from(vec![99.5, 10.0])),
        ];
        let batch = RecordBatch::try_new(Arc::clone(&schema), columns).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales.parquet");
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path, "ignored").unwrap();
        assert_eq!(ds.len(), 2);
        let first = &ds.records[0];
        assert_eq!(first.item_name, "Rum");
        assert_eq!((first.year, first.month), (2023, 5));
        assert_eq!(first.case_equivalents, 0.0);
        assert_eq!(first.units_sold, 12.0);
        assert_eq!(first.net_price, 99.5);
        assert_eq!(ds.records[1].item_name, "Gin");
        assert_eq!(ds.records[1].year, 2024);
        assert_eq!(ds.year_bounds, Some((2023, 2024)));
    }
}
