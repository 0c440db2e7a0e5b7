//! CSV ingestion for externally supplied holiday tables.
//!
//! Operators can replace the compiled-in calendar with a `fecha,nombre`
//! file (one row per observance). Parsing is strict: a row that cannot be
//! read as a date is a configuration defect and fails the whole load.

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;

#[derive(Debug, thiserror::Error)]
pub enum HolidayDataError {
    #[error("failed to read holiday file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid holiday CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: '{value}' is not a YYYY-MM-DD date")]
    InvalidDate { row: usize, value: String },
    #[error("holiday {date} falls outside the declared coverage year {year}")]
    OutsideCoverage { date: NaiveDate, year: i32 },
    #[error("holiday file contains no rows")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct HolidayRow {
    fecha: String,
    #[allow(dead_code)]
    nombre: Option<String>,
}

pub(crate) fn parse_holiday_rows<R: Read>(
    reader: R,
) -> Result<HashSet<NaiveDate>, HolidayDataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut holidays = HashSet::new();

    for (index, record) in csv_reader.deserialize::<HolidayRow>().enumerate() {
        let row = record?;
        let date = NaiveDate::parse_from_str(row.fecha.trim(), "%Y-%m-%d").map_err(|_| {
            HolidayDataError::InvalidDate {
                // header is line 1
                row: index + 2,
                value: row.fecha.clone(),
            }
        })?;
        holidays.insert(date);
    }

    if holidays.is_empty() {
        return Err(HolidayDataError::Empty);
    }

    Ok(holidays)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_fecha_nombre_rows() {
        let csv = "fecha,nombre\n2026-01-01,Año Nuevo\n2026-12-25,Navidad\n";
        let holidays = parse_holiday_rows(Cursor::new(csv)).expect("valid file parses");
        assert_eq!(holidays.len(), 2);
        assert!(holidays.contains(&NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
    }

    #[test]
    fn duplicate_rows_collapse() {
        let csv = "fecha,nombre\n2026-01-01,Año Nuevo\n2026-01-01,Año Nuevo\n";
        let holidays = parse_holiday_rows(Cursor::new(csv)).expect("parses");
        assert_eq!(holidays.len(), 1);
    }

    #[test]
    fn malformed_date_names_the_row() {
        let csv = "fecha,nombre\n2026-01-01,Año Nuevo\n01/06/2026,Reyes\n";
        let error = parse_holiday_rows(Cursor::new(csv)).expect_err("bad date rejected");
        match error {
            HolidayDataError::InvalidDate { row, value } => {
                assert_eq!(row, 3);
                assert_eq!(value, "01/06/2026");
            }
            other => panic!("expected invalid date error, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_is_rejected() {
        let error = parse_holiday_rows(Cursor::new("fecha,nombre\n")).expect_err("empty rejected");
        assert!(matches!(error, HolidayDataError::Empty));
    }
}
