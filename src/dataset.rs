//! Zone dataset loading.
//!
//! The input is a header line followed by rows of
//! `id, name, soilQuality, sunlightHours, moistureLevel, existingGreenCover`.
//! Fields are split on commas with no quoting support and trimmed before parsing.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;
use tracing::debug;

use crate::zone::Zone;

pub const FIELD_COUNT: usize = 6;

const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "id",
    "name",
    "soilQuality",
    "sunlightHours",
    "moistureLevel",
    "existingGreenCover",
];

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing header line")]
    MissingHeader,
    #[error("line {line}: expected 6 fields, found {found}")]
    FieldCount { line: u64, found: usize },
    #[error("line {line}: invalid {field} value {value:?}")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
    },
    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Reads every zone from the file at `path`. Any bad row fails the whole load.
pub fn load_zones(path: impl AsRef<Path>) -> Result<Vec<Zone>, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let zones = parse_zones(file)?;
    debug!(path = %path.display(), zones = zones.len(), "loaded zone dataset");
    Ok(zones)
}

pub fn parse_zones(input: impl Read) -> Result<Vec<Zone>, DatasetError> {
    let mut input = BufReader::new(input);
    let mut header = String::new();
    if input.read_line(&mut header)? == 0 {
        return Err(DatasetError::MissingHeader);
    }
    let mut body = String::new();
    input.read_to_string(&mut body)?;

    // The csv reader drops empty lines, so they are caught before it sees the body.
    if let Some(index) = body.lines().position(str::is_empty) {
        return Err(DatasetError::FieldCount {
            line: index as u64 + 2,
            found: 1,
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut zones = Vec::new();
    for record in reader.records() {
        zones.push(parse_record(&record?)?);
    }
    Ok(zones)
}

fn parse_record(record: &StringRecord) -> Result<Zone, DatasetError> {
    // Positions count from the first body line; the header sits above it.
    let line = record.position().map(|pos| pos.line()).unwrap_or_default() + 1;
    if record.len() != FIELD_COUNT {
        return Err(DatasetError::FieldCount {
            line,
            found: record.len(),
        });
    }

    let id = record[0]
        .parse::<i32>()
        .map_err(|_| invalid(line, 0, &record[0]))?;
    let measurement = |index: usize| -> Result<f64, DatasetError> {
        parse_measurement(&record[index]).ok_or_else(|| invalid(line, index, &record[index]))
    };

    Ok(Zone::new(
        id,
        &record[1],
        measurement(2)?,
        measurement(3)?,
        measurement(4)?,
        measurement(5)?,
    ))
}

/// Parses a decimal measurement. Non-finite values are accepted only as the result of
/// overflow or when spelled `NaN` / `Infinity` with an optional sign.
fn parse_measurement(text: &str) -> Option<f64> {
    let value = text.parse::<f64>().ok()?;
    if value.is_finite() || text.bytes().any(|b| b.is_ascii_digit()) {
        return Some(value);
    }
    let unsigned = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    matches!(unsigned, "NaN" | "Infinity").then_some(value)
}

fn invalid(line: u64, index: usize, value: &str) -> DatasetError {
    DatasetError::InvalidNumber {
        line,
        field: FIELD_NAMES[index],
        value: value.to_string(),
    }
}
