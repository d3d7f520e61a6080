//! CSV row projection into city records

use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::UpdateError;

/// Minimum columns a data row must carry
const COLUMN_COUNT: usize = 9;

/// Column positions in the world-cities basic CSV
const CITY_COL: usize = 0;
const LAT_COL: usize = 2;
const LONG_COL: usize = 3;

/// One city with its coordinates, in dataset row order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    /// City name as it appears in the dataset
    pub city: String,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub long: f64,
}

/// Parse the CSV body into city records, skipping the header row
///
/// Rows keep their input order. The first short row or non-numeric
/// coordinate aborts the whole parse.
pub fn parse_cities(body: &str) -> Result<Vec<CityRecord>, UpdateError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut cities = Vec::new();

    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        if record.len() < COLUMN_COUNT {
            return Err(UpdateError::ShortRow {
                line,
                found: record.len(),
            });
        }

        cities.push(CityRecord {
            city: record[CITY_COL].to_string(),
            lat: parse_coordinate(&record, LAT_COL, "lat", line)?,
            long: parse_coordinate(&record, LONG_COL, "long", line)?,
        });
    }

    debug!(records = cities.len(), "parsed city rows");
    Ok(cities)
}

fn parse_coordinate(
    record: &StringRecord,
    col: usize,
    field: &'static str,
    line: u64,
) -> Result<f64, UpdateError> {
    record[col]
        .trim()
        .parse::<f64>()
        .map_err(|_| UpdateError::InvalidCoordinate {
            line,
            field,
            value: record[col].to_string(),
        })
}
