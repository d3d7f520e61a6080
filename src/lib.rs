//! CityPlist - world-cities dataset converter
//!
//! Downloads the simplemaps world-cities basic CSV and publishes it as the
//! binary plist the GPS info app consumes. One run is a single linear
//! pipeline:
//!
//! ```text
//! HTTP GET ──▶ CSV rows ──▶ {city, lat, long} ──▶ cities.plist
//!  (fetch)      (parse)        (project)        (binary plist)
//! ```
//!
//! Any failure along the pipeline is fatal: a non-2xx response or a
//! malformed row aborts the run before the output file is opened.
//!
//! # Example
//!
//! ```ignore
//! use cityplist::config::Config;
//!
//! let config = Config::default();
//! let summary = cityplist::update(&config).await?;
//! println!("{} cities -> {}", summary.records, summary.output.display());
//! ```

pub mod cli;
pub mod config;
mod error;
mod fetch;
mod output;
mod parse;
mod update;

pub use error::UpdateError;
pub use fetch::fetch_csv;
pub use output::write_plist;
pub use parse::{CityRecord, parse_cities};
pub use update::{UpdateSummary, update};

/// Dataset URL fetched when no override is given
pub const DEFAULT_URL: &str =
    "https://simplemaps.com/static/data/world-cities/basic/simplemaps-worldcities-basic.csv";

/// Output path the consuming app expects the plist at
pub const DEFAULT_OUTPUT: &str = "GPSInfo/cities.plist";
