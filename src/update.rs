//! The fetch -> parse -> serialize pipeline

use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::error::UpdateError;
use crate::fetch::fetch_csv;
use crate::output::write_plist;
use crate::parse::parse_cities;

/// Result of a completed update run
#[derive(Debug, Clone)]
pub struct UpdateSummary {
    /// Number of city records written
    pub records: usize,
    /// Path the plist was written to
    pub output: PathBuf,
}

/// Run the whole pipeline once
///
/// Fetch and parse complete before the output file is opened, so a failed
/// run leaves no output behind.
pub async fn update(config: &Config) -> Result<UpdateSummary, UpdateError> {
    let body = fetch_csv(&config.url, Duration::from_millis(config.timeout_ms)).await?;
    let cities = parse_cities(&body)?;
    write_plist(&config.output_path, &cities)?;

    info!(
        records = cities.len(),
        path = %config.output_path.display(),
        "city plist updated"
    );

    Ok(UpdateSummary {
        records: cities.len(),
        output: config.output_path.clone(),
    })
}
