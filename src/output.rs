//! Binary plist output

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::error::UpdateError;
use crate::parse::CityRecord;

/// Write the records as a binary plist array, overwriting any existing file
///
/// Parent directories are created if missing. Records are serialized as an
/// array of `{city, lat, long}` dictionaries in the order given.
pub fn write_plist(path: &Path, cities: &[CityRecord]) -> Result<(), UpdateError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    plist::to_writer_binary(&mut writer, &cities)?;
    writer.flush()?;

    debug!(records = cities.len(), path = %path.display(), "wrote binary plist");
    Ok(())
}
