//! Dataset download

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::error::UpdateError;

/// Fetch the dataset body as text
///
/// A single GET with no retries. A non-2xx status is reported as
/// `UpdateError::Status` before the body is read.
pub async fn fetch_csv(url: &str, timeout: Duration) -> Result<String, UpdateError> {
    debug!(%url, ?timeout, "fetching city dataset");

    let client = Client::builder().timeout(timeout).build()?;
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(UpdateError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    debug!(bytes = body.len(), "dataset body received");
    Ok(body)
}
