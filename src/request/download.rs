//! Request helpers (file download).

use super::common::{ensure_ok, send_get, transport};
use crate::config::HttpConfig;
use crate::error::HttpError;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// GET `uri` and stream the response body into a file at `dest`.
///
/// The destination is created (or truncated) only after a `200 OK` status
/// is observed, so a non-200 response leaves no file behind. The body is
/// written chunk by chunk without buffering it whole in memory. A transfer
/// that fails midway can leave a partial file; it is not rolled back.
pub async fn download_file(
    config: &HttpConfig,
    dest: impl AsRef<Path>,
    uri: &str,
) -> Result<(), HttpError> {
    let mut response = ensure_ok(uri, send_get(config, uri).await?)?;
    tracing::debug!(uri, dest = %dest.as_ref().display(), "downloading to file");
    let mut file = File::create(dest.as_ref()).await?;
    while let Some(chunk) = response.chunk().await.map_err(|e| transport(uri, e))? {
        file.write_all(&chunk).await?;
    }
    file.flush().await?;
    Ok(())
}
