use std::path::Path;

use log::{debug, info, warn};
use reqwest::{Client, StatusCode};

use crate::error::{PipelineError, Result};

/// What happened to the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    Written { bytes: usize },
    /// The image host answered with something other than 200, nothing was written
    Skipped { status: StatusCode },
}

impl DownloadOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, DownloadOutcome::Written { .. })
    }
}

/// Plain GET of `url`; on 200 the body is written to `path`, replacing any
/// existing file.
pub async fn download_image(client: &Client, url: &str, path: &Path) -> Result<DownloadOutcome> {
    info!("Downloading {url}");
    let resp = client.get(url).send().await?;

    let status = resp.status();
    if status != StatusCode::OK {
        warn!("Image host answered {status}, not writing {}", path.display());
        return Ok(DownloadOutcome::Skipped { status });
    }

    let bytes = resp.bytes().await?;
    debug!("Got {} bytes", bytes.len());
    write_image(path, &bytes).await
}

pub(crate) async fn write_image(path: &Path, bytes: &[u8]) -> Result<DownloadOutcome> {
    tokio::fs::write(path, bytes)
        .await
        .map_err(|source| PipelineError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(DownloadOutcome::Written { bytes: bytes.len() })
}
