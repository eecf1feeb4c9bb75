// xlsq-formula/src/http.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use tokio::fs::File as TokioFile;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, warn};
use xlsq_common::config::Config;
use xlsq_common::error::{Result, XlsqError};

use crate::checksum::{sha256_file_async, verify_checksum_async};
use crate::model::Formula;
use crate::validation::validate_url;

const DOWNLOAD_TIMEOUT_SECS: u64 = 300;
const CONNECT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT_STRING: &str = "xlsq-formula (Rust; +https://github.com/nikhileshva/xlsq)";

/// A source archive on disk together with its digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedArchive {
    pub path: PathBuf,
    pub sha256: String,
}

/// Downloads the formula's source archive into the cache and verifies it.
///
/// A cached archive is reused when it matches the declared checksum. With
/// the placeholder checksum the archive is still downloaded and kept, but the
/// call fails with the actual digest so it can be written into the formula.
pub async fn fetch_source(formula: &Formula, config: &Config) -> Result<FetchedArchive> {
    validate_url(&formula.url)?;
    let client = build_http_client()?;
    fetch_into_cache(&client, &formula.url, formula, config).await
}

/// Cache lookup and download for an already validated `url`.
pub(crate) async fn fetch_into_cache(
    client: &Client,
    url: &str,
    formula: &Formula,
    config: &Config,
) -> Result<FetchedArchive> {
    let downloads = config.downloads_dir();
    let cache_path = downloads.join(formula.archive_file_name());
    debug!(
        "Preparing to fetch source for '{}' from URL: {}",
        formula.name, url
    );
    debug!("Target cache path: {}", cache_path.display());

    let expected = (!formula.has_placeholder_checksum()).then_some(formula.sha256.as_str());

    if let (true, Some(sha256)) = (cache_path.is_file(), expected) {
        match verify_checksum_async(&cache_path, sha256).await {
            Ok(()) => {
                debug!("Using valid cached file: {}", cache_path.display());
                return Ok(FetchedArchive {
                    path: cache_path,
                    sha256: sha256.to_ascii_lowercase(),
                });
            }
            Err(e) => {
                debug!(
                    "Cached file checksum mismatch ({}): {}. Redownloading.",
                    cache_path.display(),
                    e
                );
                if let Err(remove_err) = fs::remove_file(&cache_path) {
                    debug!(
                        "Failed to remove corrupted cached file {}: {}",
                        cache_path.display(),
                        remove_err
                    );
                }
            }
        }
    }

    fs::create_dir_all(&downloads).map_err(|e| {
        XlsqError::IoError(format!(
            "Failed to create download directory {}: {}",
            downloads.display(),
            e
        ))
    })?;

    let archive = download_and_verify(client, url, &cache_path, expected)
        .await
        .map_err(|e| match e {
            XlsqError::ChecksumError(_) | XlsqError::DownloadError(..) => e,
            other => XlsqError::DownloadError(formula.name.clone(), url.to_string(), other.to_string()),
        })?;

    if expected.is_none() {
        return Err(XlsqError::ChecksumError(format!(
            "formula '{}' has no checksum to verify against; the archive at {} has SHA-256 {}",
            formula.name,
            archive.path.display(),
            archive.sha256
        )));
    }
    Ok(archive)
}

pub(crate) fn build_http_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_STRING));
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    Client::builder()
        .timeout(Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .default_headers(headers)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| XlsqError::HttpError(format!("Failed to build HTTP client: {e}")))
}

/// Streams `url` to a temporary sibling of `final_path`, verifies it when a
/// checksum is given and renames it into place.
pub(crate) async fn download_and_verify(
    client: &Client,
    url: &str,
    final_path: &Path,
    sha256_expected: Option<&str>,
) -> Result<FetchedArchive> {
    let file_name = final_path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let temp_path = final_path.with_file_name(format!(".{file_name}.download"));
    debug!("Downloading to temporary path: {}", temp_path.display());
    if temp_path.exists() {
        if let Err(e) = fs::remove_file(&temp_path) {
            warn!(
                "Could not remove existing temporary file {}: {}",
                temp_path.display(),
                e
            );
        }
    }

    let response = client.get(url).send().await.map_err(|e| {
        debug!("HTTP request failed for {url}: {e}");
        XlsqError::HttpError(format!("HTTP request failed for {url}: {e}"))
    })?;
    let status = response.status();
    debug!("Received HTTP status: {} for {}", status, url);

    if !status.is_success() {
        error!("HTTP error {} for URL {}", status, url);
        let reason = match status {
            StatusCode::NOT_FOUND => "Resource not found (404)".to_string(),
            StatusCode::FORBIDDEN => "Access forbidden (403)".to_string(),
            other => format!("HTTP error {other}"),
        };
        return Err(XlsqError::DownloadError(file_name, url.to_string(), reason));
    }

    let mut temp_file = TokioFile::create(&temp_path).await.map_err(|e| {
        XlsqError::IoError(format!(
            "Failed to create temp file {}: {}",
            temp_path.display(),
            e
        ))
    })?;
    let content = response
        .bytes()
        .await
        .map_err(|e| XlsqError::HttpError(format!("Failed to read response body bytes: {e}")))?;
    temp_file.write_all(&content).await.map_err(|e| {
        XlsqError::IoError(format!(
            "Failed to write download stream to {}: {}",
            temp_path.display(),
            e
        ))
    })?;
    temp_file.flush().await?;
    drop(temp_file);

    let actual = sha256_file_async(&temp_path).await?;
    match sha256_expected {
        Some(expected) if !actual.eq_ignore_ascii_case(expected) => {
            let _ = fs::remove_file(&temp_path);
            return Err(XlsqError::ChecksumError(format!(
                "Checksum mismatch for {url}: expected {expected}, got {actual}"
            )));
        }
        Some(_) => debug!("Checksum verified for {}", temp_path.display()),
        None => warn!(
            "Skipping checksum verification for {} - none provided.",
            temp_path.display()
        ),
    }

    fs::rename(&temp_path, final_path).map_err(|e| {
        XlsqError::IoError(format!(
            "Failed to move temp file {} to {}: {}",
            temp_path.display(),
            final_path.display(),
            e
        ))
    })?;
    debug!("Moved downloaded file to {}", final_path.display());
    Ok(FetchedArchive {
        path: final_path.to_path_buf(),
        sha256: actual,
    })
}
