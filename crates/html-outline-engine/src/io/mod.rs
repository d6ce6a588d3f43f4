//! Acquiring markup bytes from files, stdin, or over HTTP.
//!
//! Every reader enforces a byte limit so a runaway input fails with
//! [`IoError::TooLarge`] instead of being buffered whole.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info};
use thiserror::Error;

pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum IoError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to fetch {url}: {message}")]
    Fetch {
        url: String,
        message: String,
        retryable: bool,
    },

    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("input is {size} bytes or more, limit is {limit}")]
    TooLarge { size: u64, limit: u64 },
}

impl IoError {
    /// Whether trying the same request again could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Fetch { retryable, .. } => *retryable,
            Self::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub user_agent: String,
    pub timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: format!("html-outline/{}", env!("CARGO_PKG_VERSION")),
            timeout: DEFAULT_TIMEOUT,
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

pub fn read_file(path: &Path, max_bytes: u64) -> Result<Vec<u8>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let size = std::fs::metadata(path)?.len();
    if size > max_bytes {
        return Err(IoError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    debug!("Reading {} ({} bytes)", path.display(), size);
    read_limited(std::fs::File::open(path)?, max_bytes)
}

pub fn read_stdin(max_bytes: u64) -> Result<Vec<u8>, IoError> {
    read_limited(std::io::stdin().lock(), max_bytes)
}

pub fn fetch_url(url: &str, options: &FetchOptions) -> Result<Vec<u8>, IoError> {
    info!("Fetching {url}");

    let client = reqwest::blocking::Client::builder()
        .user_agent(options.user_agent.as_str())
        .timeout(options.timeout)
        .build()
        .map_err(|e| fetch_error(url, e))?;

    let response = client.get(url).send().map_err(|e| fetch_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(IoError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    if let Some(size) = response.content_length()
        && size > options.max_bytes
    {
        return Err(IoError::TooLarge {
            size,
            limit: options.max_bytes,
        });
    }

    let body = read_limited(response, options.max_bytes)?;
    info!("Fetched {} bytes from {url}", body.len());
    Ok(body)
}

/// Reads at most `limit` bytes; one byte more is an error.
pub fn read_limited<R: Read>(reader: R, limit: u64) -> Result<Vec<u8>, IoError> {
    let mut buf = Vec::new();
    reader.take(limit.saturating_add(1)).read_to_end(&mut buf)?;

    let size = buf.len() as u64;
    if size > limit {
        return Err(IoError::TooLarge { size, limit });
    }
    Ok(buf)
}

fn fetch_error(url: &str, err: reqwest::Error) -> IoError {
    IoError::Fetch {
        url: url.to_string(),
        retryable: err.is_timeout() || err.is_connect(),
        message: err.to_string(),
    }
}
