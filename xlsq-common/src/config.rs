// xlsq-common/src/config.rs
use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use super::error::{Result, XlsqError};

// Fallback install prefix when HOMEBREW_PREFIX is not set or is empty.
const DEFAULT_FALLBACK_PREFIX: &str = "/opt/homebrew";
pub const DEFAULT_ROWS: usize = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub default_rows: usize,
    pub prefix: PathBuf,
    pub cache_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup. `load` passes the
    /// process environment.
    pub fn load_from<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Loading xlsq configuration");
        let var = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());

        let default_rows = match var("XLSQ_DEFAULT_ROWS") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|e| {
                XlsqError::Config(format!("XLSQ_DEFAULT_ROWS must be a row count, got '{raw}': {e}"))
            })?,
            None => DEFAULT_ROWS,
        };

        let prefix = var("HOMEBREW_PREFIX").map(PathBuf::from).unwrap_or_else(|| {
            debug!(
                "HOMEBREW_PREFIX not set or empty, falling back to default: {}",
                DEFAULT_FALLBACK_PREFIX
            );
            PathBuf::from(DEFAULT_FALLBACK_PREFIX)
        });

        let cache_dir = match var("XLSQ_CACHE_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => ProjectDirs::from("", "", "xlsq")
                .map(|dirs| dirs.cache_dir().to_path_buf())
                .unwrap_or_else(|| env::temp_dir().join("xlsq-cache")),
        };

        debug!(
            "Configuration loaded: default_rows={}, prefix={}, cache_dir={}",
            default_rows,
            prefix.display(),
            cache_dir.display()
        );
        Ok(Self {
            default_rows,
            prefix,
            cache_dir,
        })
    }

    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.prefix.join("bin")
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn downloads_dir(&self) -> PathBuf {
        self.cache_dir().join("downloads")
    }
}
