// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Runtime knobs for one pipeline run. CLI flags override the defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineOptions {
    pub url: String,
    pub out_dir: PathBuf,
    pub fetch: FetchOptions,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            url: s!(SOURCE_URL),
            out_dir: PathBuf::from(DEFAULT_DATA_DIR),
            fetch: FetchOptions::default(),
        }
    }
}

impl PipelineOptions {
    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub attempts: u32,
    pub base_delay: Duration,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            attempts: FETCH_ATTEMPTS,
            base_delay: Duration::from_millis(FETCH_BASE_DELAY_MS),
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
        }
    }
}
