// src/core/net.rs
//
// Blocking HTTP GET with retry/backoff, then charset fallback decoding.

use std::{thread, time::Duration};

use crate::config::consts::USER_AGENT;
use crate::config::options::FetchOptions;
use crate::core::decode::{self, DEFAULT_CANDIDATES};
use crate::error::PipelineError;

/// One raw GET. Errors are plain messages; the fetcher decides what is fatal.
pub trait Transport {
    fn get(&self, url: &str) -> Result<Vec<u8>, String>;
}

/// Production transport on a blocking reqwest client.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, PipelineError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| PipelineError::HttpClient(e.to_string()))?;
        Ok(Self { client, timeout })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, String> {
        let resp = self.client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                format!("request timed out after {}s", self.timeout.as_secs())
            } else {
                e.to_string()
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(format!("HTTP error: {} {}", status.as_u16(), url));
        }
        resp.bytes().map(|b| b.to_vec()).map_err(|e| e.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Sleep before retrying after failed attempt `n` (0-based): base * 2^n.
    pub fn delay_after(&self, n: u32) -> Duration {
        self.base_delay.saturating_mul(1u32 << n.min(16))
    }
}

impl From<&FetchOptions> for RetryPolicy {
    fn from(o: &FetchOptions) -> Self {
        Self { attempts: o.attempts.max(1), base_delay: o.base_delay }
    }
}

pub struct Fetcher<T: Transport> {
    transport: T,
    url: String,
    retry: RetryPolicy,
}

impl Fetcher<HttpTransport> {
    pub fn http(url: &str, opts: &FetchOptions) -> Result<Self, PipelineError> {
        Ok(Self::new(HttpTransport::new(opts.timeout)?, url, RetryPolicy::from(opts)))
    }
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T, url: &str, retry: RetryPolicy) -> Self {
        Self { transport, url: s!(url), retry }
    }

    /// Fetch the page and decode it. Transport failures are retried;
    /// decode problems never fail the call.
    pub fn fetch(&self) -> Result<String, PipelineError> {
        let bytes = self.fetch_bytes()?;
        let decoded = decode::decode_bytes(&bytes, DEFAULT_CANDIDATES);
        match decoded.encoding {
            Some(enc) => logf!("Fetch: {} chars using {}", decoded.text.chars().count(), enc.label()),
            None => logw!("Fetch: no candidate encoding fit; decoded lossily"),
        }
        Ok(decoded.text)
    }

    pub fn fetch_bytes(&self) -> Result<Vec<u8>, PipelineError> {
        let attempts = self.retry.attempts.max(1);
        let mut last_err = s!();

        for attempt in 0..attempts {
            logf!("Fetch: {} (attempt {}/{})", self.url, attempt + 1, attempts);
            match self.transport.get(&self.url) {
                Ok(bytes) => {
                    logd!("Fetch: {} bytes", bytes.len());
                    return Ok(bytes);
                }
                Err(e) => {
                    loge!("Fetch: attempt {} failed: {}", attempt + 1, e);
                    last_err = e;
                    if attempt + 1 < attempts {
                        thread::sleep(self.retry.delay_after(attempt));
                    }
                }
            }
        }

        Err(PipelineError::Transport {
            url: self.url.clone(),
            attempts,
            message: last_err,
        })
    }
}
