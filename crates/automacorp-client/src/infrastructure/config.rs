//! Client configuration.
//!
//! [`ClientConfig`] is the single source of truth for runtime settings.  It is
//! a plain struct: no global state, and no environment reads anywhere except
//! [`ClientConfig::from_env`], which the host application calls once at
//! startup.
//!
//! # Environment overrides
//!
//! | Variable                     | Default                       | Field             |
//! |------------------------------|-------------------------------|-------------------|
//! | `AUTOMACORP_API_URL`         | `http://127.0.0.1:8080/api/`  | `base_url`        |
//! | `AUTOMACORP_WORKER_THREADS`  | `4`                           | `worker_threads`  |
//! | `AUTOMACORP_NOTICE_CAPACITY` | `16` (at most 1024)           | `notice_capacity` |

use anyhow::{ensure, Context};
use reqwest::Url;

use crate::application::room_sync::{DEFAULT_NOTICE_CAPACITY, MAX_NOTICE_CAPACITY};

pub const API_URL_ENV: &str = "AUTOMACORP_API_URL";
pub const WORKER_THREADS_ENV: &str = "AUTOMACORP_WORKER_THREADS";
pub const NOTICE_CAPACITY_ENV: &str = "AUTOMACORP_NOTICE_CAPACITY";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/api/";
const DEFAULT_WORKER_THREADS: usize = 4;

/// All runtime configuration for the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root of the REST resource surface; `rooms`, `windows/{id}` etc. are
    /// resolved relative to it.
    pub base_url: String,

    /// Worker threads in the background I/O pool.
    pub worker_threads: usize,

    /// Capacity of the transient notice channel.
    pub notice_capacity: usize,
}

impl Default for ClientConfig {
    /// | Field           | Default                      |
    /// |-----------------|------------------------------|
    /// | base_url        | `http://127.0.0.1:8080/api/` |
    /// | worker_threads  | 4                            |
    /// | notice_capacity | 16                           |
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            worker_threads: DEFAULT_WORKER_THREADS,
            notice_capacity: DEFAULT_NOTICE_CAPACITY,
        }
    }
}

impl ClientConfig {
    /// Builds a configuration from the defaults plus environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but unparseable, or if the
    /// resulting base URL is not an absolute URL.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_ENV) {
            config.base_url = url.trim().to_string();
        }
        if let Some(threads) = lookup(WORKER_THREADS_ENV) {
            config.worker_threads = threads
                .trim()
                .parse()
                .with_context(|| format!("invalid {WORKER_THREADS_ENV}: '{threads}'"))?;
        }
        if let Some(capacity) = lookup(NOTICE_CAPACITY_ENV) {
            config.notice_capacity = capacity
                .trim()
                .parse()
                .with_context(|| format!("invalid {NOTICE_CAPACITY_ENV}: '{capacity}'"))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks invariants the rest of the client relies on.
    pub fn validate(&self) -> anyhow::Result<()> {
        Url::parse(&self.base_url)
            .with_context(|| format!("invalid API base URL: '{}'", self.base_url))?;
        ensure!(self.worker_threads > 0, "worker_threads must be at least 1");
        ensure!(
            (1..=MAX_NOTICE_CAPACITY).contains(&self.notice_capacity),
            "notice_capacity must be between 1 and {MAX_NOTICE_CAPACITY}, got {}",
            self.notice_capacity
        );
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
