use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Gateway state (shared across invocations, read-mostly)
#[derive(Clone)]
pub struct AppState {
    /// Host the function is served from (`HOSTNAME`, default `localhost`)
    pub hostname: String,
    /// Build identifier
    pub version: &'static str,
    /// Process start, for uptime
    started_at: Instant,
    /// Invocations accepted since start
    invocations: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            version: env!("GIT_HASH"),
            started_at: Instant::now(),
            invocations: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Build state from the process environment
    pub fn from_env() -> Self {
        Self::new(std::env::var("HOSTNAME").unwrap_or_else(|_| "localhost".to_string()))
    }

    /// Count an accepted invocation, returning its 1-based sequence number
    pub fn record_invocation(&self) -> u64 {
        self.invocations.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn invocations(&self) -> u64 {
        self.invocations.load(Ordering::Relaxed)
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
