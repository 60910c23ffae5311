//! Per-client token-bucket rate limiting
//!
//! A mutex-guarded map from client IP to bucket, with a background sweep
//! that evicts entries idle past a fixed timeout so the registry stays
//! bounded without blocking live request handling.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

/// Sustained rate: one request per second.
pub const REQUESTS_PER_SECOND: f64 = 1.0;
/// Burst allowance per client.
pub const BURST: f64 = 5.0;
/// Entries unseen for this long are evicted by the sweep.
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(180);
/// How often the sweep runs.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug)]
struct ClientBucket {
    tokens: f64,
    last_refill: Instant,
    last_seen: Instant,
}

/// Token-bucket registry keyed by client IP.
#[derive(Debug)]
pub struct RateLimiter {
    clients: Mutex<HashMap<IpAddr, ClientBucket>>,
    rate: f64,
    burst: f64,
    idle_timeout: Duration,
}

impl RateLimiter {
    pub fn new(rate: f64, burst: f64, idle_timeout: Duration) -> Self {
        Self {
            clients: Mutex::new(HashMap::new()),
            rate,
            burst,
            idle_timeout,
        }
    }

    /// Take one token for `client` if available. A new client starts with
    /// a full burst. `last_seen` advances even on denial so a client
    /// hammering the limit is not evicted mid-flood.
    pub async fn allow(&self, client: IpAddr) -> bool {
        let now = Instant::now();
        let mut clients = self.clients.lock().await;

        let bucket = clients.entry(client).or_insert(ClientBucket {
            tokens: self.burst,
            last_refill: now,
            last_seen: now,
        });

        let elapsed = now.duration_since(bucket.last_refill).as_secs_f64();
        bucket.tokens = (bucket.tokens + elapsed * self.rate).min(self.burst);
        bucket.last_refill = now;
        bucket.last_seen = now;

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }

    /// Remove entries idle past the timeout.
    pub async fn evict_idle(&self) {
        let now = Instant::now();
        let mut clients = self.clients.lock().await;
        let before = clients.len();
        clients.retain(|_, bucket| now.duration_since(bucket.last_seen) <= self.idle_timeout);
        let evicted = before - clients.len();
        if evicted > 0 {
            debug!(evicted, remaining = clients.len(), "evicted idle rate-limit entries");
        }
    }

    /// Number of tracked clients.
    pub async fn client_count(&self) -> usize {
        self.clients.lock().await.len()
    }

    /// Spawn the periodic eviction sweep.
    pub fn spawn_eviction_sweep(self: &Arc<Self>, every: Duration) -> JoinHandle<()> {
        let limiter = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            // the first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                limiter.evict_idle().await;
            }
        })
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(REQUESTS_PER_SECOND, BURST, IDLE_TIMEOUT)
    }
}
