use std::sync::RwLock;

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

const LIMIT_HEADER: &str = "x-ratelimit-limit";
const REMAINING_HEADER: &str = "x-ratelimit-remaining";
const RESET_HEADER: &str = "x-ratelimit-reset";

/// Rate-limit status reported by the API on the last response.
///
/// This is telemetry only: the client never delays or refuses requests based on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimit {
    /// Maximum number of requests allowed per window.
    pub limit: u64,
    /// Requests left in the current window.
    pub remaining: u64,
    /// When the current window resets, in seconds since the Unix epoch.
    pub reset: u64,
}

impl RateLimit {
    /// Reset time as a UTC timestamp. `None` until a reset header has been seen.
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        if self.reset == 0 {
            return None;
        }
        DateTime::<Utc>::from_timestamp(i64::try_from(self.reset).ok()?, 0)
    }

    /// Update from response headers. Each header is parsed on its own; a missing or malformed
    /// header leaves the previous value in place.
    pub(crate) fn update_from_headers(&mut self, headers: &HeaderMap) {
        update_field(&mut self.limit, headers, LIMIT_HEADER);
        update_field(&mut self.remaining, headers, REMAINING_HEADER);
        update_field(&mut self.reset, headers, RESET_HEADER);
    }
}

fn update_field(field: &mut u64, headers: &HeaderMap, name: &str) {
    let Some(value) = headers.get(name) else {
        return;
    };
    match value.to_str().ok().and_then(|s| s.trim().parse().ok()) {
        Some(parsed) => *field = parsed,
        None => {
            log::debug!(target: "github_client", header = name; "ignoring malformed rate-limit header");
        }
    }
}

/// `RateLimitStore` holds the last [`RateLimit`] snapshot and allows concurrent access for readers
/// and writers. Concurrent updates are last-write-wins.
pub(crate) struct RateLimitStore {
    snapshot: RwLock<RateLimit>,
}

impl RateLimitStore {
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(RateLimit::default()),
        }
    }

    pub fn get(&self) -> RateLimit {
        // A poisoned lock still holds a valid snapshot since updates never panic midway. Same goes
        // for `update`.
        match self.snapshot.read() {
            Ok(snapshot) => *snapshot,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub fn update(&self, headers: &HeaderMap) {
        let mut snapshot = match self.snapshot.write() {
            Ok(snapshot) => snapshot,
            Err(poisoned) => poisoned.into_inner(),
        };
        snapshot.update_from_headers(headers);
        log::trace!(target: "github_client",
                    limit = snapshot.limit,
                    remaining = snapshot.remaining,
                    reset = snapshot.reset;
                    "updated rate limit");
    }
}
