//! Asset version tokens for cache-busting.
//!
//! A version token is appended to static asset URLs (`main.css?v=<token>`).
//! Tokens are stored per category as reserved entries in their own
//! namespace, created on first read and replaced on refresh.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use super::CacheTools;
use crate::error::Result;
use crate::store::Expiry;

/// Namespace holding asset version tokens.
pub const ASSET_VERSION_NAMESPACE: &str = "cache-control:asset-versions";

/// Category used when the caller does not name one.
pub const DEFAULT_CATEGORY: &str = "default";

/// Computes new version tokens.
///
/// Implementations only compute a value; persisting it is up to the caller.
pub trait TokenSource: Send + Sync {
    /// Produce a token for `category`.
    fn generate(&self, category: &str) -> String;
}

impl<F> TokenSource for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn generate(&self, category: &str) -> String {
        self(category)
    }
}

/// Last token issued by [`ClockTokenSource`] in this process.
static LAST_CLOCK_TOKEN: AtomicI64 = AtomicI64::new(0);

/// Tokens from the current time, in microseconds since the Unix epoch.
///
/// Tokens are strictly increasing within a process, so a token is never
/// handed out twice even when two are requested in the same microsecond.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockTokenSource;

impl TokenSource for ClockTokenSource {
    fn generate(&self, _category: &str) -> String {
        let now = Utc::now().timestamp_micros();
        let mut last = LAST_CLOCK_TOKEN.load(Ordering::Relaxed);
        loop {
            let next = now.max(last.saturating_add(1));
            match LAST_CLOCK_TOKEN.compare_exchange_weak(
                last,
                next,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return next.to_string(),
                Err(actual) => last = actual,
            }
        }
    }
}

/// Make `candidate` differ from the token currently stored.
fn distinct_from(candidate: String, current: Option<&str>) -> String {
    if current != Some(candidate.as_str()) {
        return candidate;
    }
    match candidate.parse::<i64>() {
        Ok(n) => n.saturating_add(1).to_string(),
        Err(_) => format!("{}.1", candidate),
    }
}

impl CacheTools<'_> {
    /// Get the version token for `category`, creating it on first use.
    ///
    /// An existing token is returned as-is without logging. On a miss the
    /// new token is saved and then read back, so the stored value is what
    /// every caller sees even if two misses race.
    pub fn get_version(&self, category: &str) -> Result<String> {
        if let Some(token) = self.store.get_for(ASSET_VERSION_NAMESPACE, category)? {
            return Ok(token);
        }

        let token = self.tokens.generate(category);
        self.store
            .save_for(ASSET_VERSION_NAMESPACE, category, &token, Expiry::Reserved)?;
        self.note(format!(
            "Asset version for `{}` updated to {}",
            category, token
        ))?;

        Ok(self
            .store
            .get_for(ASSET_VERSION_NAMESPACE, category)?
            .unwrap_or(token))
    }

    /// Replace the version token for `category`.
    ///
    /// Without an explicit token a new one is generated; it always differs
    /// from the token stored before the call.
    pub fn refresh_version(&self, category: &str, explicit_token: Option<&str>) -> Result<String> {
        let token = match explicit_token {
            Some(token) => token.to_string(),
            None => {
                let current = self.store.get_for(ASSET_VERSION_NAMESPACE, category)?;
                distinct_from(self.tokens.generate(category), current.as_deref())
            }
        };

        self.store
            .save_for(ASSET_VERSION_NAMESPACE, category, &token, Expiry::Reserved)?;
        self.note(format!(
            "Asset version for `{}` updated to {}",
            category, token
        ))?;

        Ok(token)
    }

    /// Delete every stored asset version.
    pub fn clear_all_versions(&self) -> Result<usize> {
        let removed = self.store.delete_for(ASSET_VERSION_NAMESPACE, None)?;
        tracing::debug!("removed {} asset version entries", removed);
        self.note("Cleared all asset versions")?;
        Ok(removed)
    }
}
