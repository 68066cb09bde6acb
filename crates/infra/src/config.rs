//! Configuration loading and representation.

use std::time::Duration;

/// Runtime settings of the account service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Upper bound on the joined eligibility lookups. `None` waits indefinitely.
    pub lookup_timeout: Option<Duration>,
}

impl ServiceConfig {
    pub const LOOKUP_TIMEOUT_ENV: &'static str = "BANKING_LOOKUP_TIMEOUT_MS";

    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        let raw = std::env::var(Self::LOOKUP_TIMEOUT_ENV).ok();
        Self {
            lookup_timeout: parse_lookup_timeout(raw.as_deref()),
        }
    }

    pub fn with_lookup_timeout(mut self, lookup_timeout: Duration) -> Self {
        self.lookup_timeout = Some(lookup_timeout);
        self
    }
}

/// Unset, empty or `0` disables the timeout; garbage is logged and ignored.
fn parse_lookup_timeout(raw: Option<&str>) -> Option<Duration> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<u64>() {
        Ok(0) => None,
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(e) => {
            tracing::warn!(
                value = raw,
                error = %e,
                "{} is not a millisecond count; lookup timeout disabled",
                ServiceConfig::LOOKUP_TIMEOUT_ENV
            );
            None
        }
    }
}
