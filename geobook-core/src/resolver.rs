// Retry decorator around the geocoding gateway.
//
// Transient gateway failures are retried with bounded exponential
// backoff and never surface individually. A "no match" reply from
// the provider is final and not retried.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use thiserror::Error;

use crate::gateways::geocode::{GeoCodingError, GeoCodingGateway};
use geobook_entities::{address::Address, geo::MapPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    /// Delay before the next attempt after `failed_attempts` (>= 1)
    /// unsuccessful calls: `min(base_delay * 2^(n-1), max_delay)`.
    pub fn delay_before_retry(&self, failed_attempts: u32) -> Duration {
        debug_assert!(failed_attempts >= 1);
        let factor = 2u32.saturating_pow(failed_attempts.saturating_sub(1));
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 20,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(25),
        }
    }
}

/// Pluggable wait primitive, so that the backoff behavior can be
/// verified with a recording fake instead of a real clock.
pub trait Sleep {
    fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Sleep for ThreadSleep {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Shared flag to abort a pending resolution between retry attempts.
///
/// Cancellation is only honored between attempts, never mid-attempt,
/// to avoid wasted backoff waits without interrupting the gateway.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("no match found for the given address")]
    NotFound,
    #[error("geocoding failed after {attempts} attempts")]
    Failed {
        attempts: u32,
        #[source]
        last_error: GeoCodingError,
    },
    #[error("the resolution was cancelled")]
    Cancelled,
}

#[derive(Debug)]
pub struct Resolver<G, S = ThreadSleep> {
    gateway: G,
    policy: RetryPolicy,
    sleep: S,
}

impl<G> Resolver<G> {
    pub fn new(gateway: G, policy: RetryPolicy) -> Self {
        Self::with_sleep(gateway, policy, ThreadSleep)
    }
}

impl<G, S> Resolver<G, S> {
    pub fn with_sleep(gateway: G, policy: RetryPolicy, sleep: S) -> Self {
        debug_assert!(policy.max_attempts >= 1);
        Self {
            gateway,
            policy,
            sleep,
        }
    }

    pub const fn policy(&self) -> &RetryPolicy {
        &self.policy
    }
}

impl<G, S> Resolver<G, S>
where
    G: GeoCodingGateway,
    S: Sleep,
{
    /// Resolves the address, blocking the calling flow for the
    /// cumulative backoff waits.
    ///
    /// The caller must not hold any shared lock or storage connection
    /// across this call.
    pub fn resolve(
        &self,
        addr: &Address,
        cancel: &CancellationFlag,
    ) -> Result<MapPoint, ResolutionError> {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut last_error = None;
        for attempt in 1..=max_attempts {
            if attempt > 1 {
                if cancel.is_cancelled() {
                    return Err(ResolutionError::Cancelled);
                }
                self.sleep.sleep(self.policy.delay_before_retry(attempt - 1));
            }
            match self.gateway.resolve_address_lat_lng(addr) {
                Ok(Some(pos)) => return Ok(pos),
                Ok(None) => return Err(ResolutionError::NotFound),
                Err(err) => {
                    log::warn!("Geocoding attempt {attempt} of {max_attempts} failed: {err}");
                    last_error = Some(err);
                }
            }
        }
        // Unreachable without at least one gateway error.
        let last_error = last_error
            .unwrap_or_else(|| GeoCodingError(anyhow::anyhow!("no attempt has been made")));
        Err(ResolutionError::Failed {
            attempts: max_attempts,
            last_error,
        })
    }
}
