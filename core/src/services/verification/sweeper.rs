//! Periodic removal of abandoned verification records
//!
//! Records are otherwise only removed lazily, on a successful or expired
//! verification. Addresses that request a code and never come back would
//! stay in memory forever; the sweeper bounds that growth.

use std::sync::Arc;

use tk_shared::config::SweeperConfig;
use tracing::{info, warn};

use super::clock::Clock;
use super::service::CodeVerificationService;
use super::store::VerificationStore;

/// Background sweeper for a shared verification service
pub struct VerificationSweeper<S, K> {
    service: Arc<CodeVerificationService<S, K>>,
    config: SweeperConfig,
}

impl<S, K> VerificationSweeper<S, K>
where
    S: VerificationStore + 'static,
    K: Clock + 'static,
{
    pub fn new(service: Arc<CodeVerificationService<S, K>>, config: SweeperConfig) -> Self {
        Self { service, config }
    }

    /// Run a single sweep, returning the number of records removed
    pub fn run_once(&self) -> usize {
        let removed = self.service.sweep_expired();
        info!(
            removed,
            remaining = self.service.tracked_emails(),
            event = "verification_sweep",
            "Verification sweep completed"
        );
        removed
    }

    /// Spawn the sweep loop on the current tokio runtime
    ///
    /// Does nothing when sweeping is disabled.
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Verification sweeper is disabled; expired records are removed lazily");
            return;
        }

        let period = std::time::Duration::from_secs(self.config.interval_seconds.max(1));

        tokio::spawn(async move {
            info!(
                interval_seconds = self.config.interval_seconds,
                "Verification sweeper started"
            );

            let mut timer = tokio::time::interval(period);
            // The first tick completes immediately.
            timer.tick().await;

            loop {
                timer.tick().await;
                self.run_once();
            }
        });
    }
}
