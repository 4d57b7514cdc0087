use serenity::all::Context;
use std::{sync::Arc, time::Duration};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::{
    config::Config,
    data::{discord::SerenityPlatform, platform::GuildPlatform},
    error::{fetch::FetchError, AppError},
    model::{report::ReconcileReport, target::GuildTarget},
    service::{price::PriceSource, reconcile::GuildReconciler},
};

/// Starts the price sync scheduler once the Discord session is ready.
///
/// Waits for the bot's cache to be ready, then fetches the price and reconciles
/// every configured guild once per `update_interval` until `shutdown` is
/// cancelled.
///
/// # Arguments
/// - `config` - Application configuration (targets, interval, precision)
/// - `ready` - Receives the serenity context once the cache is ready
/// - `source` - Price source polled each tick
/// - `shutdown` - Cancelled on process shutdown
///
/// # Returns
/// - `Ok(())` - Scheduler stopped because of shutdown
/// - `Err(AppError::InternalError)` - Discord client stopped before becoming ready
pub async fn start_scheduler(
    config: &Config,
    mut ready: watch::Receiver<Option<Context>>,
    source: Arc<dyn PriceSource>,
    shutdown: CancellationToken,
) -> Result<(), AppError> {
    tracing::info!("Waiting for Discord session to become ready");

    let Some(ctx) = wait_until_ready(&mut ready, &shutdown).await? else {
        return Ok(());
    };

    let scheduler = PriceSyncScheduler::new(
        source,
        Arc::new(SerenityPlatform::new(ctx)),
        config.targets(),
        config.update_interval,
        config.price_precision,
    );
    scheduler.run(shutdown).await;

    Ok(())
}

/// Waits until the readiness channel carries a value.
///
/// # Returns
/// - `Ok(Some(value))` - The session became ready
/// - `Ok(None)` - Shutdown was requested first
/// - `Err(AppError::InternalError)` - The sender was dropped before readiness
pub async fn wait_until_ready<T: Clone>(
    ready: &mut watch::Receiver<Option<T>>,
    shutdown: &CancellationToken,
) -> Result<Option<T>, AppError> {
    tokio::select! {
        _ = shutdown.cancelled() => Ok(None),
        value = ready.wait_for(|value| value.is_some()) => match value {
            Ok(value) => Ok((*value).clone()),
            Err(_) => Err(AppError::InternalError(
                "Discord client stopped before becoming ready".to_string(),
            )),
        },
    }
}

/// Result of a single tick that ran to completion.
#[derive(Debug)]
pub enum TickOutcome {
    /// Fetch failed; no guild was touched this tick
    FetchFailed(FetchError),
    Reconciled(ReconcileReport),
}

/// Fixed-interval fetch-then-reconcile loop.
///
/// Owns everything a tick needs, injected at construction. Ticks never overlap:
/// the next fetch starts only after the previous tick finished and the
/// interval has elapsed.
pub struct PriceSyncScheduler {
    source: Arc<dyn PriceSource>,
    platform: Arc<dyn GuildPlatform>,
    targets: Arc<[GuildTarget]>,
    interval: Duration,
    precision: usize,
}

impl PriceSyncScheduler {
    /// Creates a new PriceSyncScheduler.
    ///
    /// # Arguments
    /// - `source` - Price source polled each tick
    /// - `platform` - Connected chat session
    /// - `targets` - Guild targets in the order they are reconciled
    /// - `interval` - Sleep between the end of one tick and the start of the next
    /// - `precision` - Decimals shown in the price nickname
    pub fn new(
        source: Arc<dyn PriceSource>,
        platform: Arc<dyn GuildPlatform>,
        targets: Vec<GuildTarget>,
        interval: Duration,
        precision: usize,
    ) -> Self {
        Self {
            source,
            platform,
            targets: targets.into(),
            interval,
            precision,
        }
    }

    /// Runs ticks until `shutdown` is cancelled.
    ///
    /// Shutdown is observed before each tick and during the sleep. A tick that
    /// has started always runs to completion.
    pub async fn run(&self, shutdown: CancellationToken) {
        tracing::info!(
            "Price sync scheduler started: {} guild(s), every {}s",
            self.targets.len(),
            self.interval.as_secs()
        );

        loop {
            if shutdown.is_cancelled() {
                break;
            }

            match self.tick().await {
                Some(TickOutcome::Reconciled(report)) => tracing::info!(
                    "Price sync tick complete: {}/{} guild(s) fully updated, {} error(s)",
                    report.success_count(),
                    report.targets.len(),
                    report.error_count()
                ),
                Some(TickOutcome::FetchFailed(e)) => tracing::error!(
                    "Error fetching price, retrying in {}s: {}",
                    self.interval.as_secs(),
                    e
                ),
                None => {}
            }

            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        tracing::info!("Price sync scheduler stopped");
    }

    /// Runs one tick on its own task so a panic cannot break the loop.
    ///
    /// # Returns
    /// - `Some(TickOutcome)` - The tick ran to completion
    /// - `None` - The tick panicked; the error has been logged
    pub async fn tick(&self) -> Option<TickOutcome> {
        let source = self.source.clone();
        let platform = self.platform.clone();
        let targets = self.targets.clone();
        let precision = self.precision;

        let handle = tokio::spawn(async move {
            process_tick(source.as_ref(), platform.as_ref(), &targets, precision).await
        });

        match handle.await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                tracing::error!("Price sync tick aborted unexpectedly: {}", e);
                None
            }
        }
    }
}

async fn process_tick(
    source: &dyn PriceSource,
    platform: &dyn GuildPlatform,
    targets: &[GuildTarget],
    precision: usize,
) -> TickOutcome {
    let sample = match source.fetch().await {
        Ok(sample) => sample,
        Err(e) => return TickOutcome::FetchFailed(e),
    };

    tracing::info!(
        "Fetched price ${} ({:?}% 24h) at {}",
        sample.price_usd(),
        sample.change_24h_pct(),
        sample.fetched_at().format("%H:%M:%S")
    );

    let report = GuildReconciler::new(platform, precision)
        .apply(&sample, targets)
        .await;

    for target in &report.targets {
        tracing::debug!(
            "Guild {}: nickname updated: {}, role color: {:?}, errors: {}",
            target.guild_id,
            target.nickname_updated,
            target.role_color,
            target.errors.len()
        );
    }

    TickOutcome::Reconciled(report)
}
