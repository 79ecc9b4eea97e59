use std::future::Future;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio::time::{Instant, sleep};

use crate::context::AppContext;
use crate::domain::tracker::{ChangeTracker, TrackerState};
use crate::workflow::poll::{CycleOutcome, run_cycle};

/// Fixed-cadence driver for the poll cycle.
///
/// Ticks land on multiples of `interval` since the Unix epoch, so a 30s
/// interval polls at :00 and :30 of every minute whenever the process was
/// started. Progress after startup is measured on the monotonic clock, and a
/// slow cycle shortens the next wait instead of pushing later ticks back.
pub struct Scheduler {
    interval: Duration,
    started: Instant,
    wall_at_start: Duration,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Self::aligned_to(interval, Instant::now(), wall_clock_since_epoch())
    }

    /// `wall_at_start` is the wall-clock time since the epoch at `started`.
    pub fn aligned_to(interval: Duration, started: Instant, wall_at_start: Duration) -> Self {
        Self {
            interval,
            started,
            wall_at_start,
        }
    }

    pub fn delay_until_next_tick(&self, now: Instant) -> Duration {
        let elapsed = self.wall_at_start + now.saturating_duration_since(self.started);
        next_delay(elapsed, self.interval)
    }

    /// Polls until `shutdown` resolves and hands back the tracker state. Cycle
    /// failures are logged and the loop carries on with the next tick.
    pub async fn run_until<F>(
        &self,
        ctx: &AppContext,
        state: TrackerState,
        shutdown: F,
    ) -> TrackerState
    where
        F: Future<Output = ()>,
    {
        let mut tracker = ChangeTracker::with_state(state);
        tokio::pin!(shutdown);

        loop {
            let delay = self.delay_until_next_tick(Instant::now());
            log::debug!("next poll in {:.1}s", delay.as_secs_f64());

            let stopped = tokio::select! {
                _ = &mut shutdown => true,
                _ = async {
                    sleep(delay).await;
                    poll_once(ctx, &mut tracker).await;
                } => false,
            };

            if stopped {
                log::info!("shutting down");
                return tracker.into_state();
            }
        }
    }
}

async fn poll_once(ctx: &AppContext, tracker: &mut ChangeTracker) {
    match run_cycle(ctx, tracker).await {
        Ok(CycleOutcome::Notified(record)) => {
            log::info!(
                "forwarded change: {}",
                record.as_str().lines().next().unwrap_or_default()
            );
        }
        Ok(CycleOutcome::Quiet) => {}
        Err(err) => log::error!("poll cycle failed: {err}"),
    }
}

fn wall_clock_since_epoch() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
}

/// Time left until the next multiple of `interval`; a full interval when
/// `elapsed` sits exactly on a boundary.
pub fn next_delay(elapsed: Duration, interval: Duration) -> Duration {
    let interval_nanos = interval.as_nanos();
    if interval_nanos == 0 {
        return Duration::ZERO;
    }
    let remainder = elapsed.as_nanos() % interval_nanos;
    let remainder = Duration::new(
        (remainder / 1_000_000_000) as u64,
        (remainder % 1_000_000_000) as u32,
    );
    interval - remainder
}
