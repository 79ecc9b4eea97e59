use crate::context::AppContext;
use crate::domain::change::ChangeRecord;
use crate::domain::tracker::ChangeTracker;
use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Nothing new, or the new change is still pending.
    Quiet,
    Notified(ChangeRecord),
}

/// One fetch → decide → notify pass.
///
/// A failed fetch leaves the tracker untouched. A failed send happens after the
/// tracker already recorded the change, so that change is not sent again.
pub async fn run_cycle(ctx: &AppContext, tracker: &mut ChangeTracker) -> AppResult<CycleOutcome> {
    let current = ctx.change_source.fetch_latest().await?;

    let Some(record) = tracker.observe(current) else {
        if tracker.last_seen().is_pending() {
            log::debug!("latest change is pending, skipping");
        } else {
            log::debug!("no new change");
        }
        return Ok(CycleOutcome::Quiet);
    };

    ctx.notifier.notify(&record).await?;
    Ok(CycleOutcome::Notified(record))
}
