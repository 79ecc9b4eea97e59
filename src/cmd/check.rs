use crate::context::AppContext;
use crate::domain::tracker::ChangeTracker;
use crate::error::AppResult;
use crate::workflow::poll::{CycleOutcome, run_cycle};

/// Runs a single cycle right away against an empty tracker.
pub async fn run(ctx: &AppContext) -> AppResult<CycleOutcome> {
    let mut tracker = ChangeTracker::new();
    run_cycle(ctx, &mut tracker).await
}
