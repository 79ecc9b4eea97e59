use crate::context::AppContext;
use crate::domain::tracker::TrackerState;
use crate::error::AppResult;
use crate::workflow::scheduler::Scheduler;

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    match ctx.change_source.server_info().await {
        Ok(info) => log::info!("p4 info:\n{}", info.trim_end()),
        Err(err) => log::warn!("p4 info failed, polling anyway: {err}"),
    }

    let interval = ctx.config.poll_interval;
    log::info!(
        "watching {} every {}s",
        ctx.config.perforce.port,
        interval.as_secs()
    );

    let state = Scheduler::new(interval)
        .run_until(ctx, TrackerState::default(), shutdown_signal())
        .await;
    log::debug!("last seen change: {:?}", state.last_seen.as_str());
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for Ctrl-C: {err}");
        std::future::pending::<()>().await;
    }
}
