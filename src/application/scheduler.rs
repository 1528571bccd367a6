// Periodic refresh loop
use crate::application::refresh_service::RefreshService;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_secs(60);

/// Stops the timer on shutdown. Cycles already spawned run to completion.
pub struct SchedulerHandle {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(());
        if let Err(e) = self.task.await {
            tracing::warn!(error = %e, "scheduler task did not exit cleanly");
        }
    }
}

/// Run a cycle immediately, then once every `period`. A tick that lands while
/// a cycle is still in flight is skipped. Manual refreshes go through
/// `RefreshService::refresh` and do not reset the timer.
pub fn start(service: RefreshService, period: Duration) -> SchedulerHandle {
    let (shutdown, mut stop) = oneshot::channel();

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!(period_secs = period.as_secs(), "scheduler started");

        loop {
            tokio::select! {
                _ = &mut stop => {
                    tracing::info!("scheduler stopped");
                    break;
                }
                _ = ticker.tick() => {
                    let service = service.clone();
                    // Detached so teardown never cuts a fetch short
                    tokio::spawn(async move {
                        service.try_refresh().await;
                    });
                }
            }
        }
    });

    SchedulerHandle { shutdown, task }
}
