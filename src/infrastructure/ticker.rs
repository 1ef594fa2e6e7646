// Timer driving the monitoring tick handler
use crate::application::monitor_service::MonitorService;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Ticks `service` every `period`. A slow tick delays the next one instead of
/// letting missed ticks burst.
pub fn spawn_ticker(service: MonitorService, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        interval.tick().await;

        loop {
            interval.tick().await;
            if let Err(e) = service.tick().await {
                tracing::error!("Tick failed: {}", e);
            }
        }
    })
}
