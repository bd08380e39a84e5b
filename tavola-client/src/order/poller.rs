//! Order list poller
//!
//! Re-fetches the order list on a fixed period while the order view is open.
//! Results are published on a `watch` channel, so a slow view only ever sees
//! the latest list. The task stops when the poller is cancelled, dropped, or
//! when every receiver is gone.

use std::sync::Arc;
use std::time::Duration;

use shared::models::Order;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;

use crate::api::RestaurantApi;

/// Handle to a running poll task
///
/// Dropping the handle cancels the task.
pub struct OrderPoller {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl OrderPoller {
    /// Start polling `api` every `period`
    ///
    /// The first poll happens one period from now; the view is expected to
    /// load the list itself when it opens.
    pub fn spawn<A>(api: Arc<A>, period: Duration) -> (Self, watch::Receiver<Vec<Order>>)
    where
        A: RestaurantApi + ?Sized + 'static,
    {
        let token = CancellationToken::new();
        let (tx, rx) = watch::channel(Vec::new());
        let handle = tokio::spawn(run(api, period, tx, token.clone()));
        (
            Self {
                token,
                handle: Some(handle),
            },
            rx,
        )
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancel and wait for the task to finish
    pub async fn shutdown(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take()
            && let Err(e) = handle.await
        {
            tracing::error!("Order poller task failed: {:?}", e);
        }
    }
}

impl Drop for OrderPoller {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

async fn run<A>(
    api: Arc<A>,
    period: Duration,
    tx: watch::Sender<Vec<Order>>,
    token: CancellationToken,
) where
    A: RestaurantApi + ?Sized,
{
    tracing::info!(period_secs = period.as_secs(), "Order poller started");
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = ticker.tick() => {
                let result = tokio::select! {
                    _ = token.cancelled() => break,
                    result = api.list_orders() => result,
                };
                match result {
                    Ok(orders) => {
                        tracing::debug!(count = orders.len(), "Polled orders");
                        if tx.send(orders).is_err() {
                            tracing::debug!("No order view left, stopping poller");
                            break;
                        }
                    }
                    // Next tick retries
                    Err(e) => tracing::warn!(error = %e, "Order poll failed"),
                }
            }
        }
    }

    tracing::info!("Order poller stopped");
}
