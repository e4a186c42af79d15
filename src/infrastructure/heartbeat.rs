use crate::session::KeepAlive;
use crate::types::constants::HEARTBEAT_INTERVAL;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

const DEFAULT_HEARTBEAT_INTERVAL: Duration = Duration::from_millis(HEARTBEAT_INTERVAL);

/// Keeps a session alive with periodic keep-alive requests until cancelled
pub struct HeartbeatManager<S: ?Sized> {
    interval: Duration,
    session: Weak<S>,
}

impl<S> HeartbeatManager<S>
where
    S: KeepAlive + ?Sized + 'static,
{
    pub fn new(session: Weak<S>) -> Self {
        Self {
            interval: DEFAULT_HEARTBEAT_INTERVAL,
            session,
        }
    }

    /// Overrides the tick period. A zero interval is ignored.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        if interval.is_zero() {
            tracing::warn!(
                "[Heartbeat] Ignoring zero interval, keeping {:?}",
                self.interval
            );
        } else {
            self.interval = interval;
        }
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Spawns the heartbeat task; it runs until `cancel` fires
    pub fn spawn(self, cancel: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(self.run(cancel))
    }

    /// Runs the heartbeat loop on the current task.
    ///
    /// The first keep-alive goes out one full interval after the call. A failed
    /// keep-alive is logged and the loop carries on; only `cancel` ends it.
    pub async fn run(self, cancel: CancellationToken) {
        let mut ticker = time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!("[Heartbeat] Started, interval {:?}", self.interval);

        loop {
            tokio::select! {
                biased;

                () = cancel.cancelled() => {
                    tracing::info!("[Heartbeat] Stopped");
                    return;
                }
                _ = ticker.tick() => self.beat().await,
            }
        }
    }

    async fn beat(&self) {
        let Some(session) = self.session.upgrade() else {
            tracing::warn!("[Heartbeat] Session dropped, skipping keep-alive");
            return;
        };

        match session.keep_alive().await {
            Ok(ack) => {
                tracing::debug!(
                    "KeepAlive heartbeat acknowledged for session {}",
                    ack.session_id
                );
            }
            Err(e) => {
                tracing::error!("[Heartbeat] Keep-alive failed: {}", e);
            }
        }
    }
}

/// Starts a heartbeat for `session` at the default interval.
///
/// Returns immediately; the loop holds only a weak reference to the session
/// and ends when `cancel` fires.
pub fn start_heartbeat<S>(session: &Arc<S>, cancel: CancellationToken) -> JoinHandle<()>
where
    S: KeepAlive + ?Sized + 'static,
{
    HeartbeatManager::new(Arc::downgrade(session)).spawn(cancel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{KeepAliveAck, Result, VideoRoomError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TICK: Duration = Duration::from_secs(30);

    #[derive(Default)]
    struct MockSession {
        calls: AtomicUsize,
        fail_on: Vec<usize>,
        latency: Duration,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
        completed: AtomicUsize,
    }

    impl MockSession {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl KeepAlive for MockSession {
        async fn keep_alive(&self) -> Result<KeepAliveAck> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(running, Ordering::SeqCst);

            if !self.latency.is_zero() {
                time::sleep(self.latency).await;
            }

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            self.completed.fetch_add(1, Ordering::SeqCst);

            if self.fail_on.contains(&call) {
                Err(VideoRoomError::Session(format!("keep-alive {call} rejected")))
            } else {
                Ok(KeepAliveAck::new(1, call.to_string()))
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn heartbeat_sends_one_keepalive_per_interval() {
        let session = Arc::new(MockSession::default());
        let cancel = CancellationToken::new();

        let handle = HeartbeatManager::new(Arc::downgrade(&session))
            .with_interval(TICK)
            .spawn(cancel.clone());

        time::sleep(TICK * 5 / 2).await;
        cancel.cancel();
        handle.await.unwrap();

        assert_eq!(session.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn heartbeat_stops_sending_after_cancel() {
        let session = Arc::new(MockSession::default());
        let cancel = CancellationToken::new();

        let handle = start_heartbeat(&session, cancel.clone());
        time::sleep(DEFAULT_HEARTBEAT_INTERVAL * 5 / 2).await;
        cancel.cancel();
        handle.await.unwrap();

        time::sleep(DEFAULT_HEARTBEAT_INTERVAL * 10).await;
        assert_eq!(session.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn heartbeat_survives_failed_keepalive() {
        let session = Arc::new(MockSession {
            fail_on: vec![1],
            ..Default::default()
        });
        let cancel = CancellationToken::new();

        let handle = HeartbeatManager::new(Arc::downgrade(&session))
            .with_interval(TICK)
            .spawn(cancel.clone());

        time::sleep(TICK * 7 / 2).await;
        cancel.cancel();
        handle.await.unwrap();

        assert_eq!(session.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn heartbeat_cancelled_before_first_tick() {
        let session = Arc::new(MockSession::default());
        let cancel = CancellationToken::new();

        let handle = start_heartbeat(&session, cancel.clone());
        cancel.cancel();
        handle.await.unwrap();

        assert_eq!(session.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn heartbeat_does_not_overlap_keepalives() {
        // each call takes longer than the interval
        let session = Arc::new(MockSession {
            latency: TICK * 2,
            ..Default::default()
        });
        let cancel = CancellationToken::new();

        let handle = HeartbeatManager::new(Arc::downgrade(&session))
            .with_interval(TICK)
            .spawn(cancel.clone());

        time::sleep(TICK * 10).await;
        cancel.cancel();
        handle.await.unwrap();

        assert!(session.calls() >= 2);
        assert_eq!(session.max_in_flight.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_does_not_interrupt_inflight_keepalive() {
        let session = Arc::new(MockSession {
            latency: TICK / 2,
            ..Default::default()
        });
        let cancel = CancellationToken::new();

        let handle = HeartbeatManager::new(Arc::downgrade(&session))
            .with_interval(TICK)
            .spawn(cancel.clone());

        // the first call is in flight between TICK and TICK * 1.5
        time::sleep(TICK + TICK / 4).await;
        cancel.cancel();
        handle.await.unwrap();

        assert_eq!(session.calls(), 1);
        assert_eq!(session.completed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn heartbeat_outlives_dropped_session_until_cancelled() {
        let session = Arc::new(MockSession::default());
        let cancel = CancellationToken::new();

        let handle = HeartbeatManager::new(Arc::downgrade(&session))
            .with_interval(TICK)
            .spawn(cancel.clone());
        drop(session);

        time::sleep(TICK * 3).await;
        assert!(!handle.is_finished());

        cancel.cancel();
        handle.await.unwrap();
    }

    #[test]
    fn zero_interval_is_ignored() {
        let session: Arc<MockSession> = Arc::new(MockSession::default());
        let manager = HeartbeatManager::new(Arc::downgrade(&session)).with_interval(Duration::ZERO);
        assert_eq!(manager.interval(), DEFAULT_HEARTBEAT_INTERVAL);
    }
}
