// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Delayed reply scheduling with cancellation.
//!
//! Each turn suspends exactly once: the synthesized reply is held back for
//! the configured thinking latency before it reaches the session's append
//! path. Cancelling before the delay elapses guarantees the reply is never
//! delivered; cancelling twice, or after delivery, is a no-op.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Handle to a pending scheduled delivery.
#[derive(Debug)]
pub struct TurnHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl TurnHandle {
    /// Cancel the pending delivery.
    ///
    /// Idempotent: cancelling an already cancelled or already delivered
    /// turn does nothing.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether the turn's cancellation token has fired.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait until the scheduled task has settled, either by delivering or
    /// by observing cancellation.
    pub async fn settled(self) {
        let _ = self.task.await;
    }
}

/// Schedule `work` to produce a value after `delay`, handing the result to
/// `deliver` unless `token` is cancelled first.
///
/// The token is typically a child of a session-scoped token, so tearing the
/// session down suppresses every pending delivery at once. A cancellation
/// that fires while the timer is still running wins unconditionally;
/// callers that need protection against a cancel racing the *completed*
/// timer re-check the token inside `deliver` under their own lock.
pub fn schedule<T, W, D, Fut>(
    delay: Duration,
    token: CancellationToken,
    work: W,
    deliver: D,
) -> TurnHandle
where
    T: Send + 'static,
    W: FnOnce() -> T + Send + 'static,
    D: FnOnce(T) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let guard = token.clone();
    let task = tokio::spawn(async move {
        tokio::select! {
            () = guard.cancelled() => {
                debug!("scheduled delivery cancelled before the delay elapsed");
            }
            () = tokio::time::sleep(delay) => {
                deliver(work()).await;
            }
        }
    });

    TurnHandle { token, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn capture() -> (
        mpsc::UnboundedSender<u32>,
        mpsc::UnboundedReceiver<u32>,
    ) {
        mpsc::unbounded_channel()
    }

    #[tokio::test(start_paused = true)]
    async fn delivers_after_the_delay() {
        let (tx, mut rx) = capture();
        let handle = schedule(
            Duration::from_millis(100),
            CancellationToken::new(),
            || 42,
            move |v| async move {
                let _ = tx.send(v);
            },
        );

        handle.settled().await;
        assert_eq!(rx.try_recv().ok(), Some(42));
    }

    #[tokio::test(start_paused = true)]
    async fn does_not_deliver_before_the_delay() {
        let (tx, mut rx) = capture();
        let _handle = schedule(
            Duration::from_millis(100),
            CancellationToken::new(),
            || 1,
            move |v| async move {
                let _ = tx.send(v);
            },
        );

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(rx.try_recv().is_err(), "delivery fired early");
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_before_delay_suppresses_delivery() {
        let (tx, mut rx) = capture();
        let handle = schedule(
            Duration::from_millis(100),
            CancellationToken::new(),
            || 7,
            move |v| async move {
                let _ = tx.send(v);
            },
        );

        handle.cancel();
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(rx.try_recv().is_err(), "cancelled turn must not deliver");
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_is_idempotent() {
        let (tx, mut rx) = capture();
        let handle = schedule(
            Duration::from_millis(100),
            CancellationToken::new(),
            || 7,
            move |v| async move {
                let _ = tx.send(v);
            },
        );

        handle.cancel();
        handle.cancel();
        assert!(handle.is_cancelled());
        handle.settled().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_after_delivery_is_a_noop() {
        let (tx, mut rx) = capture();
        let handle = schedule(
            Duration::from_millis(10),
            CancellationToken::new(),
            || 9,
            move |v| async move {
                let _ = tx.send(v);
            },
        );

        tokio::time::sleep(Duration::from_millis(50)).await;
        handle.cancel();

        assert_eq!(rx.try_recv().ok(), Some(9));
        assert!(rx.try_recv().is_err(), "no duplicate delivery after late cancel");
    }

    #[tokio::test(start_paused = true)]
    async fn parent_token_cancellation_propagates() {
        let parent = CancellationToken::new();
        let (tx, mut rx) = capture();
        let handle = schedule(
            Duration::from_millis(100),
            parent.child_token(),
            || 3,
            move |v| async move {
                let _ = tx.send(v);
            },
        );

        parent.cancel();
        handle.settled().await;
        assert!(rx.try_recv().is_err());
    }
}
