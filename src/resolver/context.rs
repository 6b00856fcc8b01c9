// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cancellation and deadline for a single resolution

use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Why a bounded operation did not complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupted {
    Cancelled,
    DeadlineExceeded,
}

/// Bounds the blocking part of a resolution (the secret fetch).
///
/// Cloning shares the cancellation token, so cancelling any clone cancels
/// every resolution using it.
#[derive(Debug, Clone, Default)]
pub struct ResolveContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl ResolveContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing token, e.g. a child of the controller's shutdown token
    pub fn with_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Drive `fut` until it completes, the token is cancelled or the deadline passes.
    /// Cancellation wins if it is already signalled.
    pub async fn run<F>(&self, fut: F) -> Result<F::Output, Interrupted>
    where
        F: Future,
    {
        let bounded = async {
            match self.deadline {
                Some(deadline) => tokio::time::timeout_at(deadline, fut)
                    .await
                    .map_err(|_| Interrupted::DeadlineExceeded),
                None => Ok(fut.await),
            }
        };

        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(Interrupted::Cancelled),
            res = bounded => res,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_completes() {
        let ctx = ResolveContext::new();
        assert_eq!(ctx.run(async { 42 }).await, Ok(42));
    }

    #[tokio::test]
    async fn test_run_cancelled_before_start() {
        let ctx = ResolveContext::new();
        ctx.cancel();

        assert_eq!(ctx.run(async { 42 }).await, Err(Interrupted::Cancelled));
    }

    #[tokio::test]
    async fn test_run_cancelled_while_pending() {
        let ctx = ResolveContext::new();
        let token = ctx.token();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            token.cancel();
        });

        let res = ctx.run(std::future::pending::<()>()).await;
        assert_eq!(res, Err(Interrupted::Cancelled));
    }

    #[tokio::test]
    async fn test_run_deadline_exceeded() {
        let ctx = ResolveContext::new().with_timeout(Duration::from_millis(20));

        let res = ctx.run(std::future::pending::<()>()).await;
        assert_eq!(res, Err(Interrupted::DeadlineExceeded));
    }

    #[tokio::test]
    async fn test_parent_token_cancels_run() {
        let shutdown = CancellationToken::new();
        let ctx = ResolveContext::with_token(shutdown.child_token());
        assert!(ctx.deadline().is_none());

        shutdown.cancel();

        assert!(ctx.is_cancelled());
        assert_eq!(ctx.run(async { 42 }).await, Err(Interrupted::Cancelled));
    }

    #[tokio::test]
    async fn test_deadline_set_by_timeout() {
        let before = Instant::now();
        let ctx = ResolveContext::new().with_timeout(Duration::from_secs(5));

        let deadline = ctx.deadline().unwrap();
        assert!(deadline >= before + Duration::from_secs(5));
        assert!(deadline <= Instant::now() + Duration::from_secs(5));

        let fixed = before + Duration::from_secs(1);
        assert_eq!(ResolveContext::new().with_deadline(fixed).deadline(), Some(fixed));
    }

    #[test]
    fn test_clones_share_token() {
        let ctx = ResolveContext::new();
        let clone = ctx.clone();
        clone.cancel();

        assert!(ctx.is_cancelled());
    }
}
