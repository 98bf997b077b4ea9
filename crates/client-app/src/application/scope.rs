//! Request scoping for page-owned async work.
//!
//! Each page holds one `RequestScope`; when the page goes away the scope is
//! cancelled and any in-flight request result is dropped instead of being
//! written into state that no longer has an owner.

use std::future::Future;

use futures_util::future::{select, Either};
use futures_util::pin_mut;
use tokio_util::sync::CancellationToken;

/// Cancellation handle shared by every request a page starts.
#[derive(Debug, Clone, Default)]
pub struct RequestScope {
    token: CancellationToken,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel every request started through this scope, now and later.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Drive `fut` unless the scope is cancelled first.
    ///
    /// Returns `None` when cancelled, including the case where the future
    /// finished but the scope was cancelled before the caller got the value.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        if self.is_cancelled() {
            return None;
        }

        let cancelled = self.token.cancelled();
        pin_mut!(fut);
        pin_mut!(cancelled);

        match select(fut, cancelled).await {
            Either::Left((output, _)) if !self.is_cancelled() => Some(output),
            Either::Left(_) => None,
            Either::Right(_) => {
                tracing::debug!("Request dropped: owning view was torn down");
                None
            }
        }
    }
}
