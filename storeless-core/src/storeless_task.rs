// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Background task handle with cancellation on drop.

use crate::logging::debug;
use crate::CancellationToken;
use std::future::Future;

/// Handle to a task spawned on the tokio runtime.
///
/// The task body receives a [`CancellationToken`]; dropping the handle (or
/// calling [`cancel`](Self::cancel)) signals it. Tasks are expected to check
/// the token between units of work or race it with `cancelled()`.
///
/// ```
/// use storeless_core::StorelessTask;
///
/// # #[tokio::main]
/// # async fn main() {
/// let task = StorelessTask::spawn(|cancel| async move {
///     cancel.cancelled().await;
/// });
///
/// assert!(!task.is_cancelled());
/// drop(task); // signals the body to stop
/// # }
/// ```
#[derive(Debug)]
pub struct StorelessTask {
    cancel: CancellationToken,
}

impl StorelessTask {
    /// Spawns `f(token)` on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        tokio::spawn(f(cancel.clone()));
        Self { cancel }
    }

    /// Signals the task to stop without waiting for it.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns `true` if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for StorelessTask {
    fn drop(&mut self) {
        if !self.cancel.is_cancelled() {
            debug!("cancelling dropped task");
        }
        self.cancel.cancel();
    }
}
