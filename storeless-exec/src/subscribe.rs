// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use futures::future::{select, Either};
use futures::stream::{Stream, StreamExt};
use std::future::Future;

use crate::logging::{debug, warning};
use storeless_core::{CancellationToken, Result, StorelessError};

/// Extension trait providing a sequential async subscription for streams.
#[async_trait]
pub trait SubscribeExt<T>: Stream<Item = T> + Sized {
    /// Subscribes to the stream with an async handler, processing items one at a time.
    ///
    /// Each item's handler runs to completion before the next item is pulled,
    /// so handlers observe items in stream order.
    ///
    /// # Behavior
    ///
    /// - Runs until the stream ends or the cancellation token is triggered
    /// - A pending `next()` is raced against cancellation
    /// - Handler errors go to `on_error_callback` when provided; otherwise they
    ///   are collected and returned when the subscription ends
    ///
    /// # Arguments
    ///
    /// * `on_next_func` - Called for each item with the item and the subscription's token.
    /// * `cancellation_token` - Stops the subscription. `None` never cancels.
    /// * `on_error_callback` - Receives handler errors. `None` collects them.
    ///
    /// # Errors
    ///
    /// Returns `Err(StorelessError::MultipleErrors)` if any handler failed and no
    /// error callback was provided.
    ///
    /// # Examples
    ///
    /// ```
    /// use storeless_exec::SubscribeExt;
    /// use std::sync::{Arc, Mutex};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> anyhow::Result<()> {
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    ///
    /// futures::stream::iter(vec![1, 2, 3])
    ///     .subscribe(
    ///         {
    ///             let seen = seen.clone();
    ///             move |item, _token| {
    ///                 let seen = seen.clone();
    ///                 async move {
    ///                     seen.lock().unwrap().push(item);
    ///                     Ok::<(), std::io::Error>(())
    ///                 }
    ///             }
    ///         },
    ///         None,
    ///         None::<fn(std::io::Error)>,
    ///     )
    ///     .await?;
    ///
    /// assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
    /// # Ok(())
    /// # }
    /// ```
    async fn subscribe<F, Fut, E, OnError>(
        self,
        on_next_func: F,
        cancellation_token: Option<CancellationToken>,
        on_error_callback: Option<OnError>,
    ) -> Result<()>
    where
        F: Fn(T, CancellationToken) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<(), E>> + Send + 'static,
        OnError: Fn(E) + Send + Sync + 'static,
        T: Send + 'static,
        E: std::error::Error + Send + Sync + 'static;
}

#[async_trait]
impl<S, T> SubscribeExt<T> for S
where
    S: Stream<Item = T> + Send + Unpin + 'static,
    T: Send + 'static,
{
    async fn subscribe<F, Fut, E, OnError>(
        mut self,
        on_next_func: F,
        cancellation_token: Option<CancellationToken>,
        on_error_callback: Option<OnError>,
    ) -> Result<()>
    where
        F: Fn(T, CancellationToken) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<(), E>> + Send + 'static,
        OnError: Fn(E) + Send + Sync + 'static,
        T: Send + 'static,
        E: std::error::Error + Send + Sync + 'static,
    {
        let cancellation_token = cancellation_token.unwrap_or_default();
        let mut collected_errors = Vec::new();

        loop {
            let next = match select(cancellation_token.cancelled(), self.next()).await {
                Either::Left(((), _)) => None,
                Either::Right((item, _)) => item,
            };

            let Some(item) = next else {
                break;
            };

            if let Err(error) = on_next_func(item, cancellation_token.clone()).await {
                match &on_error_callback {
                    Some(on_error_callback) => on_error_callback(error),
                    None => {
                        warning!("subscriber handler failed: {}", error);
                        collected_errors.push(error);
                    }
                }
            }

            if cancellation_token.is_cancelled() {
                break;
            }
        }

        debug!("subscription finished");

        if collected_errors.is_empty() {
            Ok(())
        } else {
            Err(StorelessError::from_user_errors(collected_errors))
        }
    }
}
