// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stream wrapper that injects a `StreamItem::Error` at a chosen position.

use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};
use storeless_core::{StorelessError, StreamItem};

/// Wraps plain values in `StreamItem::Value` and injects one error.
///
/// ```rust
/// use storeless_test_utils::ErrorInjectingStream;
/// use storeless_core::StreamItem;
/// use futures::{stream, StreamExt};
///
/// # #[tokio::main]
/// # async fn main() {
/// let mut items = ErrorInjectingStream::new(stream::iter(vec![1, 2]), 1);
///
/// assert!(matches!(items.next().await, Some(StreamItem::Value(1))));
/// assert!(matches!(items.next().await, Some(StreamItem::Error(_))));
/// assert!(matches!(items.next().await, Some(StreamItem::Value(2))));
/// # }
/// ```
pub struct ErrorInjectingStream<S> {
    inner: S,
    inject_error_at: Option<usize>,
    count: usize,
}

impl<S> ErrorInjectingStream<S> {
    /// Injects an error before the item at `inject_error_at` (0-indexed).
    pub fn new(inner: S, inject_error_at: usize) -> Self {
        Self {
            inner,
            inject_error_at: Some(inject_error_at),
            count: 0,
        }
    }
}

impl<S> Stream for ErrorInjectingStream<S>
where
    S: Stream + Unpin,
{
    type Item = StreamItem<S::Item>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.inject_error_at == Some(self.count) {
            self.inject_error_at = None;
            self.count += 1;
            return Poll::Ready(Some(StreamItem::Error(StorelessError::stream_error(
                "Injected test error",
            ))));
        }

        match Pin::new(&mut self.inner).poll_next(cx) {
            Poll::Ready(Some(item)) => {
                self.count += 1;
                Poll::Ready(Some(StreamItem::Value(item)))
            }
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::{stream, StreamExt};

    #[tokio::test]
    async fn test_error_injecting_stream_injects_error_at_start() {
        let mut items = ErrorInjectingStream::new(stream::iter(vec!['a']), 0);

        assert!(matches!(
            items.next().await,
            Some(StreamItem::Error(StorelessError::StreamProcessingError { .. }))
        ));
        assert!(matches!(items.next().await, Some(StreamItem::Value('a'))));
        assert!(items.next().await.is_none());
    }

    #[tokio::test]
    async fn test_error_injecting_stream_position_past_the_end_never_injects() {
        let items = ErrorInjectingStream::new(stream::iter(vec![1, 2]), 5);
        let collected: Vec<_> = items.collect().await;

        assert_eq!(collected, vec![StreamItem::Value(1), StreamItem::Value(2)]);
    }
}
