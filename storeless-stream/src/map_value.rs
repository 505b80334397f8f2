// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Value-only mapping for `StreamItem` streams.

use futures::{Stream, StreamExt};
use storeless_core::StreamItem;

/// Extension trait providing the [`map_value`](Self::map_value) operator.
///
/// ```rust
/// use storeless_stream::MapValueExt;
/// use storeless_core::StreamItem;
/// use futures::{stream, StreamExt};
///
/// # #[tokio::main]
/// # async fn main() {
/// let lengths = stream::iter(vec![StreamItem::Value("abc"), StreamItem::Value("de")])
///     .map_value(str::len);
///
/// let collected: Vec<_> = lengths.collect().await;
/// assert_eq!(collected, vec![StreamItem::Value(3), StreamItem::Value(2)]);
/// # }
/// ```
pub trait MapValueExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Applies `f` to every value; errors pass through.
    fn map_value<U, F>(self, f: F) -> impl Stream<Item = StreamItem<U>> + Send
    where
        U: Send + 'static,
        F: FnMut(T) -> U + Send + 'static;
}

impl<T, S> MapValueExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + Sized + 'static,
    T: Send + 'static,
{
    fn map_value<U, F>(self, mut f: F) -> impl Stream<Item = StreamItem<U>> + Send
    where
        U: Send + 'static,
        F: FnMut(T) -> U + Send + 'static,
    {
        self.map(move |item| item.map(&mut f))
    }
}
