// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Distinct-until-changed operator that filters consecutive duplicates.
//!
//! Views derived from application state often stay the same across actions
//! (toggling a hidden todo does not change the "Completed" link). This
//! operator keeps such a view from re-rendering.

use futures::future::ready;
use futures::{Stream, StreamExt};
use storeless_core::StreamItem;

/// Extension trait providing the
/// [`distinct_until_changed`](Self::distinct_until_changed) operator.
///
/// ```rust
/// use storeless_stream::DistinctUntilChangedExt;
/// use storeless_core::StreamItem;
/// use futures::{stream, StreamExt};
///
/// # #[tokio::main]
/// # async fn main() {
/// let values = stream::iter([1, 1, 2, 2, 1].map(StreamItem::Value)).distinct_until_changed();
///
/// let collected: Vec<_> = values.collect().await;
/// assert_eq!(
///     collected,
///     vec![StreamItem::Value(1), StreamItem::Value(2), StreamItem::Value(1)]
/// );
/// # }
/// ```
pub trait DistinctUntilChangedExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Emits a value only when it differs from the previously emitted one.
    fn distinct_until_changed(self) -> impl Stream<Item = StreamItem<T>> + Send;
}

impl<T, S> DistinctUntilChangedExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + Sized + 'static,
    T: Clone + PartialEq + Send + 'static,
{
    fn distinct_until_changed(self) -> impl Stream<Item = StreamItem<T>> + Send {
        let mut last: Option<T> = None;

        self.filter_map(move |item| {
            let emitted = match item {
                StreamItem::Value(value) => {
                    if last.as_ref() == Some(&value) {
                        None
                    } else {
                        last = Some(value.clone());
                        Some(StreamItem::Value(value))
                    }
                }
                StreamItem::Error(e) => Some(StreamItem::Error(e)),
            };
            ready(emitted)
        })
    }
}
