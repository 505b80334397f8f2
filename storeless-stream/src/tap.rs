// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Side-effect operator for observing a pipeline without changing it.
//!
//! The tap function is only called for values. Errors pass through unchanged
//! without invoking it.
//!
//! ```
//! use storeless_stream::TapExt;
//! use storeless_test_utils::test_channel;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (tx, stream) = test_channel::<i32>();
//!
//! let mut tapped = Box::pin(stream.tap(|value| println!("observed: {value}")));
//!
//! tx.send(42).unwrap();
//! drop(tx);
//!
//! assert_eq!(tapped.next().await.unwrap().unwrap(), 42);
//! assert!(tapped.next().await.is_none());
//! # }
//! ```

use futures::{Stream, StreamExt};
use storeless_core::StreamItem;

/// Extension trait providing the [`tap`](Self::tap) operator.
pub trait TapExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Calls `f` with a reference to every value, then forwards the item.
    fn tap<F>(self, f: F) -> impl Stream<Item = StreamItem<T>> + Send
    where
        F: FnMut(&T) + Send + 'static;
}

impl<T, S> TapExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + Sized + 'static,
    T: Send + 'static,
{
    fn tap<F>(self, mut f: F) -> impl Stream<Item = StreamItem<T>> + Send
    where
        F: FnMut(&T) + Send + 'static,
    {
        self.map(move |item| {
            if let StreamItem::Value(value) = &item {
                f(value);
            }
            item
        })
    }
}
