// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the storeless workspace.
//!
//! Production pipelines are assembled from consuming stream operators, while
//! tests need to push values imperatively. The channels here bridge the two:
//! the sender stays in the test, the receiving half is a `StreamItem` stream
//! ready for the operators.
//!
//! ```rust
//! use storeless_test_utils::{assert_no_element_emitted, test_channel, unwrap_stream, unwrap_value};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let (tx, mut stream) = test_channel::<u8>();
//!
//! assert_no_element_emitted(&mut stream, 10).await;
//! tx.send(7)?;
//! assert_eq!(unwrap_value(Some(unwrap_stream(&mut stream, 500).await)), 7);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error_injection;
pub mod helpers;

use futures::{Stream, StreamExt};
use storeless_core::StreamItem;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use error_injection::ErrorInjectingStream;
pub use helpers::{assert_no_element_emitted, collect_values, unwrap_stream, unwrap_value};

/// Creates a test channel that wraps every sent value in `StreamItem::Value`.
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T>`, for error propagation tests.
///
/// ```rust
/// use storeless_test_utils::test_channel_with_errors;
/// use storeless_core::{StorelessError, StreamItem};
/// use futures::StreamExt;
///
/// # #[tokio::main]
/// # async fn main() {
/// let (tx, mut stream) = test_channel_with_errors();
///
/// tx.send(StreamItem::Value(42)).unwrap();
/// tx.send(StreamItem::Error(StorelessError::stream_error("test error"))).unwrap();
///
/// assert!(stream.next().await.unwrap().is_value());
/// assert!(stream.next().await.unwrap().is_error());
/// # }
/// ```
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, UnboundedReceiverStream::new(rx))
}
