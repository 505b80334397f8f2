// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension trait providing the `scan_state` operator.
//!
//! `scan_state` keeps an accumulator alive for the whole life of the stream
//! and emits one output for every input value. Unlike `Iterator::fold` it
//! never produces a single final result: it keeps waiting for the next input
//! until the source ends.
//!
//! # Behavior
//!
//! - **Emits per item**: one output per input value, even when the
//!   accumulator did not change.
//! - **Type transformation**: the output type can differ from the input type.
//! - **Error preserving**: errors are forwarded without touching the accumulator.
//!
//! # Example: a reducer over actions
//!
//! ```rust
//! use storeless_stream::ScanStateExt;
//! use storeless_test_utils::{test_channel, unwrap_stream, unwrap_value};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! #[derive(Debug)]
//! enum Counter { Increment, Reset }
//!
//! let (tx, stream) = test_channel::<Counter>();
//! let mut counts = Box::pin(stream.scan_state(0u32, |count: &mut u32, action: &Counter| {
//!     match action {
//!         Counter::Increment => *count += 1,
//!         Counter::Reset => *count = 0,
//!     }
//!     *count
//! }));
//!
//! tx.send(Counter::Increment)?;
//! tx.send(Counter::Increment)?;
//! tx.send(Counter::Reset)?;
//!
//! assert_eq!(unwrap_value(Some(unwrap_stream(&mut counts, 500).await)), 1);
//! assert_eq!(unwrap_value(Some(unwrap_stream(&mut counts, 500).await)), 2);
//! assert_eq!(unwrap_value(Some(unwrap_stream(&mut counts, 500).await)), 0);
//! # Ok(())
//! # }
//! ```

use futures::{Stream, StreamExt};
use parking_lot::Mutex;
use std::sync::Arc;
use storeless_core::StreamItem;

/// Extension trait providing the `scan_state` operator for streams.
///
/// See the [module-level documentation](crate::scan_state) for details and examples.
pub trait ScanStateExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Folds every input value into `initial`, emitting `accumulator`'s result each time.
    fn scan_state<Out, Acc, F>(
        self,
        initial: Acc,
        accumulator: F,
    ) -> impl Stream<Item = StreamItem<Out>> + Send
    where
        Acc: Send + 'static,
        Out: Send + 'static,
        F: FnMut(&mut Acc, &T) -> Out + Send + 'static;
}

impl<T, S> ScanStateExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + Sized + 'static,
    T: Send + 'static,
{
    fn scan_state<Out, Acc, F>(
        self,
        initial: Acc,
        accumulator: F,
    ) -> impl Stream<Item = StreamItem<Out>> + Send
    where
        Acc: Send + 'static,
        Out: Send + 'static,
        F: FnMut(&mut Acc, &T) -> Out + Send + 'static,
    {
        let state = Arc::new(Mutex::new((initial, accumulator)));

        self.map(move |item| match item {
            StreamItem::Value(value) => {
                let mut guard = state.lock();
                let (acc, f) = &mut *guard;
                StreamItem::Value(f(acc, &value))
            }
            // Propagate error without affecting accumulator state
            StreamItem::Error(e) => StreamItem::Error(e),
        })
    }
}
