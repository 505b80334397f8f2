// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pairwise synchronisation of two streams.
//!
//! [`zip_with`](ZipWithExt::zip_with) emits its n-th item only once both
//! sources have produced their n-th value. A source that runs ahead is
//! buffered (FIFO, unbounded) until the other side catches up.
//!
//! # Behavior
//!
//! - **Pairing**: values are matched strictly by position, never by recency.
//! - **Errors**: an error from either side is emitted as soon as it is polled;
//!   buffered values are kept.
//! - **Completion**: the zipped stream ends once one side has ended and its
//!   buffer is empty, because no further pair can be formed.
//!
//! # Example
//!
//! ```rust
//! use storeless_stream::ZipWithExt;
//! use storeless_test_utils::{test_channel, unwrap_stream, unwrap_value};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let (names_tx, names) = test_channel::<&'static str>();
//! let (ages_tx, ages) = test_channel::<u32>();
//!
//! let mut people = Box::pin(names.zip_with(ages, |name, age| format!("{name} is {age}")));
//!
//! names_tx.send("ada")?;
//! names_tx.send("alan")?;
//! ages_tx.send(36)?;
//!
//! assert_eq!(unwrap_value(Some(unwrap_stream(&mut people, 500).await)), "ada is 36");
//!
//! ages_tx.send(41)?;
//! assert_eq!(unwrap_value(Some(unwrap_stream(&mut people, 500).await)), "alan is 41");
//! # Ok(())
//! # }
//! ```

use futures::Stream;
use pin_project::pin_project;
use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};
use storeless_core::StreamItem;

/// Stream returned by [`ZipWithExt::zip_with`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct ZipWith<A, B, L, R, F> {
    #[pin]
    left: A,
    #[pin]
    right: B,
    left_buffer: VecDeque<L>,
    right_buffer: VecDeque<R>,
    left_done: bool,
    right_done: bool,
    combine: F,
}

impl<A, B, L, R, F> ZipWith<A, B, L, R, F> {
    fn new(left: A, right: B, combine: F) -> Self {
        Self {
            left,
            right,
            left_buffer: VecDeque::new(),
            right_buffer: VecDeque::new(),
            left_done: false,
            right_done: false,
            combine,
        }
    }
}

enum Polled<T> {
    Progress,
    Idle,
    Failed(StreamItem<T>),
}

// Polls one side once, buffering a value or marking the side as ended.
fn poll_side<S, V, O>(
    stream: Pin<&mut S>,
    buffer: &mut VecDeque<V>,
    done: &mut bool,
    cx: &mut Context<'_>,
) -> Polled<O>
where
    S: Stream<Item = StreamItem<V>>,
{
    if *done {
        return Polled::Idle;
    }

    match stream.poll_next(cx) {
        Poll::Ready(Some(StreamItem::Value(value))) => {
            buffer.push_back(value);
            Polled::Progress
        }
        Poll::Ready(Some(StreamItem::Error(e))) => Polled::Failed(StreamItem::Error(e)),
        Poll::Ready(None) => {
            *done = true;
            Polled::Progress
        }
        Poll::Pending => Polled::Idle,
    }
}

impl<A, B, L, R, F, C> Stream for ZipWith<A, B, L, R, F>
where
    A: Stream<Item = StreamItem<L>>,
    B: Stream<Item = StreamItem<R>>,
    F: FnMut(L, R) -> C,
{
    type Item = StreamItem<C>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if !this.left_buffer.is_empty() && !this.right_buffer.is_empty() {
                let pair = (this.left_buffer.pop_front(), this.right_buffer.pop_front());
                if let (Some(l), Some(r)) = pair {
                    return Poll::Ready(Some(StreamItem::Value((this.combine)(l, r))));
                }
            }

            let left_exhausted = *this.left_done && this.left_buffer.is_empty();
            let right_exhausted = *this.right_done && this.right_buffer.is_empty();
            if left_exhausted || right_exhausted {
                return Poll::Ready(None);
            }

            let left = poll_side(this.left.as_mut(), this.left_buffer, this.left_done, cx);
            if let Polled::Failed(error) = left {
                return Poll::Ready(Some(error));
            }

            let right = poll_side(this.right.as_mut(), this.right_buffer, this.right_done, cx);
            if let Polled::Failed(error) = right {
                return Poll::Ready(Some(error));
            }

            // Both sides registered the waker
            if matches!((left, right), (Polled::Idle, Polled::Idle)) {
                return Poll::Pending;
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

/// Extension trait providing the `zip_with` operator.
///
/// See the [module-level documentation](crate::zip_with) for details and examples.
pub trait ZipWithExt<L>: Stream<Item = StreamItem<L>> + Sized {
    /// Pairs the n-th value of `self` with the n-th value of `other` through `combine`.
    fn zip_with<B, R, C, F>(self, other: B, combine: F) -> ZipWith<Self, B, L, R, F>
    where
        B: Stream<Item = StreamItem<R>>,
        F: FnMut(L, R) -> C;
}

impl<S, L> ZipWithExt<L> for S
where
    S: Stream<Item = StreamItem<L>> + Sized,
{
    fn zip_with<B, R, C, F>(self, other: B, combine: F) -> ZipWith<Self, B, L, R, F>
    where
        B: Stream<Item = StreamItem<R>>,
        F: FnMut(L, R) -> C,
    {
        ZipWith::new(self, other, combine)
    }
}
