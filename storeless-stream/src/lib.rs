// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stream operators used to assemble a storeless state pipeline.
//!
//! Every operator works on streams of [`StreamItem<T>`](storeless_core::StreamItem)
//! and passes errors through unchanged.
//!
//! | Operator | Role in the pipeline |
//! |----------|----------------------|
//! | [`scan_state`](ScanStateExt::scan_state) | folds actions into a slice of state, one output per action |
//! | [`zip_with`](ZipWithExt::zip_with) | pairs the n-th output of two reducers |
//! | [`map_value`](MapValueExt::map_value) | derives render data from state |
//! | [`tap`](TapExt::tap) | observes values for logging |
//! | [`distinct_until_changed`](DistinctUntilChangedExt::distinct_until_changed) | suppresses repeated renders |
//!
//! ```
//! use storeless_stream::prelude::*;
//! use storeless_core::{Subject, StreamItem};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let actions = Subject::<i32>::new();
//!
//! let sums = actions.subscribe().unwrap().scan_state(0, |acc: &mut i32, x: &i32| {
//!     *acc += x;
//!     *acc
//! });
//! let counts = actions.subscribe().unwrap().scan_state(0usize, |n: &mut usize, _: &i32| {
//!     *n += 1;
//!     *n
//! });
//! let mut combined = Box::pin(sums.zip_with(counts, |sum, count| (sum, count)));
//!
//! actions.next(5).unwrap();
//! actions.next(7).unwrap();
//!
//! assert_eq!(combined.next().await, Some(StreamItem::Value((5, 1))));
//! assert_eq!(combined.next().await, Some(StreamItem::Value((12, 2))));
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod distinct_until_changed;
pub mod map_value;
pub mod prelude;
pub mod scan_state;
pub mod tap;
pub mod zip_with;

pub use self::distinct_until_changed::DistinctUntilChangedExt;
pub use self::map_value::MapValueExt;
pub use self::scan_state::ScanStateExt;
pub use self::tap::TapExt;
pub use self::zip_with::{ZipWith, ZipWithExt};
