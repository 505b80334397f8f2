// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Building blocks shared by every storeless crate.
//!
//! - [`Subject`]: hot multicast entry point, used as the action dispatcher.
//! - [`BehaviorSubject`]: single-value cache that replays the latest value to
//!   each new subscriber, used to republish application state.
//! - [`StreamItem`]: value-or-error envelope carried by every pipeline stream.
//! - [`StorelessTask`] and [`CancellationToken`]: background task handles
//!   that cancel on drop.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod behavior_subject;
pub mod cancellation_token;
pub mod error;
mod logging;
pub mod storeless_task;
pub mod stream_item;
pub mod subject;
pub mod subject_error;

pub use self::behavior_subject::BehaviorSubject;
pub use self::cancellation_token::CancellationToken;
pub use self::error::{Result, StorelessError};
pub use self::storeless_task::StorelessTask;
pub use self::stream_item::StreamItem;
pub use self::subject::{Subject, SubjectStream};
pub use self::subject_error::SubjectError;
