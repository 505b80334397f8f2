// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Subject that caches its latest value.
//!
//! A [`BehaviorSubject`] is seeded with an initial value. Every new subscriber
//! first receives the cached value, then every value sent afterwards. This is
//! what lets a view render immediately on subscription without waiting for the
//! next action.
//!
//! ## Example
//!
//! ```
//! use storeless_core::{BehaviorSubject, StreamItem};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let subject = BehaviorSubject::new(0);
//! subject.next(1).unwrap();
//!
//! // A late subscriber still sees the latest value
//! let mut stream = subject.subscribe().unwrap();
//! assert_eq!(stream.next().await, Some(StreamItem::Value(1)));
//!
//! subject.next(2).unwrap();
//! assert_eq!(stream.next().await, Some(StreamItem::Value(2)));
//! assert_eq!(subject.value(), 2);
//! # }
//! ```

use crate::logging::debug;
use crate::subject::{broadcast, SyncReceiver};
use crate::{StorelessError, StreamItem, SubjectError, SubjectStream};
use futures::channel::mpsc::{self, UnboundedSender};
use parking_lot::Mutex;
use std::sync::Arc;

struct BehaviorState<T> {
    closed: bool,
    current: T,
    senders: Vec<UnboundedSender<StreamItem<T>>>,
}

/// A hot subject holding the most recent value.
pub struct BehaviorSubject<T: Clone + Send + Sync + 'static> {
    state: Arc<Mutex<BehaviorState<T>>>,
}

impl<T: Clone + Send + Sync + 'static> BehaviorSubject<T> {
    /// Creates an open subject whose cached value is `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            state: Arc::new(Mutex::new(BehaviorState {
                closed: false,
                current: initial,
                senders: Vec::new(),
            })),
        }
    }

    /// Returns a clone of the cached value.
    ///
    /// Still available after the subject has been closed.
    #[must_use]
    pub fn value(&self) -> T {
        self.state.lock().current.clone()
    }

    /// Subscribe and receive the cached value followed by every later item.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn subscribe(&self) -> Result<SubjectStream<T>, SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        // Seed and register under the same lock so no concurrent send slips between them
        let (tx, rx) = mpsc::unbounded();
        if tx
            .unbounded_send(StreamItem::Value(state.current.clone()))
            .is_ok()
        {
            state.senders.push(tx);
        }
        Ok(SyncReceiver::into_boxed_stream(rx))
    }

    /// Send an item to all subscribers. Values replace the cached value.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn send(&self, item: StreamItem<T>) -> Result<(), SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        if let StreamItem::Value(value) = &item {
            state.current = value.clone();
        }
        broadcast(&mut state.senders, &item);
        Ok(())
    }

    /// Replace the cached value and broadcast it.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn next(&self, value: T) -> Result<(), SubjectError> {
        self.send(StreamItem::Value(value))
    }

    /// Sends a stream error to all subscribers and terminates the subject.
    ///
    /// The cached value keeps the last good value.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject was already closed.
    pub fn error(&self, err: StorelessError) -> Result<(), SubjectError> {
        let result = self.send(StreamItem::Error(err));
        self.close();
        result
    }

    /// Closes the subject, completing all subscriber streams. Idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock();
        if !state.closed {
            debug!("closing behavior subject with {} subscribers", state.senders.len());
        }
        state.closed = true;
        state.senders.clear();
    }

    /// Returns `true` if the subject has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Returns the number of currently active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl<T: Clone + Send + Sync + Default + 'static> Default for BehaviorSubject<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + Send + Sync + 'static> Clone for BehaviorSubject<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}
