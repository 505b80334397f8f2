// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::debug;
use std::fmt::Debug;
use storeless_core::{StorelessError, Subject, SubjectError, SubjectStream};

/// Hot multicast channel carrying actions from the view to the reducers.
///
/// Clones share one underlying [`Subject`]. Actions dispatched while nobody
/// is subscribed are dropped.
pub struct Dispatcher<A: Clone + Send + Sync + 'static> {
    subject: Subject<A>,
}

impl<A> Dispatcher<A>
where
    A: Clone + Debug + Send + Sync + 'static,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            subject: Subject::new(),
        }
    }

    /// Broadcasts `action` to every current subscriber.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` after [`close`](Self::close) or [`error`](Self::error).
    pub fn dispatch(&self, action: impl Into<A>) -> Result<(), SubjectError> {
        let action = action.into();
        debug!("dispatching {:?}", action);
        self.subject.next(action)
    }

    /// Subscribes to every action dispatched from now on.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the dispatcher has been closed.
    pub fn actions(&self) -> Result<SubjectStream<A>, SubjectError> {
        self.subject.subscribe()
    }

    /// Terminates every action stream with `err`, then closes.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the dispatcher was already closed.
    pub fn error(&self, err: StorelessError) -> Result<(), SubjectError> {
        self.subject.error(err)
    }

    /// Completes every action stream. Idempotent.
    pub fn close(&self) {
        self.subject.close();
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.subject.is_closed()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subject.subscriber_count()
    }
}

impl<A> Default for Dispatcher<A>
where
    A: Clone + Debug + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone + Send + Sync + 'static> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            subject: self.subject.clone(),
        }
    }
}
