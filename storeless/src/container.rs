// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The state container.
//!
//! There is no store object. [`Container::new`] subscribes two independent
//! scan reducers to the dispatcher, zips their outputs into [`AppState`] and
//! republishes every combined state through a [`BehaviorSubject`]:
//!
//! ```text
//! dispatcher ─┬─ todos_reducer ──┐
//!             │                  zip ── BehaviorSubject<AppState> ── views
//!             └─ filter_reducer ─┘
//! ```
//!
//! # Example
//!
//! ```
//! use storeless::{Action, AppState, Container, Dispatcher};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let dispatcher = Dispatcher::new();
//! let container = Container::new(AppState::default(), &dispatcher)?;
//! let mut state = container.state()?;
//!
//! // The current state arrives first
//! assert!(state.next().await.unwrap().unwrap().todos.is_empty());
//!
//! dispatcher.dispatch(Action::add_todo(0, "write docs"))?;
//! let next = state.next().await.unwrap().unwrap();
//! assert_eq!(next.todos[0].text, "write docs");
//! # Ok(())
//! # }
//! ```

use crate::action::Action;
use crate::dispatcher::Dispatcher;
use crate::logging::{debug, error, trace};
use crate::model::AppState;
use crate::reducer::{filter_reducer, todos_reducer};
use futures::future::ready;
use futures::Stream;
use storeless_core::{
    BehaviorSubject, CancellationToken, Result, StorelessTask, StreamItem, SubjectError,
    SubjectStream,
};
use storeless_exec::SubscribeExt;
use storeless_stream::ZipWithExt;

/// Read-only access to the published application state.
///
/// Obtained from [`Container::handle`]; view models hold one each. Streams
/// from a handle end when the owning container is dropped.
#[derive(Clone)]
pub struct StateHandle {
    subject: BehaviorSubject<AppState>,
}

impl StateHandle {
    /// Streams the current state, then one state per processed action.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` once the container has stopped.
    pub fn state(&self) -> std::result::Result<SubjectStream<AppState>, SubjectError> {
        self.subject.subscribe()
    }

    /// The most recently published state.
    #[must_use]
    pub fn snapshot(&self) -> AppState {
        self.subject.value()
    }

    /// Returns `true` once the container has stopped publishing.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.subject.is_closed()
    }
}

/// Owns the state pipeline. Dropping it stops the pipeline and completes every state stream.
pub struct Container {
    handle: StateHandle,
    task: StorelessTask,
}

impl Container {
    /// Wires the reducers to `dispatcher` and starts publishing, seeded with `initial`.
    ///
    /// Both reducers are subscribed before this returns, so every action
    /// dispatched afterwards is processed.
    ///
    /// # Errors
    ///
    /// Returns `StorelessError::SubjectClosed` if `dispatcher` is closed.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn new(initial: AppState, dispatcher: &Dispatcher<Action>) -> Result<Self> {
        Ok(Self::with_actions(
            initial,
            dispatcher.actions()?,
            dispatcher.actions()?,
        ))
    }

    /// Starts publishing from two explicit action sources, one per reducer.
    ///
    /// Both sources must carry the same actions in the same order, otherwise
    /// the zipped states mix slices of different actions. An error from either
    /// source stops the pipeline.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn with_actions<T, F>(initial: AppState, todo_actions: T, filter_actions: F) -> Self
    where
        T: Stream<Item = StreamItem<Action>> + Send + 'static,
        F: Stream<Item = StreamItem<Action>> + Send + 'static,
    {
        let todos = todos_reducer(initial.todos.clone(), todo_actions);
        let filter = filter_reducer(initial.visibility_filter, filter_actions);
        let states = Box::pin(todos.zip_with(filter, |todos, visibility_filter| AppState {
            todos,
            visibility_filter,
        }));

        let subject = BehaviorSubject::new(initial);

        let publish = {
            let subject = subject.clone();
            move |item: StreamItem<AppState>, cancel: CancellationToken| {
                let published = match item {
                    StreamItem::Value(state) => {
                        trace!(
                            "publishing state: {} todos, filter {}",
                            state.todos.len(),
                            state.visibility_filter
                        );
                        subject.next(state)
                    }
                    StreamItem::Error(err) => {
                        error!("state pipeline failed: {}", err);
                        cancel.cancel();
                        subject.error(err)
                    }
                };
                ready(published)
            }
        };
        let on_rejected = |err: SubjectError| debug!("state update dropped: {}", err);

        let task = StorelessTask::spawn({
            let subject = subject.clone();
            move |cancel| async move {
                if let Err(err) = states.subscribe(publish, Some(cancel), Some(on_rejected)).await
                {
                    error!("state subscription ended with error: {}", err);
                }
                subject.close();
                debug!("state pipeline stopped");
            }
        });

        Self {
            handle: StateHandle { subject },
            task,
        }
    }

    /// A cloneable read-only handle to the published state.
    #[must_use]
    pub fn handle(&self) -> StateHandle {
        self.handle.clone()
    }

    /// See [`StateHandle::state`].
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` once the pipeline has stopped.
    pub fn state(&self) -> std::result::Result<SubjectStream<AppState>, SubjectError> {
        self.handle.state()
    }

    /// See [`StateHandle::snapshot`].
    #[must_use]
    pub fn snapshot(&self) -> AppState {
        self.handle.snapshot()
    }

    /// Returns `true` once the pipeline has stopped publishing.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.handle.is_closed()
    }
}

impl Drop for Container {
    fn drop(&mut self) {
        self.task.cancel();
        self.handle.subject.close();
    }
}
