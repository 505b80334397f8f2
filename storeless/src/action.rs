// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Actions emitted by the view and consumed by the reducers.
//!
//! Each reducer only looks at its own slice of [`Action`]:
//! [`as_todo`](Action::as_todo) for the to-do list and
//! [`as_filter`](Action::as_filter) for the visibility filter.

use crate::model::VisibilityFilter;

/// Actions affecting the to-do list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// Append a new, active to-do.
    Add { todo_id: u64, text: String },
    /// Flip the completion flag of the to-do with this id.
    Toggle { id: u64 },
}

/// Actions affecting the visibility filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAction {
    SetVisibilityFilter(VisibilityFilter),
}

/// Every action that can be dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Todo(TodoAction),
    Filter(FilterAction),
}

impl Action {
    pub fn add_todo(todo_id: u64, text: impl Into<String>) -> Self {
        Self::Todo(TodoAction::Add {
            todo_id,
            text: text.into(),
        })
    }

    pub fn toggle_todo(id: u64) -> Self {
        Self::Todo(TodoAction::Toggle { id })
    }

    pub fn set_visibility_filter(filter: VisibilityFilter) -> Self {
        Self::Filter(FilterAction::SetVisibilityFilter(filter))
    }

    /// The to-do slice of this action, if any.
    #[must_use]
    pub fn as_todo(&self) -> Option<&TodoAction> {
        match self {
            Self::Todo(action) => Some(action),
            Self::Filter(_) => None,
        }
    }

    /// The filter slice of this action, if any.
    #[must_use]
    pub fn as_filter(&self) -> Option<&FilterAction> {
        match self {
            Self::Filter(action) => Some(action),
            Self::Todo(_) => None,
        }
    }
}

impl From<TodoAction> for Action {
    fn from(action: TodoAction) -> Self {
        Self::Todo(action)
    }
}

impl From<FilterAction> for Action {
    fn from(action: FilterAction) -> Self {
        Self::Filter(action)
    }
}
