// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Application state of the to-do list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// Creates an active (not completed) to-do.
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Which subset of the to-do list is shown.
///
/// Serialized as `SHOW_ALL`, `SHOW_ACTIVE` or `SHOW_COMPLETED`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisibilityFilter {
    #[default]
    ShowAll,
    ShowActive,
    ShowCompleted,
}

impl VisibilityFilter {
    /// All filters in footer order.
    pub const ALL: [VisibilityFilter; 3] = [
        VisibilityFilter::ShowAll,
        VisibilityFilter::ShowActive,
        VisibilityFilter::ShowCompleted,
    ];

    /// The wire name, e.g. `SHOW_ACTIVE`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShowAll => "SHOW_ALL",
            Self::ShowActive => "SHOW_ACTIVE",
            Self::ShowCompleted => "SHOW_COMPLETED",
        }
    }

    /// Returns `true` if a to-do with the given completion flag is shown.
    #[must_use]
    pub const fn shows(self, completed: bool) -> bool {
        match self {
            Self::ShowAll => true,
            Self::ShowActive => !completed,
            Self::ShowCompleted => completed,
        }
    }
}

impl fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known [`VisibilityFilter`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown visibility filter `{0}` (expected all, active or completed)")]
pub struct ParseFilterError(pub String);

impl FromStr for VisibilityFilter {
    type Err = ParseFilterError;

    /// Accepts the wire names and the short forms `all`, `active`, `completed`,
    /// ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|filter| {
                let short = &filter.as_str()["SHOW_".len()..];
                trimmed.eq_ignore_ascii_case(filter.as_str()) || trimmed.eq_ignore_ascii_case(short)
            })
            .ok_or_else(|| ParseFilterError(s.to_string()))
    }
}

/// The combined state republished after every action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppState {
    pub todos: Vec<Todo>,
    pub visibility_filter: VisibilityFilter,
}

impl AppState {
    /// Smallest id greater than every id in `todos`, or 0 for an empty list.
    ///
    /// Returns `None` if a to-do already holds `u64::MAX`.
    #[must_use]
    pub fn next_free_id(&self) -> Option<u64> {
        self.todos
            .iter()
            .try_fold(0u64, |free, todo| Some(free.max(todo.id.checked_add(1)?)))
    }
}
