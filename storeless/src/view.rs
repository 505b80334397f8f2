// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Headless view models.
//!
//! Each view model pairs a render stream derived from the published state
//! with the actions its widget emits. Render streams skip consecutive
//! duplicates, so a view only re-renders when its own output changes.

use crate::action::Action;
use crate::container::StateHandle;
use crate::dispatcher::Dispatcher;
use crate::model::{AppState, Todo, VisibilityFilter};
use futures::Stream;
use parking_lot::Mutex;
use storeless_core::{StreamItem, SubjectError};
use storeless_stream::{DistinctUntilChangedExt, MapValueExt};

/// The to-dos shown under `filter`, in list order.
#[must_use]
pub fn visible_todos(todos: &[Todo], filter: VisibilityFilter) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| filter.shows(todo.completed))
        .cloned()
        .collect()
}

/// Errors returned by [`AddTodo::add_todo`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddTodoError {
    #[error(transparent)]
    Closed(#[from] SubjectError),

    #[error("no to-do id left to hand out")]
    IdsExhausted,
}

/// Text input that dispatches new to-dos with increasing ids.
pub struct AddTodo {
    dispatcher: Dispatcher<Action>,
    next_id: Mutex<Option<u64>>,
}

impl AddTodo {
    #[must_use]
    pub fn new(dispatcher: Dispatcher<Action>, first_id: u64) -> Self {
        Self::with_next_id(dispatcher, Some(first_id))
    }

    /// `None` creates an input whose ids are already used up.
    pub(crate) fn with_next_id(dispatcher: Dispatcher<Action>, next_id: Option<u64>) -> Self {
        Self {
            dispatcher,
            next_id: Mutex::new(next_id),
        }
    }

    /// Dispatches `Add` with the next id and returns that id.
    ///
    /// The id is consumed even if dispatching fails. `u64::MAX` is the last
    /// id handed out.
    ///
    /// # Errors
    ///
    /// Returns [`AddTodoError::IdsExhausted`] once every id is used, and
    /// [`AddTodoError::Closed`] if the dispatcher is closed.
    pub fn add_todo(&self, text: impl Into<String>) -> Result<u64, AddTodoError> {
        let id = {
            let mut next_id = self.next_id.lock();
            let id = next_id.ok_or(AddTodoError::IdsExhausted)?;
            *next_id = id.checked_add(1);
            id
        };
        self.dispatcher.dispatch(Action::add_todo(id, text))?;
        Ok(id)
    }

    /// The id the next call to [`add_todo`](Self::add_todo) will use, or
    /// `None` once ids are exhausted.
    #[must_use]
    pub fn next_id(&self) -> Option<u64> {
        *self.next_id.lock()
    }
}

/// Render data for one row of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: u64,
    pub text: String,
    /// Completed to-dos are struck through.
    pub line_through: bool,
}

impl From<&Todo> for TodoItem {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            text: todo.text.clone(),
            line_through: todo.completed,
        }
    }
}

/// The filtered to-do list.
pub struct TodoList {
    dispatcher: Dispatcher<Action>,
    state: StateHandle,
}

impl TodoList {
    #[must_use]
    pub fn new(dispatcher: Dispatcher<Action>, state: StateHandle) -> Self {
        Self { dispatcher, state }
    }

    /// Streams the visible to-dos, starting with the current ones.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the container has stopped.
    pub fn filtered(
        &self,
    ) -> Result<impl Stream<Item = StreamItem<Vec<Todo>>> + Send, SubjectError> {
        Ok(self
            .state
            .state()?
            .map_value(|state: AppState| visible_todos(&state.todos, state.visibility_filter))
            .distinct_until_changed())
    }

    /// Streams the visible to-dos as row render data.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the container has stopped.
    pub fn items(
        &self,
    ) -> Result<impl Stream<Item = StreamItem<Vec<TodoItem>>> + Send, SubjectError> {
        Ok(self
            .filtered()?
            .map_value(|todos| todos.iter().map(TodoItem::from).collect::<Vec<_>>()))
    }

    /// The currently visible to-dos.
    #[must_use]
    pub fn current(&self) -> Vec<Todo> {
        let state = self.state.snapshot();
        visible_todos(&state.todos, state.visibility_filter)
    }

    /// Dispatches `Toggle` for `id`.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the dispatcher is closed.
    pub fn toggle(&self, id: u64) -> Result<(), SubjectError> {
        self.dispatcher.dispatch(Action::toggle_todo(id))
    }
}

/// How a filter link's label is decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEffect {
    /// The link's filter is the active one.
    Underline,
    None,
}

/// A footer link selecting one visibility filter.
pub struct FilterLink {
    filter: VisibilityFilter,
    label: &'static str,
    dispatcher: Dispatcher<Action>,
    state: StateHandle,
}

impl FilterLink {
    #[must_use]
    pub fn new(
        filter: VisibilityFilter,
        label: &'static str,
        dispatcher: Dispatcher<Action>,
        state: StateHandle,
    ) -> Self {
        Self {
            filter,
            label,
            dispatcher,
            state,
        }
    }

    #[must_use]
    pub fn filter(&self) -> VisibilityFilter {
        self.filter
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Streams the label decoration, starting with the current one.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the container has stopped.
    pub fn text_effect(
        &self,
    ) -> Result<impl Stream<Item = StreamItem<TextEffect>> + Send, SubjectError> {
        let filter = self.filter;
        Ok(self
            .state
            .state()?
            .map_value(move |state: AppState| effect_for(filter, state.visibility_filter))
            .distinct_until_changed())
    }

    /// The decoration for the current state.
    #[must_use]
    pub fn current_effect(&self) -> TextEffect {
        effect_for(self.filter, self.state.snapshot().visibility_filter)
    }

    /// Dispatches `SetVisibilityFilter` for this link's filter.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the dispatcher is closed.
    pub fn select(&self) -> Result<(), SubjectError> {
        self.dispatcher
            .dispatch(Action::set_visibility_filter(self.filter))
    }
}

fn effect_for(link: VisibilityFilter, active: VisibilityFilter) -> TextEffect {
    if link == active {
        TextEffect::Underline
    } else {
        TextEffect::None
    }
}

/// The row of filter links: All, Active, Completed.
pub struct Footer {
    links: [FilterLink; 3],
}

impl Footer {
    #[must_use]
    pub fn new(dispatcher: &Dispatcher<Action>, state: &StateHandle) -> Self {
        let link = |filter, label| FilterLink::new(filter, label, dispatcher.clone(), state.clone());
        Self {
            links: [
                link(VisibilityFilter::ShowAll, "All"),
                link(VisibilityFilter::ShowActive, "Active"),
                link(VisibilityFilter::ShowCompleted, "Completed"),
            ],
        }
    }

    #[must_use]
    pub fn links(&self) -> &[FilterLink] {
        &self.links
    }

    /// The link for `filter`.
    #[must_use]
    pub fn link(&self, filter: VisibilityFilter) -> &FilterLink {
        match filter {
            VisibilityFilter::ShowAll => &self.links[0],
            VisibilityFilter::ShowActive => &self.links[1],
            VisibilityFilter::ShowCompleted => &self.links[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todos() -> Vec<Todo> {
        vec![
            Todo::new(0, "active"),
            Todo {
                completed: true,
                ..Todo::new(1, "done")
            },
        ]
    }

    #[test]
    fn test_view_show_all_keeps_everything() {
        assert_eq!(visible_todos(&todos(), VisibilityFilter::ShowAll), todos());
    }

    #[test]
    fn test_view_show_active_keeps_incomplete() {
        let visible = visible_todos(&todos(), VisibilityFilter::ShowActive);

        assert_eq!(visible, vec![Todo::new(0, "active")]);
    }

    #[test]
    fn test_view_show_completed_keeps_completed() {
        let visible = visible_todos(&todos(), VisibilityFilter::ShowCompleted);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn test_view_todo_item_strikes_through_completed() {
        let rows: Vec<TodoItem> = todos().iter().map(TodoItem::from).collect();

        assert!(!rows[0].line_through);
        assert!(rows[1].line_through);
        assert_eq!(rows[1].text, "done");
    }

    #[test]
    fn test_view_effect_underlines_matching_filter() {
        assert_eq!(
            effect_for(VisibilityFilter::ShowActive, VisibilityFilter::ShowActive),
            TextEffect::Underline
        );
        assert_eq!(
            effect_for(VisibilityFilter::ShowAll, VisibilityFilter::ShowActive),
            TextEffect::None
        );
    }
}
