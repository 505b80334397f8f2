// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pure reducers and their stream forms.
//!
//! The stream forms fold every dispatched action into their slice of state
//! with [`scan_state`](storeless_stream::ScanStateExt::scan_state) and emit
//! one state per action, including actions the reducer ignores. Both reducers
//! therefore emit in lockstep, which is what lets the container zip them.

use crate::action::{Action, FilterAction, TodoAction};
use crate::model::{Todo, VisibilityFilter};
use futures::Stream;
use storeless_core::StreamItem;
use storeless_stream::ScanStateExt;

/// Applies `action` to the to-do list.
///
/// `Add` appends without checking for duplicate ids; `Toggle` flips every
/// to-do carrying the id and is a no-op for unknown ids.
#[must_use]
pub fn reduce_todos(todos: &[Todo], action: &Action) -> Vec<Todo> {
    match action.as_todo() {
        Some(TodoAction::Add { todo_id, text }) => {
            let mut next = todos.to_vec();
            next.push(Todo::new(*todo_id, text.clone()));
            next
        }
        Some(TodoAction::Toggle { id }) => todos
            .iter()
            .map(|todo| {
                if todo.id == *id {
                    Todo {
                        completed: !todo.completed,
                        ..todo.clone()
                    }
                } else {
                    todo.clone()
                }
            })
            .collect(),
        None => todos.to_vec(),
    }
}

/// Applies `action` to the visibility filter.
#[must_use]
pub fn reduce_filter(filter: VisibilityFilter, action: &Action) -> VisibilityFilter {
    match action.as_filter() {
        Some(FilterAction::SetVisibilityFilter(next)) => *next,
        None => filter,
    }
}

/// Folds `actions` into the to-do list, starting from `initial`.
pub fn todos_reducer<S>(
    initial: Vec<Todo>,
    actions: S,
) -> impl Stream<Item = StreamItem<Vec<Todo>>> + Send
where
    S: Stream<Item = StreamItem<Action>> + Send + 'static,
{
    actions.scan_state(initial, |todos: &mut Vec<Todo>, action: &Action| {
        *todos = reduce_todos(todos, action);
        todos.clone()
    })
}

/// Folds `actions` into the visibility filter, starting from `initial`.
pub fn filter_reducer<S>(
    initial: VisibilityFilter,
    actions: S,
) -> impl Stream<Item = StreamItem<VisibilityFilter>> + Send
where
    S: Stream<Item = StreamItem<Action>> + Send + 'static,
{
    actions.scan_state(initial, |filter: &mut VisibilityFilter, action: &Action| {
        *filter = reduce_filter(*filter, action);
        *filter
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: u64, text: &str, completed: bool) -> Todo {
        Todo {
            id,
            text: text.to_string(),
            completed,
        }
    }

    #[test]
    fn test_reducer_add_appends_active_todo() {
        let todos = reduce_todos(&[todo(0, "a", true)], &Action::add_todo(1, "b"));

        assert_eq!(todos, vec![todo(0, "a", true), todo(1, "b", false)]);
    }

    #[test]
    fn test_reducer_add_keeps_duplicate_ids() {
        let todos = reduce_todos(&[todo(0, "a", false)], &Action::add_todo(0, "again"));

        assert_eq!(todos.len(), 2);
        assert!(todos.iter().all(|t| t.id == 0));
    }

    #[test]
    fn test_reducer_toggle_flips_only_matching_ids() {
        let before = vec![todo(0, "a", false), todo(1, "b", true), todo(0, "c", true)];

        let after = reduce_todos(&before, &Action::toggle_todo(0));

        assert_eq!(
            after,
            vec![todo(0, "a", true), todo(1, "b", true), todo(0, "c", false)]
        );
    }

    #[test]
    fn test_reducer_toggle_unknown_id_is_a_noop() {
        let before = vec![todo(3, "a", false)];

        assert_eq!(reduce_todos(&before, &Action::toggle_todo(9)), before);
    }

    #[test]
    fn test_reducer_todos_ignore_filter_actions() {
        let before = vec![todo(0, "a", false)];
        let action = Action::set_visibility_filter(VisibilityFilter::ShowCompleted);

        assert_eq!(reduce_todos(&before, &action), before);
    }

    #[test]
    fn test_reducer_filter_is_replaced_by_set_action() {
        let action = Action::set_visibility_filter(VisibilityFilter::ShowActive);

        assert_eq!(
            reduce_filter(VisibilityFilter::ShowAll, &action),
            VisibilityFilter::ShowActive
        );
    }

    #[test]
    fn test_reducer_filter_ignores_todo_actions() {
        assert_eq!(
            reduce_filter(VisibilityFilter::ShowCompleted, &Action::add_todo(0, "a")),
            VisibilityFilter::ShowCompleted
        );
        assert_eq!(
            reduce_filter(VisibilityFilter::ShowActive, &Action::toggle_todo(0)),
            VisibilityFilter::ShowActive
        );
    }
}
