// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::action::Action;
use crate::config::StorelessConfig;
use crate::container::Container;
use crate::dispatcher::Dispatcher;
use crate::view::{AddTodo, Footer, TodoList};
use storeless_core::Result;

/// The assembled application: one dispatcher, one container and the view
/// models wired to both.
pub struct TodoApp {
    dispatcher: Dispatcher<Action>,
    container: Container,
    add_todo: AddTodo,
    todo_list: TodoList,
    footer: Footer,
}

impl TodoApp {
    /// Builds the application from `config`.
    ///
    /// # Errors
    ///
    /// Propagates [`Container::new`] failures.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn new(config: &StorelessConfig) -> Result<Self> {
        let dispatcher = Dispatcher::new();
        let container = Container::new(config.initial_state.clone(), &dispatcher)?;
        let state = container.handle();

        Ok(Self {
            add_todo: AddTodo::with_next_id(dispatcher.clone(), config.next_todo_id()),
            todo_list: TodoList::new(dispatcher.clone(), state.clone()),
            footer: Footer::new(&dispatcher, &state),
            dispatcher,
            container,
        })
    }

    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher<Action> {
        &self.dispatcher
    }

    #[must_use]
    pub fn container(&self) -> &Container {
        &self.container
    }

    #[must_use]
    pub fn add_todo(&self) -> &AddTodo {
        &self.add_todo
    }

    #[must_use]
    pub fn todo_list(&self) -> &TodoList {
        &self.todo_list
    }

    #[must_use]
    pub fn footer(&self) -> &Footer {
        &self.footer
    }
}
