// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # storeless
//!
//! A to-do application whose state lives in reactive scan reducers instead of
//! a central store.
//!
//! ## Data flow
//!
//! 1. View models dispatch [`Action`]s through a [`Dispatcher`], a hot subject.
//! 2. Two reducers fold the actions independently: one into the to-do list,
//!    one into the [`VisibilityFilter`].
//! 3. The [`Container`] zips both outputs into an [`AppState`] and caches it
//!    in a behavior subject.
//! 4. View models subscribe to the cached state and derive their render data.
//!
//! ## Quick Start
//!
//! ```rust
//! use storeless::{StorelessConfig, TodoApp, VisibilityFilter};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let app = TodoApp::new(&StorelessConfig::default())?;
//! let mut visible = Box::pin(app.todo_list().filtered()?);
//! assert!(visible.next().await.unwrap().unwrap().is_empty());
//!
//! let id = app.add_todo().add_todo("learn scan")?;
//! assert_eq!(visible.next().await.unwrap().unwrap()[0].id, id);
//!
//! app.todo_list().toggle(id)?;
//! app.footer().link(VisibilityFilter::ShowActive).select()?;
//! // Toggled, then filtered out
//! assert_eq!(visible.next().await.unwrap().unwrap().len(), 1);
//! assert!(visible.next().await.unwrap().unwrap().is_empty());
//! # Ok(())
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod action;
pub mod app;
pub mod config;
pub mod container;
pub mod dispatcher;
mod logging;
pub mod model;
pub mod reducer;
pub mod view;

pub use self::action::{Action, FilterAction, TodoAction};
pub use self::app::TodoApp;
pub use self::config::{ConfigError, StorelessConfig};
pub use self::container::{Container, StateHandle};
pub use self::dispatcher::Dispatcher;
pub use self::model::{AppState, ParseFilterError, Todo, VisibilityFilter};
pub use self::reducer::{filter_reducer, reduce_filter, reduce_todos, todos_reducer};
pub use self::view::{
    visible_todos, AddTodo, AddTodoError, FilterLink, Footer, TextEffect, TodoItem, TodoList,
};

// Re-export the pipeline building blocks
pub use storeless_core::{StorelessError, StreamItem, SubjectError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Action, AppState, Container, Dispatcher, StorelessConfig, Todo, TodoApp,
        VisibilityFilter,
    };
    pub use storeless_core::StreamItem;
}
