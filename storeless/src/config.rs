// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Start-up configuration.
//!
//! ```json
//! {
//!   "initial_state": {
//!     "todos": [{ "id": 0, "text": "Buy milk", "completed": false }],
//!     "visibility_filter": "SHOW_ACTIVE"
//!   },
//!   "first_todo_id": 10
//! }
//! ```
//!
//! Every field is optional.

use crate::model::AppState;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors raised while loading a [`StorelessConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: no to-do id is left after the seeded to-dos")]
    IdsExhausted,
}

/// Initial state and id seed for a to-do application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorelessConfig {
    pub initial_state: AppState,
    /// Lowest id handed out by `AddTodo`.
    pub first_todo_id: u64,
}

impl StorelessConfig {
    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields,
    /// at any depth, and [`ConfigError::IdsExhausted`] if a seeded to-do holds
    /// `u64::MAX`.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.next_todo_id().ok_or(ConfigError::IdsExhausted)?;
        Ok(config)
    }

    /// Reads and parses the JSON file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// the errors of [`from_json_str`](Self::from_json_str) otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The id for the first added to-do: `first_todo_id`, raised past any id
    /// already present in the initial state.
    ///
    /// `None` if the initial state leaves no id free.
    #[must_use]
    pub fn next_todo_id(&self) -> Option<u64> {
        self.initial_state
            .next_free_id()
            .map(|free| free.max(self.first_todo_id))
    }
}
