// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Error types for the storeless state pipeline.
//!
//! [`StorelessError`] is the error carried inside [`StreamItem::Error`](crate::StreamItem)
//! and returned by fallible pipeline operations.
//!
//! # Examples
//!
//! ```
//! use storeless_core::{Result, StorelessError};
//!
//! fn reduce() -> Result<()> {
//!     Err(StorelessError::stream_error("reducer not wired"))
//! }
//! ```

use crate::SubjectError;

/// Root error type for all storeless operations
#[derive(Debug, thiserror::Error)]
pub enum StorelessError {
    /// Stream processing encountered an error
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors produced by user-provided handlers so they can travel
    /// through a pipeline.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Multiple errors occurred
    #[error("Multiple errors occurred: {count} errors")]
    MultipleErrors {
        /// Number of errors that occurred
        count: usize,
        /// The individual errors
        errors: Vec<StorelessError>,
    },

    /// A subject was used after being closed
    #[error("Subject is closed")]
    SubjectClosed,
}

impl StorelessError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Aggregate multiple user errors into a `MultipleErrors` variant
    ///
    /// # Examples
    ///
    /// ```
    /// use storeless_core::StorelessError;
    ///
    /// let errors = vec![
    ///     std::io::Error::other("first"),
    ///     std::io::Error::other("second"),
    /// ];
    ///
    /// let result = StorelessError::from_user_errors(errors);
    /// assert!(matches!(result, StorelessError::MultipleErrors { count: 2, .. }));
    /// ```
    pub fn from_user_errors<E>(errors: Vec<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let count = errors.len();
        let errors = errors
            .into_iter()
            .map(|e| Self::UserError(Box::new(e)))
            .collect();

        Self::MultipleErrors { count, errors }
    }
}

impl From<SubjectError> for StorelessError {
    fn from(error: SubjectError) -> Self {
        match error {
            SubjectError::Closed => Self::SubjectClosed,
        }
    }
}

/// Specialized Result type for storeless operations
pub type Result<T> = std::result::Result<T, StorelessError>;

impl Clone for StorelessError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // The boxed source cannot be cloned, keep its message
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
            Self::MultipleErrors { count, errors } => Self::MultipleErrors {
                count: *count,
                errors: errors.clone(),
            },
            Self::SubjectClosed => Self::SubjectClosed,
        }
    }
}
