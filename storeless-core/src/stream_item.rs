// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The envelope carried by every pipeline stream.

use crate::error::StorelessError;

/// One element of a pipeline: a value, or the error that ends the pipeline.
///
/// Reducers, the zip and the state cache all forward `Error` untouched, so a
/// failure anywhere upstream reaches every state subscriber.
#[derive(Debug, Clone)]
pub enum StreamItem<T> {
    Value(T),
    Error(StorelessError),
}

// Two errors never compare equal; only values take part in equality.
impl<T: PartialEq> PartialEq for StreamItem<T> {
    fn eq(&self, other: &Self) -> bool {
        matches!((self, other), (Self::Value(a), Self::Value(b)) if a == b)
    }
}

impl<T> StreamItem<T> {
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The value, if any.
    pub fn ok(self) -> Option<T> {
        self.into_result().ok()
    }

    /// The error, if any.
    pub fn err(self) -> Option<StorelessError> {
        self.into_result().err()
    }

    /// Applies `f` to a value; an error is passed on as is.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> StreamItem<U> {
        match self {
            Self::Value(value) => StreamItem::Value(f(value)),
            Self::Error(e) => StreamItem::Error(e),
        }
    }

    /// Converts into a `Result`, so `?` can be used on pipeline output.
    ///
    /// # Errors
    ///
    /// Returns the carried [`StorelessError`] for an `Error` item.
    pub fn into_result(self) -> Result<T, StorelessError> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Error(e) => Err(e),
        }
    }

    /// The value of an item known to be a `Value`.
    ///
    /// # Panics
    ///
    /// Panics if the item is an `Error`.
    pub fn unwrap(self) -> T {
        match self {
            Self::Value(value) => value,
            Self::Error(e) => panic!("expected a StreamItem value, got error: {e}"),
        }
    }
}
