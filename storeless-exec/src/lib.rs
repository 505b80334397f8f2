// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sinks that drive a stream to completion.

pub mod subscribe;
mod logging;

// Re-export commonly used types
pub use subscribe::SubscribeExt;
