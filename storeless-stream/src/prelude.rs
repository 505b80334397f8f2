// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Glob-importable set of operator traits.

pub use crate::distinct_until_changed::DistinctUntilChangedExt;
pub use crate::map_value::MapValueExt;
pub use crate::scan_state::ScanStateExt;
pub use crate::tap::TapExt;
pub use crate::zip_with::ZipWithExt;
pub use storeless_core::StreamItem;
