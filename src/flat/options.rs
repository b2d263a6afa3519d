// Copyright 2016 spatial-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use serde::{Deserialize, Serialize};

/// Node capacity a tree index would have used when none is given
pub const D_MAX_ENTRIES: i64 = 9;

/// Construction options accepted for compatibility with tree index constructors.
///
/// `FlatIndex` reads none of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexOptions {
    /// Max entries per node. Any value is accepted, including negative ones
    pub max_entries: i64,
}

impl Default for IndexOptions {
    fn default() -> IndexOptions {
        IndexOptions { max_entries: D_MAX_ENTRIES }
    }
}

impl IndexOptions {
    pub fn with_max(max_entries: i64) -> IndexOptions {
        IndexOptions { max_entries: max_entries }
    }
}
