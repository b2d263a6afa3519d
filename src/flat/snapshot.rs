// Copyright 2016 spatial-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use serde::{Deserialize, Serialize};

/// A serializable copy of a `FlatIndex`, shaped `{"entries": [...]}`
///
/// The shape is not a bare sequence, so feeding it back to `FlatIndex::load`
/// needs the entries unwrapped first. `FlatIndex::from_snapshot` does that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<T> {
    pub entries: Vec<T>,
}

impl<T> Snapshot<T> {
    pub fn new(entries: Vec<T>) -> Snapshot<T> {
        Snapshot { entries: entries }
    }

    /// Consumes self, returning the entries
    pub fn into_entries(self) -> Vec<T> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_shape() {
        let snapshot = Snapshot::new(vec!["a", "b"]);
        assert_eq!(json!({"entries": ["a", "b"]}), serde_json::to_value(&snapshot).unwrap());
    }

    #[test]
    fn empty_json_shape() {
        let snapshot: Snapshot<u32> = Snapshot::new(Vec::new());
        assert_eq!(r#"{"entries":[]}"#, serde_json::to_string(&snapshot).unwrap());
    }
}
