// Copyright 2016 spatial-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! A flat stand-in for R-tree style spatial indexes.
//!
//! `FlatIndex` has the surface callers of a spatial index expect (`insert`,
//! `load`, `remove`, `all`, `search`, `clear`, `snapshot`) but keeps its
//! entries in a plain `Vec`. `search` performs no geometric filtering at all
//! and returns every entry.
//!
//! ```
//! use flatspatial::{BBox, FlatIndex};
//!
//! let mut index = FlatIndex::new();
//! index.insert("a").insert("b");
//! index.load(vec!["c", "d"]);
//! assert_eq!(vec!["a", "b", "c", "d"], index.search(BBox::from_bbox(0.0, 0.0, 0.0, 0.0)));
//! assert_eq!(Some("b"), index.remove(&"b"));
//! assert_eq!(vec!["a", "c", "d"], index.all());
//! ```

#[macro_use]
extern crate itertools;
#[macro_use]
extern crate generic_array;
#[macro_use]
extern crate tracing;

extern crate num;
extern crate serde;
extern crate serde_json;
extern crate thiserror;
extern crate typenum;

#[cfg(test)]
#[macro_use]
extern crate approx;
#[cfg(test)]
extern crate rand;

mod error;
pub mod flat;
pub mod shapes;
mod vecext;

pub use crate::error::{Error, Result};
pub use crate::flat::{EntryIdentity, FlatIndex, IndexOptions, Snapshot};
pub use crate::shapes::{BBox, Point, Rect};

#[cfg(test)]
mod tests {

    use super::*;
    use rand::{thread_rng, Rng};

    #[test]
    fn flat_integration() {
        let mut index = FlatIndex::new_with_max(16);
        for i in 0..32 {
            index.insert(i);
        }
        assert_eq!(32, index.len());
        assert_eq!(index.len(), index.iter().count());

        // A region that contains nothing still returns everything
        let found = index.search(BBox::from_bbox(100.0, 100.0, 200.0, 200.0));
        assert_eq!(index.all(), found);

        for i in 0..10 {
            assert_eq!(Some(i), index.remove(&i));
        }
        assert_eq!(22, index.len());
        assert_eq!((10..32).collect::<Vec<_>>(), index.all());

        index.clear();
        assert_eq!(0, index.len());
        assert_eq!(index.len(), index.iter().count());

        index.load(0..32);
        assert_eq!(32, index.len());
    }

    #[test]
    fn random_removals_match_vec() {
        let mut rng = thread_rng();
        let mut index = FlatIndex::new();
        let mut model: Vec<u32> = Vec::new();

        for _ in 0..500 {
            let value = rng.gen_range(0..20u32);
            if rng.gen_bool(0.6) {
                index.insert(value);
                model.push(value);
            } else {
                let expected = model.iter().position(|v| *v == value).map(|i| model.remove(i));
                assert_eq!(expected, index.remove(&value));
            }
            assert_eq!(model, index.all());
            assert_eq!(model, index.search(()));
        }
    }
}
