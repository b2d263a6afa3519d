// Copyright 2016 spatial-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::error::Result;
use crate::flat::{EntryIdentity, IndexOptions, Snapshot};
use crate::vecext::RemoveFirst;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::iter::FromIterator;
use std::slice::Iter as SliceIter;
use std::vec::IntoIter as VecIntoIter;

/// A flat stand-in for an R-tree style spatial index.
///
/// Entries are kept in insertion order in a single `Vec`. Every operation is a
/// linear scan at worst, and nothing about an entry is ever inspected: there
/// are no bounding boxes, no nodes and no splitting.
///
/// `search` does **not** filter. It returns every entry no matter what query
/// region it is given, so callers relying on it for spatial correctness will
/// see false positives for every entry outside the region.
///
/// No internal locking is done. Wrap it in a `Mutex` to share between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatIndex<T> {
    entries: Vec<T>,
}

impl<T> FlatIndex<T> {
    /// Create a new, empty index
    pub fn new() -> FlatIndex<T> {
        FlatIndex::new_with_options(IndexOptions::default())
    }

    /// Create a new, empty index. `max` is the node capacity a tree index would use; it is ignored here
    pub fn new_with_max(max: i64) -> FlatIndex<T> {
        FlatIndex::new_with_options(IndexOptions::with_max(max))
    }

    /// Create a new, empty index. The options are accepted and discarded
    pub fn new_with_options(options: IndexOptions) -> FlatIndex<T> {
        trace!("ignoring index options {:?}", options);
        FlatIndex { entries: Vec::new() }
    }

    /// Rebuild an index from a snapshot's entries, in order
    pub fn from_snapshot(snapshot: Snapshot<T>) -> FlatIndex<T> {
        FlatIndex { entries: snapshot.into_entries() }
    }

    /// Append an entry
    pub fn insert(&mut self, entry: T) -> &mut FlatIndex<T> {
        self.entries.push(entry);
        trace!("inserted entry, len {}", self.entries.len());
        self
    }

    /// Append every entry, keeping their relative order
    pub fn load<I: IntoIterator<Item = T>>(&mut self, entries: I) -> &mut FlatIndex<T> {
        let before = self.entries.len();
        self.entries.extend(entries);
        debug!("loaded {} entries, len {}", self.entries.len() - before, self.entries.len());
        self
    }

    /// Load a batch that may be absent. `None` leaves the index untouched
    pub fn load_opt<I: IntoIterator<Item = T>>(&mut self, entries: Option<I>) -> &mut FlatIndex<T> {
        match entries {
            Some(entries) => self.load(entries),
            None => {
                debug!("no batch to load");
                self
            }
        }
    }

    /// Remove the first entry for which f returns true. Returns the removed entry
    pub fn remove_by<F: FnMut(&T) -> bool>(&mut self, f: F) -> Option<T> {
        let removed = self.entries.remove_first(f);
        if removed.is_none() {
            trace!("no entry matched for removal");
        }
        removed
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        debug!("clearing {} entries", self.entries.len());
        self.entries.clear();
    }

    /// Iter over every entry in insertion order
    pub fn iter(&self) -> SliceIter<T> {
        self.entries.iter()
    }
}

impl<T: EntryIdentity> FlatIndex<T> {
    /// Remove the first entry that is the same entry as `entry`. Returns the removed entry, or None if it isn't present
    pub fn remove(&mut self, entry: &T) -> Option<T> {
        self.remove_by(|e| e.is_same_entry(entry))
    }
}

impl<T: Clone> FlatIndex<T> {
    /// A copy of every entry in insertion order
    pub fn all(&self) -> Vec<T> {
        self.entries.clone()
    }

    /// Every entry, in insertion order.
    ///
    /// The query region is never looked at: this returns exactly what `all`
    /// does, whatever `query` is.
    pub fn search<Q>(&self, _query: Q) -> Vec<T> {
        debug!("query region ignored, returning all {} entries", self.entries.len());
        self.all()
    }

    /// A serializable copy of the current entries
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot::new(self.all())
    }
}

impl<T: Clone + Serialize> FlatIndex<T> {
    /// Render the snapshot as `{"entries": [...]}` JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }
}

impl<T: DeserializeOwned> FlatIndex<T> {
    /// Parse `{"entries": [...]}` JSON produced by `to_json`
    pub fn from_json(json: &str) -> Result<FlatIndex<T>> {
        let snapshot: Snapshot<T> = serde_json::from_str(json)?;
        Ok(FlatIndex::from_snapshot(snapshot))
    }
}

impl<T> Default for FlatIndex<T> {
    fn default() -> FlatIndex<T> {
        FlatIndex::new()
    }
}

impl<T> Extend<T> for FlatIndex<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.load(iter);
    }
}

impl<T> FromIterator<T> for FlatIndex<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> FlatIndex<T> {
        FlatIndex { entries: Vec::from_iter(iter) }
    }
}

impl<T> IntoIterator for FlatIndex<T> {
    type Item = T;
    type IntoIter = VecIntoIter<T>;

    fn into_iter(self) -> VecIntoIter<T> {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FlatIndex<T> {
    type Item = &'a T;
    type IntoIter = SliceIter<'a, T>;

    fn into_iter(self) -> SliceIter<'a, T> {
        self.entries.iter()
    }
}
