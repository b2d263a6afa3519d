// Copyright 2016 spatial-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Flat, insertion-ordered collection with a spatial index API

mod identity;
mod map;
mod options;
mod snapshot;

pub use crate::flat::identity::EntryIdentity;
pub use crate::flat::map::FlatIndex;
pub use crate::flat::options::{IndexOptions, D_MAX_ENTRIES};
pub use crate::flat::snapshot::Snapshot;
