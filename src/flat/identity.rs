// Copyright 2016 spatial-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::rc::Rc;
use std::sync::Arc;

/// What `FlatIndex::remove` considers "the same entry"
///
/// Shared handles compare by allocation, so two `Rc`s holding equal values are
/// still different entries. Immutable scalars and strings have no identity
/// apart from their value and compare by value.
///
/// There is intentionally no blanket impl over `PartialEq`. Entry types that
/// are neither handles nor plain values should use `FlatIndex::remove_by`.
pub trait EntryIdentity {
    fn is_same_entry(&self, other: &Self) -> bool;
}

impl<U: ?Sized> EntryIdentity for Rc<U> {
    fn is_same_entry(&self, other: &Rc<U>) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<U: ?Sized> EntryIdentity for Arc<U> {
    fn is_same_entry(&self, other: &Arc<U>) -> bool {
        Arc::ptr_eq(self, other)
    }
}

macro_rules! value_identity {
    ($($t:ty),*) => {
        $(
            impl EntryIdentity for $t {
                fn is_same_entry(&self, other: &$t) -> bool {
                    self == other
                }
            }
        )*
    }
}

value_identity!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool, String);

impl<'a> EntryIdentity for &'a str {
    fn is_same_entry(&self, other: &&'a str) -> bool {
        self == other
    }
}
