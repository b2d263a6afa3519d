// Copyright 2016 spatial-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

/// Remove the first element matching f, shifting every later element down by one
pub trait RemoveFirst<T> {
    fn remove_first<F: FnMut(&T) -> bool>(&mut self, f: F) -> Option<T>;
}

impl<T> RemoveFirst<T> for Vec<T> {
    fn remove_first<F: FnMut(&T) -> bool>(&mut self, f: F) -> Option<T> {
        match self.iter().position(f) {
            Some(i) => Some(self.remove(i)),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_first() {
        let mut v = vec![1, 2, 3, 2, 1];

        let removed = v.remove_first(|x| *x == 2);
        assert_eq!(Some(2), removed);
        assert_eq!(vec![1, 3, 2, 1], v);

        // only the first match goes
        let removed = v.remove_first(|x| *x == 1);
        assert_eq!(Some(1), removed);
        assert_eq!(vec![3, 2, 1], v);
    }

    #[test]
    fn remove_first_missing() {
        let mut v = vec![1, 2, 3];
        assert_eq!(None, v.remove_first(|x| *x == 7));
        assert_eq!(vec![1, 2, 3], v);

        let mut empty: Vec<i32> = Vec::new();
        assert_eq!(None, empty.remove_first(|_| true));
    }
}
