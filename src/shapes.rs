// Copyright 2016 spatial-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Query region shapes
//!
//! `FlatIndex::search` accepts any value as its query region and never looks
//! at it. These types exist so call sites can still describe the region they
//! mean to ask for.

use generic_array::sequence::GenericSequence;
use generic_array::{ArrayLength, GenericArray};
use num::{Bounded, Float, One};
use std::fmt::Debug;
use std::ops::{Deref, DerefMut};
use typenum::U2;

/// An n-dimensional point
#[derive(Debug, Clone, PartialEq)]
pub struct Point<P, DIM>
    where DIM: ArrayLength<P>
{
    pub coords: GenericArray<P, DIM>,
}

impl<P, DIM> Point<P, DIM>
    where P: Float + Debug,
          DIM: ArrayLength<P>
{
    /// New Point from a `GenericArray`
    pub fn new(coords: GenericArray<P, DIM>) -> Point<P, DIM> {
        Point { coords: coords }
    }

    /// New Point from a slice
    ///
    /// # Panics
    ///
    /// Panics if the slice length doesn't match `DIM`
    pub fn from_slice(slice: &[P]) -> Point<P, DIM> {
        Point::new(GenericArray::from_slice(slice).clone())
    }
}

impl<P, DIM> Deref for Point<P, DIM>
    where DIM: ArrayLength<P>
{
    type Target = [P];

    fn deref(&self) -> &[P] {
        self.coords.deref()
    }
}

/// An n-dimensional rectangle
///
/// A rectangle whose corners are at (x1, y1), (x2, y2) has the edges (x1, x2), (y1, y2)
#[derive(Debug, Clone, PartialEq)]
pub struct Rect<P, DIM>
    where DIM: ArrayLength<(P, P)>
{
    pub edges: GenericArray<(P, P), DIM>,
}

/// The conventional 2d `{minX, minY, maxX, maxY}` query box
pub type BBox = Rect<f64, U2>;

impl<P, DIM> Rect<P, DIM>
    where P: Float + Bounded + Debug,
          DIM: ArrayLength<P> + ArrayLength<(P, P)>
{
    /// New Rect from a `GenericArray` of edges. Edges are reordered so that min <= max.
    ///
    /// Infinite edges are fine, `-inf..inf` is the usual "everything" region.
    pub fn new(mut edges: GenericArray<(P, P), DIM>) -> Rect<P, DIM> {
        for &mut (ref mut x, ref mut y) in edges.iter_mut() {
            let (min, max) = (x.min(*y), x.max(*y));
            *x = min;
            *y = max;
        }
        Rect { edges: edges }
    }

    /// Smallest Rect containing both corners
    pub fn from_corners(x: &Point<P, DIM>, y: &Point<P, DIM>) -> Rect<P, DIM> {
        let mut rect = Rect::max_inverted();
        rect.expand_to_fit(x);
        rect.expand_to_fit(y);
        rect
    }

    /// An inverted Rect where every dimension's (x, y) edges are (MAX, MIN). Simplifies finding boundaries.
    pub fn max_inverted() -> Rect<P, DIM> {
        Rect { edges: GenericArray::generate(|_| (Bounded::max_value(), Bounded::min_value())) }
    }

    /// The largest possible rect
    pub fn max() -> Rect<P, DIM> {
        Rect { edges: GenericArray::generate(|_| (Bounded::min_value(), Bounded::max_value())) }
    }

    /// Grow the rect to minimally fit the point
    pub fn expand_to_fit(&mut self, point: &Point<P, DIM>) {
        for (&mut (ref mut x, ref mut y), &z) in izip!(self.edges.iter_mut(), point.iter()) {
            *x = x.min(z);
            *y = y.max(z);
        }
    }

    /// The rect's dimension count
    pub fn dim(&self) -> usize {
        self.edges.len()
    }

    pub fn min_for_axis(&self, dim: usize) -> P {
        self.edges[dim].0
    }

    pub fn max_for_axis(&self, dim: usize) -> P {
        self.edges[dim].1
    }

    /// Product of every edge length
    pub fn area(&self) -> P {
        self.edges.iter().fold(One::one(), |area, &(x, y)| area * (y - x))
    }
}

impl BBox {
    /// New 2d box in the `minX, minY, maxX, maxY` order spatial index callers use
    pub fn from_bbox(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BBox {
        Rect::new(arr![(f64, f64); (min_x, max_x), (min_y, max_y)])
    }
}

impl<P, DIM> Deref for Rect<P, DIM>
    where DIM: ArrayLength<(P, P)>
{
    type Target = [(P, P)];

    fn deref(&self) -> &[(P, P)] {
        self.edges.deref()
    }
}

impl<P, DIM> DerefMut for Rect<P, DIM>
    where DIM: ArrayLength<(P, P)>
{
    fn deref_mut(&mut self) -> &mut [(P, P)] {
        self.edges.deref_mut()
    }
}
