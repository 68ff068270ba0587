//! Read-only view over an ordered series that the splitters window over.
//!
//! The engine never inspects elements; it only needs the element count and a
//! way to materialize a contiguous `[start, end)` range. Implementations exist
//! for plain slices and vectors, polars `Series` and polars `DataFrame` (one
//! element per row).

use polars::prelude::*;
use std::ops::Range;

pub trait Sequence {
    /// Materialized contiguous range of elements
    type Window;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy out `range`. Callers guarantee `range.end <= self.len()`.
    fn window(&self, range: Range<usize>) -> Self::Window;
}

impl<T: Clone> Sequence for [T] {
    type Window = Vec<T>;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn window(&self, range: Range<usize>) -> Vec<T> {
        self[range].to_vec()
    }
}

impl<T: Clone> Sequence for Vec<T> {
    type Window = Vec<T>;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn window(&self, range: Range<usize>) -> Vec<T> {
        self[range].to_vec()
    }
}

impl Sequence for Series {
    type Window = Series;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn window(&self, range: Range<usize>) -> Series {
        self.slice(range.start as i64, range.len())
    }
}

impl Sequence for DataFrame {
    type Window = DataFrame;

    fn len(&self) -> usize {
        self.height()
    }

    fn window(&self, range: Range<usize>) -> DataFrame {
        self.slice(range.start as i64, range.len())
    }
}
