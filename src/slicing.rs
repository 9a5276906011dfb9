use std::ops::RangeInclusive;

/// Inclusive range slicing over any slice, e.g. `letters.slice_inclusive(0..=2)`.
pub trait SliceExt<T> {
    /// Returns `None` when `end` is out of bounds. A range with `start > end`
    /// is empty and yields an empty slice.
    fn slice_inclusive(&self, range: RangeInclusive<usize>) -> Option<&[T]>;
}

impl<T> SliceExt<T> for [T] {
    fn slice_inclusive(&self, range: RangeInclusive<usize>) -> Option<&[T]> {
        let (start, end) = range.into_inner();
        log::trace!("slicing {start}..={end} out of {}", self.len());
        if start > end {
            return Some(&self[..0]);
        }
        self.get(start..=end)
    }
}

pub fn letters(range: RangeInclusive<char>) -> Vec<char> {
    range.collect()
}
