// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Sample Histograms
//!
//! The distribution type consumed by the expectation estimator: a mapping
//! from labeling bitstrings to observed counts, as produced by repeated
//! sampling of an external process (e.g., measuring a parameterized quantum
//! circuit for a fixed number of shots).
//!
//! ## Iteration order
//!
//! Entries iterate in **first-insertion order**, not hash order. The
//! estimator's tie policy (last observed wins) makes iteration order
//! caller-visible, so the histogram pins it down deterministically; a plain
//! hash map here would make results depend on hasher state. A hash index is
//! kept alongside purely to accumulate repeated keys in O(1).

use rustc_hash::FxHashMap;

/// An insertion-ordered histogram of labeling bitstrings.
///
/// Counts are non-negative and need not sum to any particular total; the
/// estimator takes the shot count separately (caller contract).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleHistogram {
    keys: Vec<String>,
    counts: Vec<u64>,
    index: FxHashMap<String, usize>,
}

impl SampleHistogram {
    /// Creates an empty histogram.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` observations of `bitstring`.
    ///
    /// A repeated key accumulates into its existing entry and keeps its
    /// original position in the iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleave_search::histogram::SampleHistogram;
    ///
    /// let mut histogram = SampleHistogram::new();
    /// histogram.record("01", 700);
    /// histogram.record("10", 300);
    /// histogram.record("01", 24);
    ///
    /// assert_eq!(histogram.len(), 2);
    /// assert_eq!(histogram.count("01"), 724);
    /// assert_eq!(histogram.total_count(), 1024);
    /// ```
    pub fn record(&mut self, bitstring: &str, count: u64) {
        match self.index.get(bitstring) {
            Some(&slot) => self.counts[slot] += count,
            None => {
                self.index.insert(bitstring.to_owned(), self.keys.len());
                self.keys.push(bitstring.to_owned());
                self.counts.push(count);
            }
        }
    }

    /// Returns the count recorded for `bitstring` (zero if absent).
    #[inline]
    pub fn count(&self, bitstring: &str) -> u64 {
        self.index
            .get(bitstring)
            .map_or(0, |&slot| self.counts[slot])
    }

    /// Returns the number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if no key was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the sum of all counts.
    #[inline]
    pub fn total_count(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Iterates over `(bitstring, count)` pairs in first-insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.keys
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().copied())
    }
}

impl<S> FromIterator<(S, u64)> for SampleHistogram
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut histogram = SampleHistogram::new();
        for (bitstring, count) in iter {
            histogram.record(bitstring.as_ref(), count);
        }
        histogram
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_preserved() {
        let histogram: SampleHistogram =
            [("11", 1u64), ("00", 2), ("10", 3)].into_iter().collect();

        let keys: Vec<&str> = histogram.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["11", "00", "10"]);
    }

    #[test]
    fn test_repeated_key_accumulates_in_place() {
        let mut histogram = SampleHistogram::new();
        histogram.record("01", 10);
        histogram.record("11", 5);
        histogram.record("01", 7);

        let entries: Vec<(&str, u64)> = histogram.iter().collect();
        assert_eq!(entries, vec![("01", 17), ("11", 5)]);
    }

    #[test]
    fn test_zero_counts_are_representable() {
        let mut histogram = SampleHistogram::new();
        histogram.record("0", 0);
        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram.count("0"), 0);
        assert_eq!(histogram.total_count(), 0);
    }

    #[test]
    fn test_missing_key_counts_zero() {
        let histogram = SampleHistogram::new();
        assert_eq!(histogram.count("0101"), 0);
        assert!(histogram.is_empty());
    }
}
