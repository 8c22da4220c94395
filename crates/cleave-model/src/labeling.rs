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

//! # Candidate Labelings
//!
//! A `Labeling` assigns each vertex of a model to one of the two sides of a
//! cut, one bit per vertex, indexed by vertex id. It is the candidate
//! solution type shared by the exhaustive search and the expectation
//! estimator.
//!
//! ## Bit-to-vertex mapping
//!
//! The mapping is fixed across the whole toolkit:
//!
//! - `Labeling::from_code(code, n)` interprets `code` as an `n`-bit integer
//!   with **vertex 0 at the least-significant bit**. The exhaustive search
//!   enumerates codes in increasing numeric order under exactly this
//!   convention.
//! - `Labeling::from_bitstring("011")` maps **character position `i` to
//!   vertex `i`** (vertex 0 first). `Display` writes the same orientation
//!   back out.
//!
//! A labeling and its bitwise complement describe the identical cut; see
//! `Labeling::complement`.

use crate::index::VertexIndex;
use fixedbitset::FixedBitSet;

/// The error type for parsing a labeling from a bitstring key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelingParseError {
    /// Byte position of the offending character.
    pub position: usize,
    /// The character that is neither '0' nor '1'.
    pub character: char,
}

impl std::fmt::Display for LabelingParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid character '{}' at position {} in labeling bitstring",
            self.character, self.position
        )
    }
}

impl std::error::Error for LabelingParseError {}

/// An assignment of every vertex to one of the two cut sides.
///
/// Backed by a `FixedBitSet`; bit `i` holds the side of vertex `i`.
#[derive(Clone, PartialEq, Eq)]
pub struct Labeling {
    bits: FixedBitSet,
}

impl Labeling {
    /// Creates a labeling of `num_vertices` bits, all assigned to side `0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleave_model::labeling::Labeling;
    ///
    /// let labeling = Labeling::zeroed(4);
    /// assert_eq!(labeling.len(), 4);
    /// assert_eq!(labeling.count_ones(), 0);
    /// ```
    #[inline]
    pub fn zeroed(num_vertices: usize) -> Self {
        Labeling {
            bits: FixedBitSet::with_capacity(num_vertices),
        }
    }

    /// Creates a labeling from the low `num_vertices` bits of `code`,
    /// with vertex 0 at the least-significant bit.
    ///
    /// Bits of `code` at or above `num_vertices` are ignored.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `num_vertices > 64`; a `u64` code cannot
    /// address more vertices than that.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleave_model::labeling::Labeling;
    ///
    /// // 0b110 = 6: vertex 0 -> 0, vertex 1 -> 1, vertex 2 -> 1.
    /// let labeling = Labeling::from_code(0b110, 3);
    /// assert_eq!(format!("{}", labeling), "011");
    /// ```
    pub fn from_code(code: u64, num_vertices: usize) -> Self {
        debug_assert!(
            num_vertices <= u64::BITS as usize,
            "called `Labeling::from_code` with {} vertices, but a u64 code addresses at most {}",
            num_vertices,
            u64::BITS
        );

        let mut bits = FixedBitSet::with_capacity(num_vertices);
        for vertex in 0..num_vertices {
            if (code >> vertex) & 1 == 1 {
                bits.insert(vertex);
            }
        }
        Labeling { bits }
    }

    /// Parses a labeling from a bitstring of '0'/'1' characters, character
    /// position `i` labeling vertex `i`.
    ///
    /// The length is taken from the string; callers that require a specific
    /// length (e.g., the expectation estimator) check it against the model.
    ///
    /// # Errors
    ///
    /// `LabelingParseError` on any character other than '0' or '1'.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleave_model::labeling::Labeling;
    /// # use cleave_model::index::VertexIndex;
    ///
    /// let labeling = Labeling::from_bitstring("011").unwrap();
    /// assert!(!labeling.get(VertexIndex::new(0)));
    /// assert!(labeling.get(VertexIndex::new(1)));
    ///
    /// assert!(Labeling::from_bitstring("01x").is_err());
    /// ```
    pub fn from_bitstring(s: &str) -> Result<Self, LabelingParseError> {
        let mut bits = FixedBitSet::with_capacity(s.len());
        for (position, character) in s.chars().enumerate() {
            match character {
                '0' => {}
                '1' => bits.insert(position),
                _ => {
                    return Err(LabelingParseError {
                        position,
                        character,
                    });
                }
            }
        }
        Ok(Labeling { bits })
    }

    /// Returns the number of vertices this labeling covers.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the labeling covers no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the side of the specified vertex (`false` = side 0).
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `vertex_index` is not in `0..len()`.
    #[inline]
    pub fn get(&self, vertex_index: VertexIndex) -> bool {
        let index = vertex_index.get();
        debug_assert!(
            index < self.len(),
            "called `Labeling::get` with vertex index out of bounds: the len is {} but the index is {}",
            self.len(),
            index
        );

        self.bits.contains(index)
    }

    /// Assigns the specified vertex to a side.
    ///
    /// # Panics
    ///
    /// Panics if `vertex_index` is not in `0..len()`.
    #[inline]
    pub fn set(&mut self, vertex_index: VertexIndex, side: bool) {
        let index = vertex_index.get();
        debug_assert!(
            index < self.len(),
            "called `Labeling::set` with vertex index out of bounds: the len is {} but the index is {}",
            self.len(),
            index
        );

        self.bits.set(index, side);
    }

    /// Returns the number of vertices assigned to side `1`.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Returns the bitwise complement of this labeling.
    ///
    /// A labeling and its complement describe the identical cut; the cut
    /// value is invariant under this operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleave_model::labeling::Labeling;
    ///
    /// let labeling = Labeling::from_bitstring("011").unwrap();
    /// assert_eq!(format!("{}", labeling.complement()), "100");
    /// ```
    #[inline]
    pub fn complement(&self) -> Labeling {
        let mut bits = self.bits.clone();
        bits.toggle_range(..);
        Labeling { bits }
    }

    /// Returns the numeric code of this labeling (vertex 0 at the
    /// least-significant bit), the inverse of `from_code`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `len() > 64`.
    pub fn code(&self) -> u64 {
        debug_assert!(
            self.len() <= u64::BITS as usize,
            "called `Labeling::code` on a labeling of {} vertices, but a u64 code addresses at most {}",
            self.len(),
            u64::BITS
        );

        let mut code = 0u64;
        for vertex in self.bits.ones() {
            code |= 1u64 << vertex;
        }
        code
    }
}

impl std::fmt::Display for Labeling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for vertex in 0..self.len() {
            f.write_str(if self.bits.contains(vertex) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Labeling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Labeling({})", self)
    }
}

impl std::hash::Hash for Labeling {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for vertex in self.bits.ones() {
            state.write_usize(vertex);
        }
    }
}

impl std::str::FromStr for Labeling {
    type Err = LabelingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Labeling::from_bitstring(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::VertexIndex;

    #[test]
    fn test_from_code_lsb_first() {
        // 5 = 0b101: vertices 0 and 2 on side 1.
        let labeling = Labeling::from_code(5, 3);
        assert!(labeling.get(VertexIndex::new(0)));
        assert!(!labeling.get(VertexIndex::new(1)));
        assert!(labeling.get(VertexIndex::new(2)));
        assert_eq!(format!("{}", labeling), "101");
    }

    #[test]
    fn test_from_code_ignores_high_bits() {
        let labeling = Labeling::from_code(0b1111, 2);
        assert_eq!(labeling.len(), 2);
        assert_eq!(labeling.code(), 0b11);
    }

    #[test]
    fn test_code_roundtrip() {
        for code in 0u64..16 {
            assert_eq!(Labeling::from_code(code, 4).code(), code);
        }
    }

    #[test]
    fn test_parse_and_display() {
        let labeling: Labeling = "0110".parse().unwrap();
        assert_eq!(labeling.len(), 4);
        assert_eq!(labeling.count_ones(), 2);
        assert_eq!(format!("{}", labeling), "0110");
    }

    #[test]
    fn test_parse_rejects_non_binary() {
        let err = Labeling::from_bitstring("0a1").unwrap_err();
        assert_eq!(
            err,
            LabelingParseError {
                position: 1,
                character: 'a'
            }
        );
    }

    #[test]
    fn test_complement() {
        let labeling = Labeling::from_bitstring("0101").unwrap();
        let complement = labeling.complement();
        assert_eq!(format!("{}", complement), "1010");
        assert_eq!(complement.complement(), labeling);
    }

    #[test]
    fn test_set_and_get() {
        let mut labeling = Labeling::zeroed(3);
        labeling.set(VertexIndex::new(2), true);
        assert!(labeling.get(VertexIndex::new(2)));
        assert_eq!(format!("{}", labeling), "001");
    }

    #[test]
    fn test_hash_consistency() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let a = Labeling::from_bitstring("0101").unwrap();
        let b = Labeling::from_code(0b1010, 4);
        assert_eq!(a, b);

        let mut ha = DefaultHasher::new();
        let mut hb = DefaultHasher::new();
        a.hash(&mut ha);
        b.hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }
}
