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

//! # Cut Numeric Trait
//!
//! Unified numeric bounds for the evaluation and search components.
//! `CutNumeric` specifies the floating-point capabilities required by the
//! engine: edge weights are positive reals, cut values are their sums, and
//! the running best initializes to negative infinity, so the natural carrier
//! is an IEEE float rather than an integer.
//!
//! ## Motivation
//!
//! The engine should stay generic over the float width (`f32` for compact
//! instances, `f64` by default) while keeping signatures short. This trait
//! collects the necessary bounds into a single alias.
//!
//! ## Highlights
//!
//! - Requires `num_traits::Float` for ordering, infinities, and arithmetic.
//! - Requires `FromPrimitive` to convert sample counts (`u64`) into
//!   probabilities.
//! - `Send + Sync` so models and outcomes can cross thread boundaries in
//!   the sharded solver.

use num_traits::{Float, FromPrimitive};

/// A trait alias for numeric types that can carry edge weights and cut
/// values. Satisfied by `f32` and `f64`.
pub trait CutNumeric:
    Float + FromPrimitive + std::iter::Sum + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

impl<T> CutNumeric for T where
    T: Float + FromPrimitive + std::iter::Sum + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

#[cfg(test)]
mod tests {
    use super::CutNumeric;

    fn assert_cut_numeric<T: CutNumeric>() {}

    #[test]
    fn test_float_types_satisfy_alias() {
        assert_cut_numeric::<f32>();
        assert_cut_numeric::<f64>();
    }
}
