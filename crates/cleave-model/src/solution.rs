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

use crate::labeling::Labeling;
use num_traits::Float;

/// The result of an exhaustive Max-Cut search.
///
/// Holds the optimal cut value together with **every** labeling that attains
/// it, in the order the search discovered them. Ties are first-class: a
/// graph usually has several optimal labelings (at minimum, each optimum's
/// bitwise complement describes the same cut).
#[derive(Clone, Debug, PartialEq)]
pub struct CutSolution<T> {
    /// The maximal total weight of crossing edges.
    best_cost: T,

    /// All labelings attaining `best_cost`, in discovery order.
    optima: Vec<Labeling>,
}

impl<T> CutSolution<T>
where
    T: Float,
{
    /// Constructs a new `CutSolution`.
    ///
    /// # Panics
    ///
    /// Panics if `optima` is empty; a search over a non-empty labeling space
    /// always discovers at least one optimum.
    pub fn new(best_cost: T, optima: Vec<Labeling>) -> Self {
        assert!(
            !optima.is_empty(),
            "called CutSolution::new with an empty optima set"
        );

        Self { best_cost, optima }
    }

    /// Returns the optimal cut value.
    #[inline]
    pub fn best_cost(&self) -> T {
        self.best_cost
    }

    /// Returns all optimal labelings in discovery order.
    #[inline]
    pub fn optima(&self) -> &[Labeling] {
        &self.optima
    }

    /// Returns the number of optimal labelings.
    #[inline]
    pub fn num_optima(&self) -> usize {
        self.optima.len()
    }

    /// Returns `true` if the given labeling is one of the discovered optima.
    #[inline]
    pub fn contains(&self, labeling: &Labeling) -> bool {
        self.optima.iter().any(|optimum| optimum == labeling)
    }

    /// Consumes the solution and returns `(best_cost, optima)`.
    #[inline]
    pub fn into_parts(self) -> (T, Vec<Labeling>) {
        (self.best_cost, self.optima)
    }
}

impl<T> std::fmt::Display for CutSolution<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Cut Summary")?;
        writeln!(f, "   Best Cost: {}", self.best_cost)?;
        writeln!(f, "   Optimal Labelings ({}):", self.num_optima())?;
        for labeling in &self.optima {
            writeln!(f, "   - {}", labeling)?;
        }
        Ok(())
    }
}
