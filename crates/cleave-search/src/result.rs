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

use crate::stats::SearchStatistics;
use cleave_model::{labeling::Labeling, solution::CutSolution};
use num_traits::Float;

/// The outcome of an exhaustive search: the proven-optimal solution plus
/// the statistics of the run.
///
/// Exhaustive enumeration over a validated model always terminates with an
/// optimum, so unlike iterative solvers there is no infeasible/unknown case
/// to represent.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<T> {
    solution: CutSolution<T>,
    statistics: SearchStatistics,
}

impl<T> SearchOutcome<T>
where
    T: Float,
{
    #[inline]
    pub fn new(solution: CutSolution<T>, statistics: SearchStatistics) -> Self {
        Self {
            solution,
            statistics,
        }
    }

    /// Returns the proven-optimal solution.
    #[inline]
    pub fn solution(&self) -> &CutSolution<T> {
        &self.solution
    }

    /// Returns the statistics of the run.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns the optimal cut value. Shorthand for `solution().best_cost()`.
    #[inline]
    pub fn best_cost(&self) -> T {
        self.solution.best_cost()
    }

    /// Returns all optimal labelings in discovery order.
    /// Shorthand for `solution().optima()`.
    #[inline]
    pub fn optima(&self) -> &[Labeling] {
        self.solution.optima()
    }

    /// Consumes the outcome and returns its parts.
    #[inline]
    pub fn into_parts(self) -> (CutSolution<T>, SearchStatistics) {
        (self.solution, self.statistics)
    }
}

impl<T> std::fmt::Display for SearchOutcome<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.solution, self.statistics)
    }
}
