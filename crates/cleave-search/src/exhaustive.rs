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

//! # Exhaustive Max-Cut Search
//!
//! Brute-force enumeration of every candidate labeling, scoring each one
//! through a `CutEvaluator` and retaining the maximum together with every
//! labeling that attains it.
//!
//! ## Enumeration order
//!
//! Labelings are visited as `u64` codes in increasing numeric order, with
//! **vertex 0 at the least-significant bit** (see `Labeling::from_code`).
//! This order is part of the engine's contract: the tie set of the returned
//! solution preserves it.
//!
//! ## Symmetry reduction
//!
//! A labeling and its bitwise complement describe the identical cut, so the
//! upper half of the code range mirrors the lower half. With
//! `SymmetryReduction::Halved` the engine enumerates only the codes with
//! the bit of vertex N-1 clear — exactly `2^(N-1)` candidates — and still
//! proves the same optimal cost. The tie set then contains only the
//! canonical (high-bit-zero) representative of each optimal cut. Since
//! `2^N` is even for every N >= 1, halving the range drops no labeling.
//!
//! ## Complexity
//!
//! Exponential by design: `2^N` (or `2^(N-1)`) evaluations, each O(E).
//! Intended for vertex counts small enough for that to be practical; the
//! engine refuses instances whose code range does not fit a `u64`.

use crate::{
    eval::{CutEvaluator, EvaluationError},
    num::CutNumeric,
    result::SearchOutcome,
    stats::SearchStatisticsBuilder,
};
use cleave_model::{labeling::Labeling, model::Model, solution::CutSolution};
use std::ops::Range;

/// How much of the labeling space to enumerate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SymmetryReduction {
    /// Enumerate all `2^N` labelings.
    #[default]
    Full,
    /// Enumerate the `2^(N-1)` labelings whose highest vertex is on side 0,
    /// exploiting `cost(x) == cost(complement(x))`.
    Halved,
}

impl SymmetryReduction {
    /// Returns the largest vertex count whose code range fits a `u64`
    /// under this reduction.
    #[inline]
    pub fn max_vertices(&self) -> usize {
        match self {
            SymmetryReduction::Full => 63,
            SymmetryReduction::Halved => 64,
        }
    }
}

impl std::fmt::Display for SymmetryReduction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymmetryReduction::Full => write!(f, "Full"),
            SymmetryReduction::Halved => write!(f, "Halved"),
        }
    }
}

/// The error type for the exhaustive search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The code range `2^N` (or `2^(N-1)`) does not fit a `u64`.
    GraphTooLarge {
        num_vertices: usize,
        max_vertices: usize,
    },
    /// An evaluator rejected a labeling.
    Evaluation(EvaluationError),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphTooLarge {
                num_vertices,
                max_vertices,
            } => write!(
                f,
                "Cannot enumerate a model with {} vertices: the limit is {} (and exhaustive \
                 search is only practical far below it)",
                num_vertices, max_vertices
            ),
            Self::Evaluation(e) => write!(f, "Evaluation error: {}", e),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<EvaluationError> for SearchError {
    fn from(e: EvaluationError) -> Self {
        Self::Evaluation(e)
    }
}

/// The running maximum over a contiguous code range.
///
/// Workers of a sharded search each accumulate one of these; `absorb`
/// combines them in ascending shard order, which reproduces the sequential
/// result exactly (strictly better replaces, equal appends).
#[derive(Debug, Clone, PartialEq)]
pub struct RangeOutcome<T> {
    best_cost: T,
    optima: Vec<Labeling>,
    evaluated: u64,
}

impl<T> RangeOutcome<T>
where
    T: CutNumeric,
{
    /// Creates an outcome over the empty range.
    #[inline]
    pub fn empty() -> Self {
        RangeOutcome {
            best_cost: T::neg_infinity(),
            optima: Vec::new(),
            evaluated: 0,
        }
    }

    /// Returns the best cost seen, or negative infinity over the empty range.
    #[inline]
    pub fn best_cost(&self) -> T {
        self.best_cost
    }

    /// Returns the labelings attaining `best_cost`, in discovery order.
    #[inline]
    pub fn optima(&self) -> &[Labeling] {
        &self.optima
    }

    /// Returns the number of labelings evaluated.
    #[inline]
    pub fn evaluated(&self) -> u64 {
        self.evaluated
    }

    /// Returns `true` if no labeling was evaluated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.optima.is_empty()
    }

    /// Records one evaluated labeling.
    #[inline]
    fn record(&mut self, cost: T, labeling: Labeling) {
        if cost > self.best_cost {
            self.best_cost = cost;
            self.optima.clear();
            self.optima.push(labeling);
        } else if cost == self.best_cost {
            self.optima.push(labeling);
        }
        self.evaluated += 1;
    }

    /// Folds the outcome of a **later** code range into this one.
    ///
    /// A strictly better shard discards the current tie set; an equal shard
    /// appends its ties behind the existing ones. Absorbing shards in
    /// ascending range order therefore yields the same tie set, in the same
    /// order, as one sequential pass.
    pub fn absorb(&mut self, later: RangeOutcome<T>) {
        self.evaluated += later.evaluated;
        if later.optima.is_empty() {
            return;
        }

        if later.best_cost > self.best_cost || self.optima.is_empty() {
            self.best_cost = later.best_cost;
            self.optima = later.optima;
        } else if later.best_cost == self.best_cost {
            self.optima.extend(later.optima);
        }
    }

    /// Consumes the outcome and returns `(best_cost, optima, evaluated)`.
    #[inline]
    pub fn into_parts(self) -> (T, Vec<Labeling>, u64) {
        (self.best_cost, self.optima, self.evaluated)
    }
}

impl<T> Default for RangeOutcome<T>
where
    T: CutNumeric,
{
    fn default() -> Self {
        Self::empty()
    }
}

/// The brute-force search engine.
///
/// Stateless apart from its configuration; one engine value can run any
/// number of searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExhaustiveSearch {
    symmetry: SymmetryReduction,
}

impl ExhaustiveSearch {
    /// Creates an engine that enumerates the full labeling space.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given symmetry reduction.
    #[inline]
    pub fn with_symmetry(symmetry: SymmetryReduction) -> Self {
        Self { symmetry }
    }

    /// Returns the configured symmetry reduction.
    #[inline]
    pub fn symmetry(&self) -> SymmetryReduction {
        self.symmetry
    }

    /// Returns the number of labeling codes this engine will enumerate for
    /// the given model: `2^N` under `Full`, `2^(N-1)` under `Halved`.
    ///
    /// # Errors
    ///
    /// `SearchError::GraphTooLarge` if the count does not fit a `u64`.
    pub fn code_count<T>(&self, model: &Model<T>) -> Result<u64, SearchError>
    where
        T: CutNumeric,
    {
        let num_vertices = model.num_vertices();
        let max_vertices = self.symmetry.max_vertices();
        if num_vertices > max_vertices {
            return Err(SearchError::GraphTooLarge {
                num_vertices,
                max_vertices,
            });
        }

        let exponent = match self.symmetry {
            SymmetryReduction::Full => num_vertices,
            SymmetryReduction::Halved => num_vertices - 1,
        };
        Ok(1u64 << exponent)
    }

    /// Enumerates every labeling and returns the proven optimum with all
    /// ties, plus run statistics.
    ///
    /// # Errors
    ///
    /// `SearchError::GraphTooLarge` if the code range does not fit a `u64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleave_model::model::from_edge_list;
    /// # use cleave_search::eval::EdgeListEvaluator;
    /// # use cleave_search::exhaustive::ExhaustiveSearch;
    ///
    /// let model = from_edge_list(2, &[(0, 1, 5.0f64)]).unwrap();
    /// let outcome = ExhaustiveSearch::new()
    ///     .search(&model, &EdgeListEvaluator::new())
    ///     .unwrap();
    ///
    /// assert_eq!(outcome.best_cost(), 5.0);
    /// assert_eq!(outcome.statistics().labelings_evaluated, 4);
    /// ```
    pub fn search<T, E>(
        &self,
        model: &Model<T>,
        evaluator: &E,
    ) -> Result<SearchOutcome<T>, SearchError>
    where
        T: CutNumeric,
        E: CutEvaluator<T>,
    {
        let started = std::time::Instant::now();

        let code_count = self.code_count(model)?;
        let partial = self.search_range(model, evaluator, 0..code_count)?;

        let (best_cost, optima, evaluated) = partial.into_parts();
        debug_assert_eq!(
            evaluated, code_count,
            "exhaustive search evaluated {} labelings but the code range holds {}",
            evaluated, code_count
        );

        let statistics = SearchStatisticsBuilder::new()
            .labelings_evaluated(evaluated)
            .optima_found(optima.len() as u64)
            .used_threads(1)
            .search_duration(started.elapsed())
            .build();

        Ok(SearchOutcome::new(
            CutSolution::new(best_cost, optima),
            statistics,
        ))
    }

    /// Enumerates one contiguous code range.
    ///
    /// Building block for sharded parallel searches: split `0..code_count`
    /// into contiguous ranges, run each through `search_range`, and `absorb`
    /// the outcomes in ascending order.
    pub fn search_range<T, E>(
        &self,
        model: &Model<T>,
        evaluator: &E,
        codes: Range<u64>,
    ) -> Result<RangeOutcome<T>, SearchError>
    where
        T: CutNumeric,
        E: CutEvaluator<T>,
    {
        let num_vertices = model.num_vertices();
        debug_assert!(
            self.code_count(model)
                .is_ok_and(|count| codes.end <= count),
            "called `ExhaustiveSearch::search_range` with code range ending at {} outside the enumerable space",
            codes.end
        );

        let mut partial = RangeOutcome::empty();
        for code in codes {
            let labeling = Labeling::from_code(code, num_vertices);
            let cost = evaluator.evaluate(model, &labeling)?;
            partial.record(cost, labeling);
        }
        Ok(partial)
    }
}
