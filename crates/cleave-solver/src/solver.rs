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

//! # Sharded Exhaustive Solver
//!
//! A high-level orchestrator around the exhaustive engine. It owns three
//! pieces of configuration — symmetry reduction, evaluation strategy, and
//! worker count — and turns a model into a `SearchOutcome`.
//!
//! ## Determinism under parallelism
//!
//! Every labeling evaluation is independent, so the code range shards
//! trivially: contiguous ascending ranges, one per worker, executed under
//! `std::thread::scope`. Each worker accumulates its own `RangeOutcome`;
//! the outcomes are absorbed **in ascending shard order**, which makes the
//! merged tie set — values and order — identical to the sequential pass.
//! A sharded solve is a pure wall-clock optimization, never a semantic one.

use cleave_model::{model::Model, solution::CutSolution};
use cleave_search::{
    eval::{CutEvaluator, DenseMatrixEvaluator, EdgeListEvaluator},
    exhaustive::{ExhaustiveSearch, RangeOutcome, SearchError, SymmetryReduction},
    num::CutNumeric,
    result::SearchOutcome,
    stats::SearchStatisticsBuilder,
};

/// Which `CutEvaluator` the solver scores labelings with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EvaluationStrategy {
    /// The sparse O(E) edge-list evaluator.
    #[default]
    EdgeList,
    /// The dense O(N^2) weight-matrix evaluator. Result-identical to the
    /// edge list; exists for cross-checking and matrix-shaped workloads.
    DenseMatrix,
}

impl std::fmt::Display for EvaluationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvaluationStrategy::EdgeList => write!(f, "EdgeList"),
            EvaluationStrategy::DenseMatrix => write!(f, "DenseMatrix"),
        }
    }
}

/// The configured solver. Construct via `SolverBuilder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solver {
    symmetry: SymmetryReduction,
    strategy: EvaluationStrategy,
    threads: usize,
}

impl Default for Solver {
    fn default() -> Self {
        SolverBuilder::new().build()
    }
}

impl Solver {
    /// Returns a builder with default settings (full enumeration, edge-list
    /// evaluation, single-threaded).
    #[inline]
    pub fn builder() -> SolverBuilder {
        SolverBuilder::new()
    }

    /// Returns the configured symmetry reduction.
    #[inline]
    pub fn symmetry(&self) -> SymmetryReduction {
        self.symmetry
    }

    /// Returns the configured evaluation strategy.
    #[inline]
    pub fn strategy(&self) -> EvaluationStrategy {
        self.strategy
    }

    /// Returns the configured worker count.
    #[inline]
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Solves the model to proven optimality.
    ///
    /// # Errors
    ///
    /// `SearchError::GraphTooLarge` if the code range does not fit a `u64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleave_model::model::from_edge_list;
    /// # use cleave_solver::Solver;
    ///
    /// let model = from_edge_list(3, &[(0, 1, 1.0f64), (1, 2, 1.0), (0, 2, 1.0)]).unwrap();
    /// let outcome = Solver::builder().build().solve(&model).unwrap();
    ///
    /// assert_eq!(outcome.best_cost(), 2.0);
    /// assert_eq!(outcome.optima().len(), 6);
    /// ```
    pub fn solve<T>(&self, model: &Model<T>) -> Result<SearchOutcome<T>, SearchError>
    where
        T: CutNumeric,
    {
        let engine = ExhaustiveSearch::with_symmetry(self.symmetry);
        match self.strategy {
            EvaluationStrategy::EdgeList => {
                self.solve_with(model, &engine, &EdgeListEvaluator::new())
            }
            EvaluationStrategy::DenseMatrix => {
                self.solve_with(model, &engine, &DenseMatrixEvaluator::from_model(model))
            }
        }
    }

    fn solve_with<T, E>(
        &self,
        model: &Model<T>,
        engine: &ExhaustiveSearch,
        evaluator: &E,
    ) -> Result<SearchOutcome<T>, SearchError>
    where
        T: CutNumeric,
        E: CutEvaluator<T> + Sync,
    {
        let started = std::time::Instant::now();
        let code_count = engine.code_count(model)?;

        // Never spawn more workers than there are codes to visit.
        let num_shards = self
            .threads
            .max(1)
            .min(usize::try_from(code_count).unwrap_or(usize::MAX));

        if num_shards <= 1 {
            return engine.search(model, evaluator);
        }

        let worker_results = self.run_sharded(model, engine, evaluator, code_count, num_shards);

        // Absorb in ascending shard order to reproduce the sequential
        // tie set exactly.
        let mut merged = RangeOutcome::empty();
        for result in worker_results {
            merged.absorb(result?);
        }

        debug_assert_eq!(
            merged.evaluated(),
            code_count,
            "sharded solve evaluated {} labelings but the code range holds {}",
            merged.evaluated(),
            code_count
        );

        let (best_cost, optima, evaluated) = merged.into_parts();
        let statistics = SearchStatisticsBuilder::new()
            .labelings_evaluated(evaluated)
            .optima_found(optima.len() as u64)
            .used_threads(num_shards)
            .search_duration(started.elapsed())
            .build();

        Ok(SearchOutcome::new(
            CutSolution::new(best_cost, optima),
            statistics,
        ))
    }

    /// Internal helper to spawn scoped workers and collect their outcomes
    /// in shard order.
    fn run_sharded<T, E>(
        &self,
        model: &Model<T>,
        engine: &ExhaustiveSearch,
        evaluator: &E,
        code_count: u64,
        num_shards: usize,
    ) -> Vec<Result<RangeOutcome<T>, SearchError>>
    where
        T: CutNumeric,
        E: CutEvaluator<T> + Sync,
    {
        let base = code_count / num_shards as u64;
        let extra = code_count % num_shards as u64;

        let mut results = Vec::with_capacity(num_shards);
        std::thread::scope(|scope| {
            let mut handles = Vec::with_capacity(num_shards);
            let mut start = 0u64;

            for shard in 0..num_shards as u64 {
                let len = base + u64::from(shard < extra);
                let range = start..start + len;
                start += len;

                handles.push(scope.spawn(move || engine.search_range(model, evaluator, range)));
            }

            for handle in handles {
                results.push(handle.join().expect("search worker panicked"));
            }
        });

        results
    }
}

/// Builder for `Solver`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverBuilder {
    symmetry: SymmetryReduction,
    strategy: EvaluationStrategy,
    threads: usize,
}

impl SolverBuilder {
    /// Creates a builder with default settings.
    #[inline]
    pub fn new() -> Self {
        Self {
            symmetry: SymmetryReduction::Full,
            strategy: EvaluationStrategy::EdgeList,
            threads: 1,
        }
    }

    /// Sets the symmetry reduction mode.
    #[inline]
    pub fn with_symmetry_reduction(mut self, symmetry: SymmetryReduction) -> Self {
        self.symmetry = symmetry;
        self
    }

    /// Sets the evaluation strategy.
    #[inline]
    pub fn with_evaluation_strategy(mut self, strategy: EvaluationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the worker count. Zero is treated as one.
    #[inline]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Builds the configured `Solver`.
    #[inline]
    pub fn build(self) -> Solver {
        Solver {
            symmetry: self.symmetry,
            strategy: self.strategy,
            threads: self.threads.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleave_model::model::from_edge_list;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn random_model(rng: &mut ChaCha8Rng, n: usize) -> Model<f64> {
        let mut edges = Vec::new();
        for u in 0..n {
            for v in (u + 1)..n {
                if rng.gen_bool(0.6) {
                    edges.push((u, v, rng.gen_range(1..=100) as f64));
                }
            }
        }
        from_edge_list(n, &edges).unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let solver = Solver::builder().build();
        assert_eq!(solver.symmetry(), SymmetryReduction::Full);
        assert_eq!(solver.strategy(), EvaluationStrategy::EdgeList);
        assert_eq!(solver.threads(), 1);

        // Zero threads normalizes to one.
        assert_eq!(Solver::builder().with_threads(0).build().threads(), 1);
    }

    #[test]
    fn test_sequential_solve_triangle() {
        let model = from_edge_list(3, &[(0, 1, 1.0f64), (1, 2, 1.0), (0, 2, 1.0)]).unwrap();
        let outcome = Solver::builder().build().solve(&model).unwrap();

        assert_eq!(outcome.best_cost(), 2.0);
        assert_eq!(outcome.optima().len(), 6);
        assert_eq!(outcome.statistics().labelings_evaluated, 8);
        assert_eq!(outcome.statistics().used_threads, 1);
    }

    #[test]
    fn test_parallel_solve_matches_sequential_exactly() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..10 {
            let n = rng.gen_range(2..=8);
            let model = random_model(&mut rng, n);

            let sequential = Solver::builder().build().solve(&model).unwrap();
            let parallel = Solver::builder()
                .with_threads(4)
                .build()
                .solve(&model)
                .unwrap();

            assert_eq!(parallel.best_cost(), sequential.best_cost());
            // The tie set must match in content *and* order.
            assert_eq!(parallel.optima(), sequential.optima());
            assert_eq!(
                parallel.statistics().labelings_evaluated,
                sequential.statistics().labelings_evaluated
            );
        }
    }

    #[test]
    fn test_more_threads_than_codes() {
        let model = from_edge_list::<f64>(1, &[]).unwrap();
        let outcome = Solver::builder()
            .with_threads(8)
            .build()
            .solve(&model)
            .unwrap();

        assert_eq!(outcome.best_cost(), 0.0);
        assert_eq!(outcome.statistics().labelings_evaluated, 2);
        // At most one worker per labeling code.
        assert!(outcome.statistics().used_threads <= 2);
    }

    #[test]
    fn test_dense_strategy_matches_edge_list() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let model = random_model(&mut rng, 7);

        let sparse = Solver::builder().build().solve(&model).unwrap();
        let dense = Solver::builder()
            .with_evaluation_strategy(EvaluationStrategy::DenseMatrix)
            .with_threads(3)
            .build()
            .solve(&model)
            .unwrap();

        assert_eq!(sparse.best_cost(), dense.best_cost());
        assert_eq!(sparse.optima(), dense.optima());
    }

    #[test]
    fn test_halved_solver_agrees_on_best_cost() {
        let mut rng = ChaCha8Rng::seed_from_u64(29);
        let model = random_model(&mut rng, 6);

        let full = Solver::builder().build().solve(&model).unwrap();
        let halved = Solver::builder()
            .with_symmetry_reduction(SymmetryReduction::Halved)
            .with_threads(2)
            .build()
            .solve(&model)
            .unwrap();

        assert_eq!(full.best_cost(), halved.best_cost());
        assert_eq!(
            halved.statistics().labelings_evaluated * 2,
            full.statistics().labelings_evaluated
        );
    }

    #[test]
    fn test_too_large_graph_is_refused() {
        let model = from_edge_list::<f64>(64, &[]).unwrap();
        let err = Solver::builder()
            .with_threads(4)
            .build()
            .solve(&model)
            .unwrap_err();
        assert!(matches!(err, SearchError::GraphTooLarge { .. }));
    }
}
