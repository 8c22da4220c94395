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

//! # Expectation Estimation
//!
//! Scores a sample histogram against the cut cost function: every distinct
//! labeling key is evaluated once, weighted by its observed frequency, and
//! the probability-weighted average is returned. Along the way each key
//! passes through a `BestTracker`, so after one call the tracker holds the
//! best-scoring labeling among all distinct keys (last tie wins, in the
//! histogram's insertion order).
//!
//! This is the classical half of a sampling-based optimization loop: an
//! external process proposes a distribution over labelings, this estimator
//! turns it into a scalar objective and remembers the champion.

use crate::{
    eval::{CutEvaluator, EvaluationError},
    histogram::SampleHistogram,
    incumbent::BestTracker,
    num::CutNumeric,
};
use cleave_model::{
    labeling::{Labeling, LabelingParseError},
    model::Model,
};

/// The error type for expectation estimation.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimateError {
    /// The shot count is zero; no meaningful average exists.
    ZeroShots,
    /// A histogram key is not a bitstring of '0'/'1' characters.
    KeyParse {
        key: String,
        source: LabelingParseError,
    },
    /// A histogram key does not cover exactly one bit per model vertex.
    KeyLengthMismatch {
        key: String,
        expected: usize,
        actual: usize,
    },
    /// An evaluator rejected a labeling.
    Evaluation(EvaluationError),
}

impl std::fmt::Display for EstimateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroShots => {
                write!(f, "Cannot average over zero shots")
            }
            Self::KeyParse { key, source } => {
                write!(f, "Malformed histogram key '{}': {}", key, source)
            }
            Self::KeyLengthMismatch {
                key,
                expected,
                actual,
            } => write!(
                f,
                "Histogram key '{}' covers {} vertices but the model has {}",
                key, actual, expected
            ),
            Self::Evaluation(e) => write!(f, "Evaluation error: {}", e),
        }
    }
}

impl std::error::Error for EstimateError {}

impl From<EvaluationError> for EstimateError {
    fn from(e: EvaluationError) -> Self {
        Self::Evaluation(e)
    }
}

/// The expectation-value estimator.
///
/// Owns the scoring strategy; the model, histogram, shot count, and tracker
/// are supplied per call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpectationEstimator<E> {
    evaluator: E,
}

impl<E> ExpectationEstimator<E> {
    /// Creates an estimator scoring through the given evaluator.
    #[inline]
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    /// Returns the underlying evaluator.
    #[inline]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Computes the probability-weighted average cut value of `histogram`.
    ///
    /// For each `(key, count)` entry, `probability = count / shots` and the
    /// key's cost is obtained through `tracker.observe`, so the tracker ends
    /// up holding the best-scoring distinct key as a side effect.
    ///
    /// Counts are **not** validated against `shots`: if they do not sum to
    /// it, the result is simply not a normalized average (caller contract).
    ///
    /// # Errors
    ///
    /// - `ZeroShots` if `shots == 0` (fail fast; no partial average).
    /// - `KeyParse` / `KeyLengthMismatch` on malformed histogram keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleave_model::model::from_edge_list;
    /// # use cleave_search::eval::EdgeListEvaluator;
    /// # use cleave_search::expectation::ExpectationEstimator;
    /// # use cleave_search::histogram::SampleHistogram;
    /// # use cleave_search::incumbent::BestTracker;
    ///
    /// let model = from_edge_list(2, &[(0, 1, 5.0f64)]).unwrap();
    /// let estimator = ExpectationEstimator::new(EdgeListEvaluator::new());
    ///
    /// let mut histogram = SampleHistogram::new();
    /// histogram.record("01", 768); // cost 5
    /// histogram.record("00", 256); // cost 0
    ///
    /// let mut tracker = BestTracker::new();
    /// let expectation = estimator
    ///     .estimate(&model, &histogram, 1024, &mut tracker)
    ///     .unwrap();
    ///
    /// assert_eq!(expectation, 3.75);
    /// assert_eq!(tracker.best_cost(), 5.0);
    /// ```
    pub fn estimate<T>(
        &self,
        model: &Model<T>,
        histogram: &SampleHistogram,
        shots: u64,
        tracker: &mut BestTracker<T>,
    ) -> Result<T, EstimateError>
    where
        T: CutNumeric,
        E: CutEvaluator<T>,
    {
        if shots == 0 {
            return Err(EstimateError::ZeroShots);
        }
        let denominator =
            T::from_u64(shots).expect("a u64 shot count always converts to a float");

        let expected = model.num_vertices();
        let mut expectation = T::zero();
        for (key, count) in histogram.iter() {
            let labeling =
                Labeling::from_bitstring(key).map_err(|source| EstimateError::KeyParse {
                    key: key.to_owned(),
                    source,
                })?;
            if labeling.len() != expected {
                return Err(EstimateError::KeyLengthMismatch {
                    key: key.to_owned(),
                    expected,
                    actual: labeling.len(),
                });
            }

            let cost = tracker.observe(model, &self.evaluator, &labeling)?;
            let probability =
                T::from_u64(count).expect("a u64 count always converts to a float") / denominator;
            expectation = expectation + probability * cost;
        }

        Ok(expectation)
    }
}
