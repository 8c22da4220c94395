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

use crate::num::CutNumeric;
use cleave_model::{labeling::Labeling, model::Model};

/// The error type for cost evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// The labeling does not cover exactly one bit per model vertex.
    LengthMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "Labeling length {} does not match the model vertex count {}",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for EvaluationError {}

/// A strategy for scoring candidate labelings.
///
/// `CutEvaluator` decouples the engine from a particular scoring
/// implementation. Both the exhaustive search and the expectation estimator
/// call `evaluate` to obtain the cut value of a labeling: the sum of weights
/// of edges whose endpoints lie on different sides.
///
/// Implementations must be pure: no side effects, and identical results for
/// identical `(model, labeling)` inputs. The two shipped implementations
/// (sparse edge list, dense weight matrix) are result-identical on the same
/// model; they differ only in complexity per call.
pub trait CutEvaluator<T>
where
    T: CutNumeric,
{
    /// Returns the name of the evaluator.
    fn name(&self) -> &str;

    /// Computes the cut value of `labeling` on `model`.
    ///
    /// # Errors
    ///
    /// `EvaluationError::LengthMismatch` if the labeling length differs from
    /// the model's vertex count.
    fn evaluate(&self, model: &Model<T>, labeling: &Labeling) -> Result<T, EvaluationError>;
}

impl<T> std::fmt::Debug for dyn CutEvaluator<T>
where
    T: CutNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CutEvaluator({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn CutEvaluator<T>
where
    T: CutNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CutEvaluator({})", self.name())
    }
}

/// Checks the labeling length against the model vertex count.
///
/// Shared precondition of every evaluator.
#[inline]
pub(crate) fn check_length<T>(
    model: &Model<T>,
    labeling: &Labeling,
) -> Result<(), EvaluationError>
where
    T: CutNumeric,
{
    let expected = model.num_vertices();
    let actual = labeling.len();
    if expected != actual {
        return Err(EvaluationError::LengthMismatch { expected, actual });
    }
    Ok(())
}
