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

use crate::{
    eval::evaluator::{CutEvaluator, EvaluationError, check_length},
    num::CutNumeric,
};
use cleave_model::{labeling::Labeling, model::Model};

/// The sparse reference evaluator.
///
/// Walks the model's edge list once and sums the weight of every edge whose
/// endpoints carry different labels. O(E) per call, independent of the
/// vertex count — the form of choice for the exhaustive enumeration, where
/// the evaluator runs 2^N times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeListEvaluator;

impl EdgeListEvaluator {
    /// Creates a new `EdgeListEvaluator`.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> CutEvaluator<T> for EdgeListEvaluator
where
    T: CutNumeric,
{
    #[inline]
    fn name(&self) -> &str {
        "EdgeListEvaluator"
    }

    fn evaluate(&self, model: &Model<T>, labeling: &Labeling) -> Result<T, EvaluationError> {
        check_length(model, labeling)?;

        let mut cost = T::zero();
        for (u, v, weight) in model.edges() {
            if labeling.get(u) != labeling.get(v) {
                cost = cost + weight;
            }
        }
        Ok(cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleave_model::model::from_edge_list;

    fn lab(s: &str) -> Labeling {
        Labeling::from_bitstring(s).unwrap()
    }

    #[test]
    fn test_triangle_costs() {
        let model = from_edge_list(3, &[(0, 1, 1.0f64), (1, 2, 1.0), (0, 2, 1.0)]).unwrap();
        let evaluator = EdgeListEvaluator::new();

        // Vertex 0 alone against {1, 2}: edges (0,1) and (0,2) cross.
        assert_eq!(evaluator.evaluate(&model, &lab("011")).unwrap(), 2.0);
        // All vertices on one side: nothing crosses.
        assert_eq!(evaluator.evaluate(&model, &lab("000")).unwrap(), 0.0);
        assert_eq!(evaluator.evaluate(&model, &lab("111")).unwrap(), 0.0);
    }

    #[test]
    fn test_single_edge_costs() {
        let model = from_edge_list(2, &[(0, 1, 5.0f64)]).unwrap();
        let evaluator = EdgeListEvaluator::new();

        assert_eq!(evaluator.evaluate(&model, &lab("01")).unwrap(), 5.0);
        assert_eq!(evaluator.evaluate(&model, &lab("10")).unwrap(), 5.0);
        assert_eq!(evaluator.evaluate(&model, &lab("00")).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_edge_graph_scores_zero() {
        let model = from_edge_list::<f64>(4, &[]).unwrap();
        let evaluator = EdgeListEvaluator::new();

        for code in 0u64..16 {
            let labeling = Labeling::from_code(code, 4);
            assert_eq!(evaluator.evaluate(&model, &labeling).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_complement_symmetry() {
        let model =
            from_edge_list(4, &[(0, 1, 1.5f64), (1, 2, 2.5), (2, 3, 0.5), (0, 3, 4.0)]).unwrap();
        let evaluator = EdgeListEvaluator::new();

        for code in 0u64..16 {
            let labeling = Labeling::from_code(code, 4);
            let complement = labeling.complement();
            assert_eq!(
                evaluator.evaluate(&model, &labeling).unwrap(),
                evaluator.evaluate(&model, &complement).unwrap()
            );
        }
    }

    #[test]
    fn test_length_mismatch() {
        let model = from_edge_list(3, &[(0, 1, 1.0f64)]).unwrap();
        let evaluator = EdgeListEvaluator::new();

        let err = evaluator.evaluate(&model, &lab("01")).unwrap_err();
        assert_eq!(
            err,
            EvaluationError::LengthMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_weight_increase_monotonicity() {
        // Raising the weight of a crossed edge raises the cost by the same
        // amount; an uncrossed edge leaves the cost untouched.
        let before = from_edge_list(3, &[(0, 1, 1.0f64), (1, 2, 1.0)]).unwrap();
        let after = from_edge_list(3, &[(0, 1, 3.0f64), (1, 2, 1.0)]).unwrap();
        let evaluator = EdgeListEvaluator::new();

        // "100": vertex 0 vs {1, 2}; edge (0,1) crosses, (1,2) does not.
        let crossing = lab("100");
        assert_eq!(evaluator.evaluate(&before, &crossing).unwrap(), 1.0);
        assert_eq!(evaluator.evaluate(&after, &crossing).unwrap(), 3.0);

        // "001": vertex 2 vs {0, 1}; edge (0,1) does not cross.
        let non_crossing = lab("001");
        assert_eq!(
            evaluator.evaluate(&before, &non_crossing).unwrap(),
            evaluator.evaluate(&after, &non_crossing).unwrap()
        );
    }
}
