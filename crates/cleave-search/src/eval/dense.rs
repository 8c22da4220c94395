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
use cleave_model::{index::VertexIndex, labeling::Labeling, model::Model};

/// The dense weight-matrix evaluator.
///
/// Holds the symmetric N x N weight matrix of a model (absent edges weigh
/// zero) and scores a labeling `x` as
///
/// ```text
/// sum over all ordered pairs (i, j) of w[i][j] * x[i] * (1 - x[j])
/// ```
///
/// Each crossing edge contributes exactly once: for an edge `{u, v}` with
/// `x[u] = 1` and `x[v] = 0`, only the ordered pair `(u, v)` survives the
/// `x[i] * (1 - x[j])` factor, so the double sum over the symmetric matrix
/// reproduces the sparse edge-list result exactly. O(N^2) per call.
///
/// The matrix is built once at construction; the evaluator is then bound to
/// models with the same vertex count and edge weights.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrixEvaluator<T> {
    num_vertices: usize,
    weights: Vec<T>, // row-major, len = num_vertices * num_vertices
}

impl<T> DenseMatrixEvaluator<T>
where
    T: CutNumeric,
{
    /// Builds the weight matrix of the given model.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleave_model::model::from_edge_list;
    /// # use cleave_search::eval::DenseMatrixEvaluator;
    ///
    /// let model = from_edge_list(2, &[(0, 1, 5.0f64)]).unwrap();
    /// let evaluator = DenseMatrixEvaluator::from_model(&model);
    /// assert_eq!(evaluator.num_vertices(), 2);
    /// ```
    pub fn from_model(model: &Model<T>) -> Self {
        let n = model.num_vertices();
        let mut weights = vec![T::zero(); n * n];
        for (u, v, weight) in model.edges() {
            weights[u.get() * n + v.get()] = weight;
            weights[v.get() * n + u.get()] = weight;
        }

        Self {
            num_vertices: n,
            weights,
        }
    }

    /// Returns the vertex count the matrix was built for.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Returns the matrix entry for the ordered vertex pair `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if either index is out of bounds.
    #[inline]
    pub fn weight(&self, i: VertexIndex, j: VertexIndex) -> T {
        debug_assert!(
            i.get() < self.num_vertices && j.get() < self.num_vertices,
            "called `DenseMatrixEvaluator::weight` with vertex pair ({}, {}) out of bounds: the vertex count is {}",
            i.get(),
            j.get(),
            self.num_vertices
        );

        self.weights[i.get() * self.num_vertices + j.get()]
    }
}

impl<T> CutEvaluator<T> for DenseMatrixEvaluator<T>
where
    T: CutNumeric,
{
    #[inline]
    fn name(&self) -> &str {
        "DenseMatrixEvaluator"
    }

    fn evaluate(&self, model: &Model<T>, labeling: &Labeling) -> Result<T, EvaluationError> {
        check_length(model, labeling)?;
        debug_assert_eq!(
            model.num_vertices(),
            self.num_vertices,
            "called `DenseMatrixEvaluator::evaluate` with a model of {} vertices, but the matrix was built for {}",
            model.num_vertices(),
            self.num_vertices
        );

        let n = self.num_vertices;
        let mut cost = T::zero();
        for i in 0..n {
            if !labeling.get(VertexIndex::new(i)) {
                continue; // x[i] = 0 zeroes the whole row
            }
            let row = &self.weights[i * n..(i + 1) * n];
            for (j, weight) in row.iter().enumerate() {
                if !labeling.get(VertexIndex::new(j)) {
                    cost = cost + *weight;
                }
            }
        }
        Ok(cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::EdgeListEvaluator;
    use cleave_model::model::from_edge_list;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn lab(s: &str) -> Labeling {
        Labeling::from_bitstring(s).unwrap()
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let model = from_edge_list(3, &[(0, 2, 4.0f64), (1, 2, 2.0)]).unwrap();
        let evaluator = DenseMatrixEvaluator::from_model(&model);

        let vx = VertexIndex::new;
        assert_eq!(evaluator.weight(vx(0), vx(2)), 4.0);
        assert_eq!(evaluator.weight(vx(2), vx(0)), 4.0);
        assert_eq!(evaluator.weight(vx(0), vx(1)), 0.0);
    }

    #[test]
    fn test_matches_edge_list_on_triangle() {
        let model = from_edge_list(3, &[(0, 1, 1.0f64), (1, 2, 1.0), (0, 2, 1.0)]).unwrap();
        let dense = DenseMatrixEvaluator::from_model(&model);
        let sparse = EdgeListEvaluator::new();

        for code in 0u64..8 {
            let labeling = Labeling::from_code(code, 3);
            assert_eq!(
                dense.evaluate(&model, &labeling).unwrap(),
                sparse.evaluate(&model, &labeling).unwrap()
            );
        }
    }

    #[test]
    fn test_matches_edge_list_on_random_instances() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..20 {
            let n = rng.gen_range(2..=7);
            let mut edges = Vec::new();
            for u in 0..n {
                for v in (u + 1)..n {
                    if rng.gen_bool(0.5) {
                        // Integral weights keep the two summation orders
                        // exactly comparable.
                        edges.push((u, v, rng.gen_range(1..=100) as f64));
                    }
                }
            }

            let model = from_edge_list(n, &edges).unwrap();
            let dense = DenseMatrixEvaluator::from_model(&model);
            let sparse = EdgeListEvaluator::new();

            for code in 0u64..(1u64 << n) {
                let labeling = Labeling::from_code(code, n);
                assert_eq!(
                    dense.evaluate(&model, &labeling).unwrap(),
                    sparse.evaluate(&model, &labeling).unwrap(),
                    "evaluators disagree on n={} code={}",
                    n,
                    code
                );
            }
        }
    }

    #[test]
    fn test_length_mismatch() {
        let model = from_edge_list(3, &[(0, 1, 1.0f64)]).unwrap();
        let evaluator = DenseMatrixEvaluator::from_model(&model);

        let err = evaluator.evaluate(&model, &lab("0111")).unwrap_err();
        assert_eq!(
            err,
            EvaluationError::LengthMismatch {
                expected: 3,
                actual: 4
            }
        );
    }
}
