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

//! Cost evaluation for candidate labelings.
//!
//! - `evaluator`: the `CutEvaluator` interface shared by the exhaustive
//!   search and the expectation estimator.
//! - `edge_list`: the sparse reference evaluator, O(E) per labeling.
//! - `dense`: the dense weight-matrix evaluator, O(N^2) per labeling,
//!   result-identical to the sparse form.

pub mod dense;
pub mod edge_list;
pub mod evaluator;

pub use dense::DenseMatrixEvaluator;
pub use edge_list::EdgeListEvaluator;
pub use evaluator::{CutEvaluator, EvaluationError};
