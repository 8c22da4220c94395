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

//! Cleave-Search: evaluation and exhaustive search for weighted Max-Cut
//!
//! This crate contains the combinatorial core of the cleave toolkit. The
//! engine separates cost evaluation, enumeration, and running-best tracking
//! so you can swap the scoring strategy without touching the search logic.
//!
//! Core flow
//! - Provide a `cleave_model::Model<T>`.
//! - Choose a `eval::CutEvaluator` (edge-list or dense weight-matrix scoring).
//! - Run `exhaustive::ExhaustiveSearch` for a proven optimum over all 2^N
//!   labelings, or feed sampled labelings through
//!   `expectation::ExpectationEstimator` with an `incumbent::BestTracker`.
//!
//! Design highlights
//! - Separation of concerns: evaluators inject cost; the engine owns
//!   enumeration and tie handling; outcomes carry stats.
//! - Deterministic: enumeration order is fixed (labeling codes ascending,
//!   vertex 0 at the least-significant bit), tie sets preserve discovery
//!   order, and the estimator honors histogram insertion order.
//! - Exponential by design: exhaustive enumeration is intended for small
//!   vertex counts; there is no pruning beyond the optional complement
//!   symmetry reduction, and no approximate fallback.
//!
//! Module map
//! - `eval`: cost evaluator interface plus the two reference evaluators.
//! - `exhaustive`: the brute-force engine with symmetry-reduction option.
//! - `incumbent`: the running-best tracker (last tie wins).
//! - `histogram`: insertion-ordered sample histograms (bitstring -> count).
//! - `expectation`: probability-weighted average cut value over a histogram.
//! - `result`: search outcomes (solution + statistics).
//! - `stats`: lightweight counters/timing.
//! - `num`: the numeric trait alias used throughout.

pub mod eval;
pub mod exhaustive;
pub mod expectation;
pub mod histogram;
pub mod incumbent;
pub mod num;
pub mod result;
pub mod stats;
