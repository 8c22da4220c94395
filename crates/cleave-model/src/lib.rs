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

//! # Cleave Model
//!
//! **The Core Domain Model for the Cleave Max-Cut Toolkit.**
//!
//! This crate defines the fundamental data structures used to represent the
//! **weighted Maximum-Cut problem**. It serves as the data interchange layer
//! between the problem definition (user input) and the evaluation and search
//! engine (`cleave_search`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **construction** and **evaluation**:
//!
//! * **`index`**: Strongly-typed wrappers (`VertexIndex`, `EdgeIndex`) to prevent logical indexing errors.
//! * **`model`**: Contains the `Model` (immutable, optimized for evaluation) and `ModelBuilder` (mutable, validating).
//! * **`labeling`**: The candidate solution type — one bit per vertex, bitset-backed.
//! * **`solution`**: The output format of an exhaustive search: optimal cut value plus every optimal labeling.
//! * **`loading`**: Turns whitespace-delimited edge-list streams into validated models.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Indices are distinct types. You cannot accidentally use an `EdgeIndex` to access a vertex.
//! 2.  **Memory Layout**: Edge data is stored in **Structure of Arrays (SoA)** format (flattened vectors) to maximize cache locality during the exhaustive enumeration.
//! 3.  **Fail-Fast**: Builders validate inputs eagerly so the engine never sees an invalid graph — degenerate vertex counts, self-loops, non-positive weights, and duplicate unordered pairs are all rejected at construction time.

pub mod index;
pub mod labeling;
pub mod loading;
pub mod model;
pub mod solution;
