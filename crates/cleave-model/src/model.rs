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

use crate::index::{EdgeIndex, VertexIndex};
use num_traits::Float;
use rustc_hash::FxHashSet;

/// Represents the theoretical search space size of the Max-Cut problem.
///
/// The space of candidate labelings is exactly $2^N$ for $N$ vertices.
/// This struct stores $N$ (the base-2 logarithm) so that the size stays
/// representable even when $2^N$ exceeds integer limits.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchSpace {
    /// The base-2 logarithm of the total number of labelings.
    log2_val: u32,
}

impl SearchSpace {
    /// Calculates the search space for a given number of vertices.
    #[inline]
    pub fn new(num_vertices: usize) -> Self {
        SearchSpace {
            log2_val: num_vertices as u32,
        }
    }

    /// Returns the exact number of labelings, or `None` if it does not fit a `u128`.
    #[inline]
    pub fn size_exact(&self) -> Option<u128> {
        1u128.checked_shl(self.log2_val)
    }

    /// Returns the base-2 logarithm of the search space size.
    #[inline]
    pub fn raw(&self) -> u32 {
        self.log2_val
    }
}

impl std::fmt::Display for SearchSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "2^{}", self.log2_val)
    }
}

impl std::fmt::Debug for SearchSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchSpace(log2={})", self.log2_val)
    }
}

/// The error type for model construction.
///
/// Invalid graphs are rejected eagerly, never silently clamped.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphBuildError {
    /// The model has no vertices (`num_vertices == 0`).
    NoVertices,
    /// An edge endpoint lies outside `0..num_vertices`.
    VertexOutOfBounds {
        vertex: usize,
        num_vertices: usize,
    },
    /// An edge connects a vertex to itself.
    SelfLoop { vertex: usize },
    /// An edge weight is zero, negative, or not finite.
    NonPositiveWeight { source: usize, target: usize },
    /// The unordered vertex pair already carries an edge.
    DuplicateEdge { source: usize, target: usize },
}

impl std::fmt::Display for GraphBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoVertices => {
                write!(f, "A model must have at least one vertex")
            }
            Self::VertexOutOfBounds {
                vertex,
                num_vertices,
            } => write!(
                f,
                "Edge endpoint {} is out of bounds for a model with {} vertices",
                vertex, num_vertices
            ),
            Self::SelfLoop { vertex } => {
                write!(f, "Edge connects vertex {} to itself", vertex)
            }
            Self::NonPositiveWeight { source, target } => write!(
                f,
                "Edge ({}, {}) has a weight that is not a positive finite number",
                source, target
            ),
            Self::DuplicateEdge { source, target } => write!(
                f,
                "The unordered vertex pair ({}, {}) already carries an edge",
                source, target
            ),
        }
    }
}

impl std::error::Error for GraphBuildError {}

/// The immutable data model describing a weighted undirected graph.
///
/// This struct holds all pre-validated, queryable data in a Structure of
/// Arrays (SoA) layout optimized for the tight evaluation loop:
/// - `edge_sources[e]` / `edge_targets[e]`: the endpoints of edge `e`.
/// - `edge_weights[e]`: the (strictly positive, finite) weight of edge `e`.
///
/// Undirectedness is a representation invariant: each unordered vertex pair
/// appears at most once, and `(u, v, w)` means the same edge as `(v, u, w)`.
///
/// Construction:
/// - Use `ModelBuilder` and call `ModelBuilder::build` to obtain a validated `Model`.
#[derive(Clone)]
pub struct Model<T>
where
    T: Float,
{
    num_vertices: usize,
    edge_sources: Vec<VertexIndex>, // len = num_edges
    edge_targets: Vec<VertexIndex>, // len = num_edges
    edge_weights: Vec<T>,           // len = num_edges
}

impl<T> Model<T>
where
    T: Float,
{
    /// Returns the number of vertices in the model.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleave_model::model::ModelBuilder;
    ///
    /// let model = ModelBuilder::<f64>::new(4).build().unwrap();
    /// assert_eq!(model.num_vertices(), 4);
    /// ```
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Returns the number of edges in the model.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleave_model::model::ModelBuilder;
    /// # use cleave_model::index::VertexIndex;
    ///
    /// let mut builder = ModelBuilder::<f64>::new(3);
    /// builder.add_edge(VertexIndex::new(0), VertexIndex::new(1), 2.5).unwrap();
    /// let model = builder.build().unwrap();
    /// assert_eq!(model.num_edges(), 1);
    /// ```
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edge_weights.len()
    }

    /// Returns the size of the labeling search space.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleave_model::model::ModelBuilder;
    ///
    /// let model = ModelBuilder::<f64>::new(5).build().unwrap();
    /// assert_eq!(model.search_space().size_exact(), Some(32));
    /// ```
    #[inline]
    pub fn search_space(&self) -> SearchSpace {
        SearchSpace::new(self.num_vertices)
    }

    /// Returns a slice of all edge weights.
    #[inline]
    pub fn edge_weights(&self) -> &[T] {
        &self.edge_weights
    }

    /// Returns the endpoints of the specified edge.
    ///
    /// # Panics
    ///
    /// Panics if `edge_index` is not in `0..num_edges()`.
    #[inline]
    pub fn edge_endpoints(&self, edge_index: EdgeIndex) -> (VertexIndex, VertexIndex) {
        let index = edge_index.get();
        debug_assert!(
            index < self.num_edges(),
            "called `Model::edge_endpoints` with edge index out of bounds: the len is {} but the index is {}",
            self.num_edges(),
            index
        );

        (self.edge_sources[index], self.edge_targets[index])
    }

    /// Returns the weight of the specified edge.
    ///
    /// # Panics
    ///
    /// Panics if `edge_index` is not in `0..num_edges()`.
    #[inline]
    pub fn edge_weight(&self, edge_index: EdgeIndex) -> T {
        let index = edge_index.get();
        debug_assert!(
            index < self.num_edges(),
            "called `Model::edge_weight` with edge index out of bounds: the len is {} but the index is {}",
            self.num_edges(),
            index
        );

        self.edge_weights[index]
    }

    /// Returns an iterator over `(source, target, weight)` triples.
    ///
    /// Iteration follows insertion order, which is also edge-index order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleave_model::model::ModelBuilder;
    /// # use cleave_model::index::VertexIndex;
    ///
    /// let mut builder = ModelBuilder::<f64>::new(3);
    /// builder.add_edge(VertexIndex::new(0), VertexIndex::new(2), 1.0).unwrap();
    /// let model = builder.build().unwrap();
    ///
    /// let edges: Vec<_> = model.edges().collect();
    /// assert_eq!(edges.len(), 1);
    /// assert_eq!(edges[0].0.get(), 0);
    /// assert_eq!(edges[0].1.get(), 2);
    /// ```
    #[inline]
    pub fn edges(&self) -> impl Iterator<Item = (VertexIndex, VertexIndex, T)> + '_ {
        self.edge_sources
            .iter()
            .zip(self.edge_targets.iter())
            .zip(self.edge_weights.iter())
            .map(|((u, v), w)| (*u, *v, *w))
    }

    /// Returns the sum of all edge weights.
    ///
    /// This is an upper bound on the value of any cut: a labeling can cross
    /// every edge at most once.
    #[inline]
    pub fn total_weight(&self) -> T {
        self.edge_weights
            .iter()
            .fold(T::zero(), |acc, w| acc + *w)
    }
}

impl<T> std::fmt::Debug for Model<T>
where
    T: Float + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("num_vertices", &self.num_vertices)
            .field("edge_sources", &self.edge_sources)
            .field("edge_targets", &self.edge_targets)
            .field("edge_weights", &self.edge_weights)
            .finish()
    }
}

impl<T> std::fmt::Display for Model<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Model(num_vertices: {}, num_edges: {})",
            self.num_vertices(),
            self.num_edges()
        )
    }
}

/// A mutable, validating builder for `Model`.
///
/// Every mutation is checked eagerly and surfaces a `GraphBuildError` to the
/// caller; invalid input is never clamped or silently dropped.
#[derive(Clone, Debug)]
pub struct ModelBuilder<T>
where
    T: Float,
{
    num_vertices: usize,
    edge_sources: Vec<VertexIndex>,
    edge_targets: Vec<VertexIndex>,
    edge_weights: Vec<T>,
    seen_pairs: FxHashSet<(usize, usize)>,
}

impl<T> ModelBuilder<T>
where
    T: Float,
{
    /// Creates a new `ModelBuilder` for a graph with `num_vertices` vertices
    /// and no edges.
    ///
    /// Vertices are fixed at creation; only edges are added afterwards. A
    /// zero vertex count is accepted here and rejected by `build`, so that
    /// configuration errors surface in one place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleave_model::model::ModelBuilder;
    ///
    /// let model = ModelBuilder::<f64>::new(3).build().unwrap();
    /// assert_eq!(model.num_vertices(), 3);
    /// assert_eq!(model.num_edges(), 0);
    /// ```
    pub fn new(num_vertices: usize) -> Self {
        ModelBuilder {
            num_vertices,
            edge_sources: Vec::new(),
            edge_targets: Vec::new(),
            edge_weights: Vec::new(),
            seen_pairs: FxHashSet::default(),
        }
    }

    /// Returns the number of vertices the built model will have.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Returns the number of edges added so far.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edge_weights.len()
    }

    /// Adds an undirected weighted edge between `source` and `target`.
    ///
    /// The pair is unordered: adding `(u, v)` and later `(v, u)` is a
    /// `DuplicateEdge` error.
    ///
    /// # Errors
    ///
    /// - `VertexOutOfBounds` if an endpoint is not in `0..num_vertices`.
    /// - `SelfLoop` if `source == target`.
    /// - `NonPositiveWeight` if `weight <= 0` or `weight` is not finite.
    /// - `DuplicateEdge` if the unordered pair already carries an edge.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleave_model::model::{GraphBuildError, ModelBuilder};
    /// # use cleave_model::index::VertexIndex;
    ///
    /// let mut builder = ModelBuilder::<f64>::new(2);
    /// builder.add_edge(VertexIndex::new(0), VertexIndex::new(1), 5.0).unwrap();
    ///
    /// let err = builder
    ///     .add_edge(VertexIndex::new(1), VertexIndex::new(0), 1.0)
    ///     .unwrap_err();
    /// assert_eq!(err, GraphBuildError::DuplicateEdge { source: 1, target: 0 });
    /// ```
    pub fn add_edge(
        &mut self,
        source: VertexIndex,
        target: VertexIndex,
        weight: T,
    ) -> Result<&mut Self, GraphBuildError> {
        let u = source.get();
        let v = target.get();

        if u >= self.num_vertices {
            return Err(GraphBuildError::VertexOutOfBounds {
                vertex: u,
                num_vertices: self.num_vertices,
            });
        }
        if v >= self.num_vertices {
            return Err(GraphBuildError::VertexOutOfBounds {
                vertex: v,
                num_vertices: self.num_vertices,
            });
        }
        if u == v {
            return Err(GraphBuildError::SelfLoop { vertex: u });
        }
        if !(weight > T::zero()) || !weight.is_finite() {
            return Err(GraphBuildError::NonPositiveWeight {
                source: u,
                target: v,
            });
        }

        let key = if u < v { (u, v) } else { (v, u) };
        if !self.seen_pairs.insert(key) {
            return Err(GraphBuildError::DuplicateEdge {
                source: u,
                target: v,
            });
        }

        self.edge_sources.push(source);
        self.edge_targets.push(target);
        self.edge_weights.push(weight);
        Ok(self)
    }

    /// Adds every `(u, v, weight)` triple from an iterator.
    ///
    /// Stops at the first invalid edge; edges added before the failure remain
    /// in the builder.
    pub fn add_edges<I>(&mut self, edges: I) -> Result<&mut Self, GraphBuildError>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        for (u, v, w) in edges {
            self.add_edge(VertexIndex::new(u), VertexIndex::new(v), w)?;
        }
        Ok(self)
    }

    /// Validates the final invariants and produces the immutable `Model`.
    ///
    /// # Errors
    ///
    /// - `NoVertices` if the builder was created with `num_vertices == 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleave_model::model::{GraphBuildError, ModelBuilder};
    ///
    /// let err = ModelBuilder::<f64>::new(0).build().unwrap_err();
    /// assert_eq!(err, GraphBuildError::NoVertices);
    /// ```
    pub fn build(self) -> Result<Model<T>, GraphBuildError> {
        if self.num_vertices == 0 {
            return Err(GraphBuildError::NoVertices);
        }

        debug_assert_eq!(
            self.edge_sources.len(),
            self.edge_weights.len(),
            "ModelBuilder edge arrays diverged: sources {} vs weights {}",
            self.edge_sources.len(),
            self.edge_weights.len()
        );

        Ok(Model {
            num_vertices: self.num_vertices,
            edge_sources: self.edge_sources,
            edge_targets: self.edge_targets,
            edge_weights: self.edge_weights,
        })
    }
}

/// Builds a model directly from a vertex count and an edge-list slice.
///
/// Convenience for tests and callers holding plain triples.
///
/// # Examples
///
/// ```rust
/// # use cleave_model::model::from_edge_list;
///
/// let model = from_edge_list(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.0)]).unwrap();
/// assert_eq!(model.num_edges(), 3);
/// ```
pub fn from_edge_list<T>(
    num_vertices: usize,
    edges: &[(usize, usize, T)],
) -> Result<Model<T>, GraphBuildError>
where
    T: Float,
{
    let mut builder = ModelBuilder::new(num_vertices);
    builder.add_edges(edges.iter().copied())?;
    builder.build()
}
