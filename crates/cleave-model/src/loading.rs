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

//! Instance loader for the Max-Cut domain.
//!
//! This module turns whitespace-delimited text streams into a validated
//! `Model`, mapping a vertex count and a weighted edge list into the compact
//! layout consumed by the evaluation engine.
//!
//! The expected format (whitespace-separated tokens, `#` starts a comment):
//!
//! ```raw
//! N M          # number of vertices, number of edges
//! u_1 v_1 w_1  # one undirected weighted edge per triple
//! ...
//! u_M v_M w_M
//! ```
//!
//! The parser accepts any `BufRead`, file path, raw reader, or string slice,
//! making it convenient to integrate with benchmarks, tests, and tooling.
//! Model-level invariants (endpoint bounds, positive weights, no duplicate
//! unordered pairs) are enforced by `ModelBuilder`, so malformed instances
//! fail with descriptive errors instead of producing a silently wrong graph.

use crate::{
    index::VertexIndex,
    model::{GraphBuildError, Model, ModelBuilder},
};
use num_traits::Float;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

/// The error type for the instance loading process.
#[derive(Debug)]
pub enum InstanceLoadError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The input stream ended unexpectedly (e.g., missing tokens).
    UnexpectedEof,
    /// A token could not be parsed into the expected numeric type.
    Parse(ParseTokenError),
    /// The parsed data violates a model invariant.
    Build(GraphBuildError),
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "f64").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

impl std::fmt::Display for InstanceLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => write!(f, "Unexpected end of file while parsing instance"),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::Build(e) => write!(f, "Invalid graph: {}", e),
        }
    }
}

impl std::error::Error for InstanceLoadError {}

impl From<std::io::Error> for InstanceLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for InstanceLoadError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl From<GraphBuildError> for InstanceLoadError {
    fn from(e: GraphBuildError) -> Self {
        Self::Build(e)
    }
}

/// A loader for Max-Cut problem instances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstanceLoader;

impl InstanceLoader {
    /// Creates a new `InstanceLoader`.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Loads an instance from a type implementing `BufRead`.
    pub fn from_bufread<T, R>(&self, rdr: R) -> Result<Model<T>, InstanceLoadError>
    where
        T: Float + FromStr,
        R: BufRead,
    {
        let mut sc = Scanner::new(rdr);

        let num_vertices: usize = sc.next()?;
        let num_edges: usize = sc.next()?;

        let mut builder = ModelBuilder::new(num_vertices);
        for _ in 0..num_edges {
            let u: usize = sc.next()?;
            let v: usize = sc.next()?;
            let w: T = sc.next()?;
            builder.add_edge(VertexIndex::new(u), VertexIndex::new(v), w)?;
        }

        Ok(builder.build()?)
    }

    /// Loads an instance from a file path.
    #[inline]
    pub fn from_path<T, P>(&self, path: P) -> Result<Model<T>, InstanceLoadError>
    where
        T: Float + FromStr,
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads an instance from a generic reader.
    #[inline]
    pub fn from_reader<T, R>(&self, r: R) -> Result<Model<T>, InstanceLoadError>
    where
        T: Float + FromStr,
        R: Read,
    {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads an instance from a string slice.
    #[inline]
    pub fn from_str<T>(&self, s: &str) -> Result<Model<T>, InstanceLoadError>
    where
        T: Float + FromStr,
    {
        self.from_reader(s.as_bytes())
    }
}

/// A helper to read whitespace-delimited tokens from a generic reader.
///
/// Comments start with `#` and run to the end of the line.
struct Scanner<R> {
    rdr: R,
    tokens: Vec<String>,
    next_token: usize,
}

impl<R: BufRead> Scanner<R> {
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            tokens: Vec::new(),
            next_token: 0,
        }
    }

    /// Reads lines until one contributes at least one token.
    /// Returns `Ok(false)` on EOF.
    fn fill_tokens(&mut self) -> Result<bool, InstanceLoadError> {
        let mut line = String::new();
        loop {
            line.clear();
            self.tokens.clear();
            self.next_token = 0;

            if self.rdr.read_line(&mut line)? == 0 {
                return Ok(false);
            }

            let payload = match line.find('#') {
                Some(comment_start) => &line[..comment_start],
                None => line.as_str(),
            };
            self.tokens
                .extend(payload.split_whitespace().map(str::to_owned));

            if !self.tokens.is_empty() {
                return Ok(true);
            }
        }
    }

    /// Reads the next token and parses it into `T`.
    fn next<T>(&mut self) -> Result<T, InstanceLoadError>
    where
        T: FromStr,
    {
        if self.next_token >= self.tokens.len() && !self.fill_tokens()? {
            return Err(InstanceLoadError::UnexpectedEof);
        }

        let token = &self.tokens[self.next_token];
        self.next_token += 1;

        token.parse::<T>().map_err(|_| {
            InstanceLoadError::Parse(ParseTokenError {
                token: token.to_owned(),
                type_name: std::any::type_name::<T>(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_simple_instance() {
        let input = "\
            # triangle with unit weights\n\
            3 3\n\
            0 1 1.0\n\
            1 2 1.0\n\
            0 2 1.0\n";

        let model: Model<f64> = InstanceLoader::new().from_str(input).unwrap();
        assert_eq!(model.num_vertices(), 3);
        assert_eq!(model.num_edges(), 3);
        assert_eq!(model.total_weight(), 3.0);
    }

    #[test]
    fn test_inline_comments_and_spacing() {
        let input = "2 1 # N M\n   0    1   5.0  # single edge\n";
        let model: Model<f64> = InstanceLoader::new().from_str(input).unwrap();
        assert_eq!(model.num_edges(), 1);
    }

    #[test]
    fn test_truncated_input() {
        let input = "3 2\n0 1 1.0\n";
        let err = InstanceLoader::new().from_str::<f64>(input).unwrap_err();
        assert!(matches!(err, InstanceLoadError::UnexpectedEof));
    }

    #[test]
    fn test_bad_token() {
        let input = "2 1\n0 one 1.0\n";
        let err = InstanceLoader::new().from_str::<f64>(input).unwrap_err();
        match err {
            InstanceLoadError::Parse(e) => assert_eq!(e.token, "one"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_graph_surfaces_build_error() {
        let input = "2 1\n0 0 1.0\n";
        let err = InstanceLoader::new().from_str::<f64>(input).unwrap_err();
        assert!(matches!(
            err,
            InstanceLoadError::Build(GraphBuildError::SelfLoop { vertex: 0 })
        ));
    }
}
