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

/// Statistics collected during an exhaustive search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Number of labelings evaluated. Exactly 2^N for a full search,
    /// 2^(N-1) under symmetry reduction.
    pub labelings_evaluated: u64,
    /// Number of optimal labelings retained (ties included).
    pub optima_found: u64,
    /// Number of threads used during the search.
    pub used_threads: usize,
    /// Total duration of the search.
    pub search_duration: std::time::Duration,
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Labelings Evaluated: {}", self.labelings_evaluated)?;
        writeln!(f, "  Optima Found: {}", self.optima_found)?;
        writeln!(f, "  Used Threads: {}", self.used_threads)?;
        writeln!(
            f,
            "  Search Duration (secs): {:.3}",
            self.search_duration.as_secs_f64()
        )
    }
}

/// Builder for `SearchStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatisticsBuilder {
    labelings_evaluated: u64,
    optima_found: u64,
    used_threads: usize,
    search_duration: std::time::Duration,
}

impl Default for SearchStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatisticsBuilder {
    /// Creates a new `SearchStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            labelings_evaluated: 0,
            optima_found: 0,
            used_threads: 1,
            search_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the number of labelings evaluated.
    #[inline]
    pub fn labelings_evaluated(mut self, labelings_evaluated: u64) -> Self {
        self.labelings_evaluated = labelings_evaluated;
        self
    }

    /// Sets the number of optimal labelings retained.
    #[inline]
    pub fn optima_found(mut self, optima_found: u64) -> Self {
        self.optima_found = optima_found;
        self
    }

    /// Sets the number of threads used.
    #[inline]
    pub fn used_threads(mut self, used_threads: usize) -> Self {
        self.used_threads = used_threads;
        self
    }

    /// Sets the total search duration.
    #[inline]
    pub fn search_duration(mut self, search_duration: std::time::Duration) -> Self {
        self.search_duration = search_duration;
        self
    }

    /// Builds the `SearchStatistics` instance.
    #[inline]
    pub fn build(self) -> SearchStatistics {
        SearchStatistics {
            labelings_evaluated: self.labelings_evaluated,
            optima_found: self.optima_found,
            used_threads: self.used_threads,
            search_duration: self.search_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SearchStatistics, SearchStatisticsBuilder};
    use std::time::Duration;

    #[test]
    fn builder_constructs_expected_struct() {
        let stats = SearchStatisticsBuilder::new()
            .labelings_evaluated(32)
            .optima_found(6)
            .used_threads(4)
            .search_duration(Duration::from_millis(12))
            .build();

        assert_eq!(
            stats,
            SearchStatistics {
                labelings_evaluated: 32,
                optima_found: 6,
                used_threads: 4,
                search_duration: Duration::from_millis(12),
            }
        );
    }

    #[test]
    fn builder_defaults_are_single_threaded_and_empty() {
        let stats = SearchStatisticsBuilder::new().build();
        assert_eq!(stats.labelings_evaluated, 0);
        assert_eq!(stats.optima_found, 0);
        assert_eq!(stats.used_threads, 1);
        assert_eq!(stats.search_duration, Duration::ZERO);
    }

    #[test]
    fn display_mentions_counters() {
        let stats = SearchStatisticsBuilder::new()
            .labelings_evaluated(8)
            .optima_found(2)
            .build();
        let rendered = format!("{}", stats);
        assert!(rendered.contains("Labelings Evaluated: 8"));
        assert!(rendered.contains("Optima Found: 2"));
    }
}
