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

//! # Best Tracker (Running Best Holder)
//!
//! A container for the best labeling observed so far while scoring a stream
//! of candidates that arrive from an external sampling process rather than
//! an exhaustive enumeration.
//!
//! ## Motivation
//!
//! - One optimization session scores many sampled labelings against the same
//!   model; the tracker keeps the champion across all of them.
//! - The tracker is an explicit value owned by the caller. There is no
//!   module-level state: construct one per session, pass it to every call
//!   that needs it, read it when the session ends.
//!
//! ## Tie policy
//!
//! `observe` overwrites the running best whenever the new cost is greater
//! than **or equal to** the current best. On exact ties the most recently
//! observed labeling wins. This is load-bearing: the expectation estimator
//! scores every distinct key of a histogram through `observe`, and the
//! retained best among tied keys is whichever the histogram iterates last.
//!
//! ## Usage
//!
//! ```rust
//! use cleave_model::{labeling::Labeling, model::from_edge_list};
//! use cleave_search::{eval::EdgeListEvaluator, incumbent::BestTracker};
//!
//! let model = from_edge_list(2, &[(0, 1, 5.0f64)]).unwrap();
//! let evaluator = EdgeListEvaluator::new();
//! let mut tracker = BestTracker::new();
//!
//! let cost = tracker
//!     .observe(&model, &evaluator, &Labeling::from_bitstring("01").unwrap())
//!     .unwrap();
//! assert_eq!(cost, 5.0);
//! assert_eq!(tracker.best_cost(), 5.0);
//! ```

use crate::{
    eval::{CutEvaluator, EvaluationError},
    num::CutNumeric,
};
use cleave_model::{labeling::Labeling, model::Model};

/// A holder for the best (incumbent) labeling observed during a session.
///
/// The cost starts at negative infinity, meaning "nothing observed yet";
/// it never decreases once set.
#[derive(Debug, Clone, PartialEq)]
pub struct BestTracker<T> {
    best_cost: T,
    best_labeling: Option<Labeling>,
}

impl<T> Default for BestTracker<T>
where
    T: CutNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BestTracker<T>
where
    T: CutNumeric,
{
    /// Creates a new tracker with no labeling observed.
    #[inline]
    pub fn new() -> Self {
        BestTracker {
            best_cost: T::neg_infinity(),
            best_labeling: None,
        }
    }

    /// Returns the best cost observed so far, or negative infinity if no
    /// labeling has been observed yet.
    #[inline]
    pub fn best_cost(&self) -> T {
        self.best_cost
    }

    /// Returns the best labeling observed so far, if any.
    #[inline]
    pub fn best_labeling(&self) -> Option<&Labeling> {
        self.best_labeling.as_ref()
    }

    /// Returns `true` if at least one labeling has been observed.
    #[inline]
    pub fn has_observation(&self) -> bool {
        self.best_labeling.is_some()
    }

    /// Scores `labeling` with `evaluator` and conditionally updates the
    /// running best.
    ///
    /// The update fires on `cost >= best_cost`, so later ties overwrite
    /// earlier ones. The computed cost is returned either way; callers use
    /// it independently of the tracking (e.g., for an expectation sum).
    ///
    /// # Errors
    ///
    /// Propagates `EvaluationError` from the evaluator; a failed evaluation
    /// leaves the tracker untouched.
    pub fn observe<E>(
        &mut self,
        model: &Model<T>,
        evaluator: &E,
        labeling: &Labeling,
    ) -> Result<T, EvaluationError>
    where
        E: CutEvaluator<T>,
    {
        let cost = evaluator.evaluate(model, labeling)?;
        if cost >= self.best_cost {
            self.best_cost = cost;
            self.best_labeling = Some(labeling.clone());
        }
        Ok(cost)
    }

    /// Folds another tracker into this one under the same `>=` rule.
    ///
    /// `other` is treated as the later observer: on an exact cost tie its
    /// labeling wins. Workers in a parallel session each own a tracker and
    /// merge them in worker order afterwards, which reproduces the
    /// sequential last-tie-wins outcome.
    pub fn merge(&mut self, other: BestTracker<T>) {
        if let Some(labeling) = other.best_labeling {
            if other.best_cost >= self.best_cost {
                self.best_cost = other.best_cost;
                self.best_labeling = Some(labeling);
            }
        }
    }
}

impl<T> std::fmt::Display for BestTracker<T>
where
    T: CutNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.best_labeling {
            Some(labeling) => write!(
                f,
                "BestTracker(best_cost: {}, best_labeling: {})",
                self.best_cost, labeling
            ),
            None => write!(f, "BestTracker(empty)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::EdgeListEvaluator;
    use cleave_model::model::from_edge_list;

    fn lab(s: &str) -> Labeling {
        Labeling::from_bitstring(s).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let tracker: BestTracker<f64> = BestTracker::new();
        assert_eq!(tracker.best_cost(), f64::NEG_INFINITY);
        assert!(tracker.best_labeling().is_none());
        assert!(!tracker.has_observation());
    }

    #[test]
    fn test_observe_returns_cost_and_updates() {
        let model = from_edge_list(2, &[(0, 1, 5.0f64)]).unwrap();
        let evaluator = EdgeListEvaluator::new();
        let mut tracker = BestTracker::new();

        let cost = tracker.observe(&model, &evaluator, &lab("00")).unwrap();
        assert_eq!(cost, 0.0);
        // Even a zero cut beats the initial negative infinity.
        assert_eq!(tracker.best_cost(), 0.0);
        assert_eq!(tracker.best_labeling(), Some(&lab("00")));

        let cost = tracker.observe(&model, &evaluator, &lab("01")).unwrap();
        assert_eq!(cost, 5.0);
        assert_eq!(tracker.best_cost(), 5.0);
        assert_eq!(tracker.best_labeling(), Some(&lab("01")));

        // Worse observation still returns its cost but leaves the best alone.
        let cost = tracker.observe(&model, &evaluator, &lab("11")).unwrap();
        assert_eq!(cost, 0.0);
        assert_eq!(tracker.best_cost(), 5.0);
        assert_eq!(tracker.best_labeling(), Some(&lab("01")));
    }

    #[test]
    fn test_last_tie_wins() {
        // Costs observed: 3 ("a" = 100), then 5 ("b" = 01x...), then 5 again
        // ("c"): the tracker must end on the *last* tied labeling.
        let model = from_edge_list(3, &[(0, 1, 3.0f64), (1, 2, 2.0)]).unwrap();
        let evaluator = EdgeListEvaluator::new();
        let mut tracker = BestTracker::new();

        // "100": only (0,1) crosses -> 3.
        // "010": both edges cross -> 5.
        // "101": both edges cross -> 5, observed last.
        let costs = [
            tracker.observe(&model, &evaluator, &lab("100")).unwrap(),
            tracker.observe(&model, &evaluator, &lab("010")).unwrap(),
            tracker.observe(&model, &evaluator, &lab("101")).unwrap(),
        ];
        assert_eq!(costs, [3.0, 5.0, 5.0]);

        assert_eq!(tracker.best_cost(), 5.0);
        assert_eq!(tracker.best_labeling(), Some(&lab("101")));
    }

    #[test]
    fn test_failed_evaluation_leaves_tracker_untouched() {
        let model = from_edge_list(3, &[(0, 1, 1.0f64)]).unwrap();
        let evaluator = EdgeListEvaluator::new();
        let mut tracker = BestTracker::new();

        tracker.observe(&model, &evaluator, &lab("100")).unwrap();
        let before = tracker.clone();

        let err = tracker.observe(&model, &evaluator, &lab("10")).unwrap_err();
        assert!(matches!(err, EvaluationError::LengthMismatch { .. }));
        assert_eq!(tracker, before);
    }

    #[test]
    fn test_merge_later_tie_wins() {
        let model = from_edge_list(2, &[(0, 1, 5.0f64)]).unwrap();
        let evaluator = EdgeListEvaluator::new();

        let mut first = BestTracker::new();
        first.observe(&model, &evaluator, &lab("01")).unwrap();

        let mut second = BestTracker::new();
        second.observe(&model, &evaluator, &lab("10")).unwrap();

        // Both hold cost 5; the merged-in tracker is the later one.
        first.merge(second);
        assert_eq!(first.best_cost(), 5.0);
        assert_eq!(first.best_labeling(), Some(&lab("10")));
    }

    #[test]
    fn test_merge_empty_is_noop() {
        let model = from_edge_list(2, &[(0, 1, 5.0f64)]).unwrap();
        let evaluator = EdgeListEvaluator::new();

        let mut tracker = BestTracker::new();
        tracker.observe(&model, &evaluator, &lab("01")).unwrap();

        tracker.merge(BestTracker::new());
        assert_eq!(tracker.best_cost(), 5.0);
        assert_eq!(tracker.best_labeling(), Some(&lab("01")));
    }
}
