// Allow must_use_candidate since spy methods often have useful side effects
#![allow(clippy::must_use_candidate)]

//! Test spy utilities for observing matcher evaluations.
//!
//! This module provides [`Spy`] for wrapping a matcher and recording every
//! time it is evaluated.
//!
//! # Example
//!
//! ```rust
//! use testkit_match::matcher::{satisfies, Matcher};
//! use testkit_match::mock::spy;
//!
//! let is_even = spy(satisfies(|x: &i32| x % 2 == 0, "expected even", "expected odd"));
//! let is_positive = satisfies(|x: &i32| *x > 0, "expected positive", "expected non-positive");
//!
//! // The second operand of a failed conjunction is never evaluated
//! let result = is_positive.and(&is_even).test(&-2);
//! assert!(!result.passed());
//! assert!(!is_even.was_called());
//! ```

use std::fmt::Debug;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::matcher::{MatchResult, Matcher};

/// A record of a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    /// The result returned by the wrapped matcher.
    pub result: MatchResult,
    /// Duration of the evaluation.
    pub duration: Duration,
    /// When the evaluation was made (relative to spy creation).
    pub timestamp: Duration,
}

/// Wrap a matcher in a [`Spy`].
pub fn spy<M>(matcher: M) -> Spy<M> {
    Spy::new(matcher)
}

/// A spy that wraps a matcher and records its evaluations.
///
/// The spy forwards every [`test`](Matcher::test) call to the wrapped
/// matcher unchanged and records the result. The history lives behind a
/// single mutex and the call count is derived from it, so a spy can be
/// shared across threads like any other matcher.
///
/// Combinators consume their operands; pass `&spy` to keep inspecting it.
pub struct Spy<M> {
    inner: M,
    calls: Mutex<Vec<CallRecord>>,
    created_at: Instant,
}

impl<M> Spy<M> {
    /// Create a new spy wrapping the given matcher.
    pub fn new(matcher: M) -> Self {
        Self {
            inner: matcher,
            calls: Mutex::new(Vec::new()),
            created_at: Instant::now(),
        }
    }

    /// Get all recorded calls.
    pub fn calls(&self) -> Vec<CallRecord> {
        self.calls.lock().clone()
    }

    /// Get the number of times the spy was evaluated.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Check if the spy was evaluated at least once.
    #[must_use]
    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }

    /// Check if the spy was evaluated exactly N times.
    #[must_use]
    pub fn was_called_times(&self, n: usize) -> bool {
        self.call_count() == n
    }

    /// Get the Nth call record (0-indexed).
    pub fn nth_call(&self, n: usize) -> Option<CallRecord> {
        self.calls.lock().get(n).cloned()
    }

    /// Get the most recent call record.
    pub fn last_call(&self) -> Option<CallRecord> {
        self.calls.lock().last().cloned()
    }

    /// Reset the call history.
    pub fn reset(&self) {
        self.calls.lock().clear();
    }

    /// Unwrap the spied matcher, dropping the history.
    pub fn into_inner(self) -> M {
        self.inner
    }

    fn record_call(&self, result: MatchResult, duration: Duration) {
        #[cfg(feature = "tracing")]
        tracing::trace!(passed = result.passed(), ?duration, "spy recorded evaluation");

        self.calls.lock().push(CallRecord {
            result,
            duration,
            timestamp: self.created_at.elapsed(),
        });
    }
}

impl<T: ?Sized, M: Matcher<T>> Matcher<T> for Spy<M> {
    fn test(&self, value: &T) -> MatchResult {
        let start = Instant::now();
        let result = self.inner.test(value);
        self.record_call(result.clone(), start.elapsed());
        result
    }
}

impl<M: Clone> Clone for Spy<M> {
    fn clone(&self) -> Self {
        // The copy starts from a snapshot of the history and records on its own.
        Self {
            inner: self.inner.clone(),
            calls: Mutex::new(self.calls.lock().clone()),
            created_at: self.created_at,
        }
    }
}

impl<M> Debug for Spy<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let calls = self.calls.lock();
        f.debug_struct("Spy")
            .field("call_count", &calls.len())
            .field("calls", &*calls)
            .finish_non_exhaustive()
    }
}
