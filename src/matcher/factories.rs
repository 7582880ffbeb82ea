// Allow must_use_candidate for matcher factory functions since returning the matcher
// without using it is the common pattern for test setup
#![allow(clippy::must_use_candidate)]

//! Domain-neutral ways to build base matchers.

use std::fmt;
use std::marker::PhantomData;

use super::{MatchResult, Matcher};

/// Create a predicate-based matcher with fixed messages.
///
/// The predicate is called as is; a panic inside it propagates.
///
/// # Example
///
/// ```rust
/// use testkit_match::matcher::{satisfies, MatchResult, Matcher};
///
/// let is_positive = satisfies(|x: &i32| *x > 0, "expected positive", "expected non-positive");
/// assert_eq!(
///     is_positive.test(&5),
///     MatchResult::new(true, "expected positive", "expected non-positive"),
/// );
/// assert!(!is_positive.test(&-1).passed());
/// ```
pub fn satisfies<T, F>(
    predicate: F,
    failure_message: impl Into<String>,
    negated_failure_message: impl Into<String>,
) -> Predicate<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    Predicate {
        predicate,
        failure_message: failure_message.into(),
        negated_failure_message: negated_failure_message.into(),
        _phantom: PhantomData,
    }
}

/// Matcher based on a predicate function. See [`satisfies`].
pub struct Predicate<T: ?Sized, F> {
    predicate: F,
    failure_message: String,
    negated_failure_message: String,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F: Fn(&T) -> bool> Matcher<T> for Predicate<T, F> {
    fn test(&self, value: &T) -> MatchResult {
        MatchResult::new(
            (self.predicate)(value),
            self.failure_message.as_str(),
            self.negated_failure_message.as_str(),
        )
    }
}

impl<T: ?Sized, F: Clone> Clone for Predicate<T, F> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            failure_message: self.failure_message.clone(),
            negated_failure_message: self.negated_failure_message.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: ?Sized, F> fmt::Debug for Predicate<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("failure_message", &self.failure_message)
            .field("negated_failure_message", &self.negated_failure_message)
            .finish_non_exhaustive()
    }
}

/// Lift a function producing a full [`MatchResult`] into a matcher.
///
/// Use this when the messages depend on the value under test.
///
/// # Example
///
/// ```rust
/// use testkit_match::matcher::{matcher_fn, MatchResult, Matcher};
///
/// let less_than_4 = matcher_fn(|x: &i32| {
///     MatchResult::new(
///         *x < 4,
///         format!("expected {x} to be less than 4"),
///         format!("expected {x} to be at least 4"),
///     )
/// });
/// assert_eq!(less_than_4.test(&7).failure_message(), "expected 7 to be less than 4");
/// ```
pub fn matcher_fn<T, F>(f: F) -> FnMatcher<F>
where
    T: ?Sized,
    F: Fn(&T) -> MatchResult,
{
    FnMatcher { f }
}

/// Matcher backed by a result-producing function. See [`matcher_fn`].
#[derive(Clone, Copy)]
pub struct FnMatcher<F> {
    f: F,
}

impl<T: ?Sized, F: Fn(&T) -> MatchResult> Matcher<T> for FnMatcher<F> {
    fn test(&self, value: &T) -> MatchResult {
        (self.f)(value)
    }
}

impl<F> fmt::Debug for FnMatcher<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMatcher").finish_non_exhaustive()
    }
}

/// Create a matcher that always passes.
///
/// It only contributes messages when used on the right of [`Matcher::and`]
/// or inverted, so `anything().and(m)` behaves exactly like `m`.
///
/// # Example
///
/// ```rust
/// use testkit_match::matcher::{anything, Matcher};
///
/// let m = anything::<i32>();
/// assert!(m.test(&42).passed());
/// assert!(!m.invert().test(&0).passed());
/// ```
pub fn anything<T: ?Sized>() -> AnythingMatcher<T> {
    AnythingMatcher {
        _phantom: PhantomData,
    }
}

/// Matcher that matches anything. See [`anything`].
pub struct AnythingMatcher<T: ?Sized> {
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Matcher<T> for AnythingMatcher<T> {
    fn test(&self, _value: &T) -> MatchResult {
        MatchResult::new(true, "expected anything", "expected nothing")
    }
}

impl<T: ?Sized> Clone for AnythingMatcher<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for AnythingMatcher<T> {}

impl<T: ?Sized> fmt::Debug for AnythingMatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AnythingMatcher")
    }
}
