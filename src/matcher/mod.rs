//! The matcher abstraction and its algebra.
//!
//! - [`Matcher`] - a predicate over a value that explains itself on failure
//! - [`MatchResult`] - the outcome of one evaluation
//! - Combinators: [`Matcher::invert`], [`Matcher::compose`], [`Matcher::and`],
//!   [`Matcher::or`], plus the n-ary [`all_of`] and [`any_of`]
//! - Factories: [`satisfies`], [`matcher_fn`], [`anything`]
//!
//! # Example
//!
//! ```rust
//! use testkit_match::matcher::{satisfies, Matcher};
//!
//! let is_positive = satisfies(|x: &i32| *x > 0, "expected positive", "expected non-positive");
//! let is_even = satisfies(|x: &i32| x % 2 == 0, "expected even", "expected odd");
//!
//! let m = is_positive.and(is_even);
//! assert!(m.test(&4).passed());
//!
//! let result = m.test(&3);
//! assert!(!result.passed());
//! assert_eq!(result.failure_message(), "expected even");
//! ```

use std::sync::Arc;

mod combinators;
mod factories;
mod result;

pub use combinators::{
    all_of, any_of, both, compose_with, either, not, AllOf, And, AnyOf, Composed, Inverted, Or,
    Projected,
};
pub use factories::{anything, matcher_fn, satisfies, AnythingMatcher, FnMatcher, Predicate};
pub use result::MatchResult;

/// A reusable, stateless check over values of type `T`.
///
/// `test` must be a pure function of its input. Any panic raised while
/// evaluating (inside a predicate or a [`compose`](Matcher::compose)
/// transform) is a defect and propagates to the caller untouched; a value
/// that does not satisfy the condition is reported as data through
/// [`MatchResult::passed`].
///
/// The combinator methods consume the receiver. Borrowed, boxed and
/// `Arc`-shared matchers implement `Matcher` too, so `(&m).invert()` keeps
/// `m` usable.
///
/// # Implementing Custom Matchers
///
/// ```rust
/// use testkit_match::{MatchResult, Matcher};
///
/// struct IsEven;
///
/// impl Matcher<i32> for IsEven {
///     fn test(&self, value: &i32) -> MatchResult {
///         MatchResult::new(
///             value % 2 == 0,
///             format!("expected {value} to be even"),
///             format!("expected {value} to be odd"),
///         )
///     }
/// }
///
/// assert!(IsEven.test(&4).passed());
/// assert!(IsEven.invert().test(&3).passed());
/// ```
pub trait Matcher<T: ?Sized> {
    /// Evaluate the condition against `value`.
    fn test(&self, value: &T) -> MatchResult;

    /// Negate this matcher: the verdict flips and the two messages swap.
    ///
    /// Inverting twice restores the original verdict and messages.
    ///
    /// # Example
    ///
    /// ```rust
    /// use testkit_match::matcher::{satisfies, MatchResult, Matcher};
    ///
    /// let is_positive = satisfies(|x: &i32| *x > 0, "expected positive", "expected non-positive");
    /// assert_eq!(
    ///     is_positive.invert().test(&-1),
    ///     MatchResult::new(true, "expected non-positive", "expected positive"),
    /// );
    /// ```
    fn invert(self) -> Inverted<Self>
    where
        Self: Sized,
    {
        Inverted::new(self)
    }

    /// Adapt this matcher to another input type by running `transform` first.
    ///
    /// `m.compose(f).test(u)` is exactly `m.test(&f(u))`. The transform
    /// returns an owned value; to reuse a matcher on a field borrowed from
    /// the input (including unsized targets like `str`), use
    /// [`compose_ref`](Matcher::compose_ref).
    ///
    /// # Example
    ///
    /// ```rust
    /// use testkit_match::matcher::{satisfies, Matcher};
    ///
    /// struct User {
    ///     name: String,
    /// }
    ///
    /// let short = satisfies(|len: &usize| *len < 8, "expected a short name", "expected a long name");
    /// let m = short.compose(|user: &User| user.name.len());
    ///
    /// assert!(m.test(&User { name: "ada".into() }).passed());
    /// assert!(!m.test(&User { name: "bartholomew".into() }).passed());
    /// ```
    fn compose<U, F>(self, transform: F) -> Composed<Self, F, T>
    where
        Self: Sized,
        T: Sized,
        U: ?Sized,
        F: Fn(&U) -> T,
    {
        Composed::new(self, transform)
    }

    /// Adapt this matcher to another input type through a borrowing
    /// projection.
    ///
    /// `m.compose_ref(f).test(u)` is exactly `m.test(f(u))`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use testkit_match::matcher::{satisfies, Matcher};
    ///
    /// struct User {
    ///     name: String,
    /// }
    ///
    /// let non_empty = satisfies(|s: &str| !s.is_empty(), "expected a name", "expected no name");
    /// let m = non_empty.compose_ref(|user: &User| user.name.as_str());
    ///
    /// assert!(m.test(&User { name: "ada".into() }).passed());
    /// assert!(!m.test(&User { name: String::new() }).passed());
    /// ```
    fn compose_ref<U, F>(self, projection: F) -> Projected<Self, F, T>
    where
        Self: Sized,
        U: ?Sized,
        F: for<'a> Fn(&'a U) -> &'a T,
    {
        Projected::new(self, projection)
    }

    /// Short-circuit conjunction.
    ///
    /// If `self` fails its result is returned and `other` is never
    /// evaluated; otherwise `other`'s result is returned as is, so a passing
    /// conjunction carries `other`'s messages.
    fn and<M>(self, other: M) -> And<Self, M>
    where
        Self: Sized,
        M: Matcher<T>,
    {
        And::new(self, other)
    }

    /// Short-circuit disjunction.
    ///
    /// If `self` passes its result is returned and `other` is never
    /// evaluated; otherwise `other`'s result is returned whatever its verdict.
    fn or<M>(self, other: M) -> Or<Self, M>
    where
        Self: Sized,
        M: Matcher<T>,
    {
        Or::new(self, other)
    }

    /// Erase the concrete type, e.g. to mix matcher types in [`all_of`].
    fn boxed<'a>(self) -> Box<dyn Matcher<T> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for &M {
    fn test(&self, value: &T) -> MatchResult {
        (**self).test(value)
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for Box<M> {
    fn test(&self, value: &T) -> MatchResult {
        (**self).test(value)
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for Arc<M> {
    fn test(&self, value: &T) -> MatchResult {
        (**self).test(value)
    }
}
