//! Assertion entry points built on the matcher core.
//!
//! - [`check`] / [`check_not`] - evaluate and return a [`Result`](crate::Result)
//! - [`assert_that!`](crate::assert_that) / [`assert_that_not!`](crate::assert_that_not) -
//!   panic with the relevant message, for use inside `#[test]` functions
//!
//! The negated forms go through [`Matcher::invert`], so a failing
//! `check_not` reports the matcher's negated failure message.
//!
//! # Example
//!
//! ```rust
//! use testkit_match::{assert_that, assert_that_not};
//! use testkit_match::matcher::satisfies;
//!
//! let is_positive = satisfies(|x: &i32| *x > 0, "expected positive", "expected non-positive");
//!
//! assert_that!(5, &is_positive);
//! assert_that_not!(-1, &is_positive, "balance should be overdrawn");
//! ```

use crate::error::{Error, Result};
use crate::matcher::{not, Matcher};

/// Check that `value` satisfies `matcher`.
///
/// # Errors
///
/// Returns [`Error::AssertionFailed`] carrying the matcher's failure message
/// when the value does not satisfy it.
///
/// # Example
///
/// ```rust
/// use testkit_match::assertions::check;
/// use testkit_match::matcher::satisfies;
///
/// let is_positive = satisfies(|x: &i32| *x > 0, "expected positive", "expected non-positive");
/// assert!(check(&5, &is_positive).is_ok());
///
/// let err = check(&-1, &is_positive).unwrap_err();
/// assert_eq!(err.message(), "expected positive");
/// ```
pub fn check<T, M>(value: &T, matcher: &M) -> Result<()>
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    let result = matcher.test(value);
    if result.passed() {
        return Ok(());
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(failure = result.failure_message(), "assertion failed");

    let (_, failure_message, _) = result.into_parts();
    Err(Error::AssertionFailed(failure_message))
}

/// Check that `value` does not satisfy `matcher`.
///
/// # Errors
///
/// Returns [`Error::AssertionFailed`] carrying the matcher's negated failure
/// message when the value unexpectedly satisfies it.
pub fn check_not<T, M>(value: &T, matcher: &M) -> Result<()>
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    check(value, &not(matcher))
}

/// Assert that a value satisfies a matcher, panicking otherwise.
///
/// The value must implement `Debug`; it is matched by reference, so
/// `assert_that!(x, m)` evaluates `m.test(&x)`.
///
/// ```rust
/// use testkit_match::assert_that;
/// use testkit_match::matcher::satisfies;
///
/// assert_that!(42, satisfies(|x: &i32| *x == 42, "expected 42", "expected not 42"));
/// ```
#[macro_export]
macro_rules! assert_that {
    ($value:expr, $matcher:expr $(,)?) => {{
        let value = &$value;
        if let ::std::result::Result::Err(err) = $crate::assertions::check(value, &$matcher) {
            panic!("assertion failed: {}\n  got: {:?}", err.message(), value);
        }
    }};
    ($value:expr, $matcher:expr, $($arg:tt)+) => {{
        let value = &$value;
        if let ::std::result::Result::Err(err) = $crate::assertions::check(value, &$matcher) {
            panic!(
                "assertion failed: {}\n  got: {:?}\n  message: {}",
                err.message(),
                value,
                format_args!($($arg)+)
            );
        }
    }};
}

/// Assert that a value does not satisfy a matcher, panicking otherwise.
///
/// ```rust
/// use testkit_match::assert_that_not;
/// use testkit_match::matcher::satisfies;
///
/// assert_that_not!(7, satisfies(|x: &i32| x % 2 == 0, "expected even", "expected odd"));
/// ```
#[macro_export]
macro_rules! assert_that_not {
    ($value:expr, $matcher:expr $(,)?) => {{
        let value = &$value;
        if let ::std::result::Result::Err(err) = $crate::assertions::check_not(value, &$matcher) {
            panic!("assertion failed: {}\n  got: {:?}", err.message(), value);
        }
    }};
    ($value:expr, $matcher:expr, $($arg:tt)+) => {{
        let value = &$value;
        if let ::std::result::Result::Err(err) = $crate::assertions::check_not(value, &$matcher) {
            panic!(
                "assertion failed: {}\n  got: {:?}\n  message: {}",
                err.message(),
                value,
                format_args!($($arg)+)
            );
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::satisfies;

    fn is_positive() -> impl Matcher<i32> {
        satisfies(|x: &i32| *x > 0, "expected positive", "expected non-positive")
    }

    #[test]
    fn test_check_passes() {
        assert_eq!(check(&1, &is_positive()), Ok(()));
        assert_eq!(check_not(&0, &is_positive()), Ok(()));
    }

    #[test]
    fn test_check_reports_failure_message() {
        assert_eq!(
            check(&-1, &is_positive()),
            Err(Error::assertion_failed("expected positive"))
        );
    }

    #[test]
    fn test_check_not_reports_negated_message() {
        assert_eq!(
            check_not(&3, &is_positive()),
            Err(Error::assertion_failed("expected non-positive"))
        );
    }

    #[test]
    fn test_check_trait_object() {
        let m: Box<dyn Matcher<i32>> = Box::new(is_positive());
        assert!(check(&1, m.as_ref()).is_ok());
        assert!(check_not(&1, &m).is_err());
    }

    #[test]
    fn test_assert_that_macro() {
        assert_that!(42, is_positive());
        assert_that!(42, is_positive(),);
        assert_that_not!(-42, is_positive());
        assert_that!(7, is_positive(), "value {} should be positive", 7);
    }

    #[test]
    #[should_panic(expected = "assertion failed: expected positive\n  got: -1")]
    fn test_assert_that_fails() {
        assert_that!(-1, is_positive());
    }

    #[test]
    #[should_panic(expected = "assertion failed: expected non-positive\n  got: 5\n  message: balance")]
    fn test_assert_that_not_fails_with_message() {
        assert_that_not!(5, is_positive(), "balance");
    }
}
