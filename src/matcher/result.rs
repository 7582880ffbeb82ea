//! The outcome of a single matcher evaluation.

use std::fmt;

/// Verdict of one [`Matcher::test`](super::Matcher::test) call.
///
/// Both messages are always populated, whatever the verdict: a combinator
/// such as [`invert`](super::Matcher::invert) may need either one depending
/// on how the matcher is used, not just on the immediate outcome.
///
/// # Example
///
/// ```rust
/// use testkit_match::MatchResult;
///
/// let result = MatchResult::new(false, "expected positive", "expected non-positive");
/// assert!(!result.passed());
/// assert_eq!(result.failure_message(), "expected positive");
/// assert_eq!(result.negated_failure_message(), "expected non-positive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub struct MatchResult {
    passed: bool,
    failure_message: String,
    negated_failure_message: String,
}

impl MatchResult {
    /// Create a result from a verdict and both failure explanations.
    ///
    /// `failure_message` is shown when the matcher is asserted directly and
    /// fails; `negated_failure_message` is shown when it is asserted in the
    /// negated form and the value unexpectedly satisfies it.
    pub fn new(
        passed: bool,
        failure_message: impl Into<String>,
        negated_failure_message: impl Into<String>,
    ) -> Self {
        Self {
            passed,
            failure_message: failure_message.into(),
            negated_failure_message: negated_failure_message.into(),
        }
    }

    /// Whether the evaluated value satisfied the condition.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Explanation for a failed direct assertion.
    #[must_use]
    pub fn failure_message(&self) -> &str {
        &self.failure_message
    }

    /// Explanation for a failed negated assertion.
    #[must_use]
    pub fn negated_failure_message(&self) -> &str {
        &self.negated_failure_message
    }

    /// The same evaluation seen through a negation: verdict flipped,
    /// messages swapped.
    pub fn inverted(self) -> Self {
        Self {
            passed: !self.passed,
            failure_message: self.negated_failure_message,
            negated_failure_message: self.failure_message,
        }
    }

    /// Split into `(passed, failure_message, negated_failure_message)`.
    #[must_use]
    pub fn into_parts(self) -> (bool, String, String) {
        (self.passed, self.failure_message, self.negated_failure_message)
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed {
            write!(f, "passed (negated: {})", self.negated_failure_message)
        } else {
            write!(f, "failed: {}", self.failure_message)
        }
    }
}
