//! # testkit-match 🧰
//!
//! > Composable matchers for Rust tests
//!
//! **testkit-match** provides a [`Matcher`] abstraction (a predicate that
//! explains itself on failure) and a small algebra for combining matchers
//! into richer checks.
//!
//! ## Quick Start
//!
//! ```rust
//! use testkit_match::prelude::*;
//!
//! let is_positive = satisfies(|x: &i32| *x > 0, "expected positive", "expected non-positive");
//! let is_even = satisfies(|x: &i32| x % 2 == 0, "expected even", "expected odd");
//!
//! let m = (&is_positive).and(&is_even);
//! assert_eq!(m.test(&3).failure_message(), "expected even");
//!
//! assert_that!(4, m);
//! assert_that_not!(-1, is_positive);
//! ```
//!
//! ## Features
//!
//! - 🧩 **Matcher algebra** - `invert`, `compose`, `and`, `or`
//! - 📝 **Two-sided messages** - every result explains both the direct and the negated failure
//! - ✅ **Assertions** - `check` functions and `assert_that!` macros
//! - 🔍 **Spies** - observe which matchers actually ran
//!
//! ## Cargo features
//!
//! - `tracing` (default) - emit `tracing` events on short-circuits,
//!   spy recordings and assertion failures

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assertions;
pub mod error;
pub mod matcher;
pub mod mock;

/// Prelude for convenient imports
///
/// ```rust
/// use testkit_match::prelude::*;
/// ```
pub mod prelude {
    pub use crate::assertions::{check, check_not};
    pub use crate::error::{Error, Result};
    pub use crate::matcher::{
        all_of, any_of, anything, matcher_fn, not, satisfies, MatchResult, Matcher,
    };
    pub use crate::mock::spy;
    pub use crate::{assert_that, assert_that_not};
}

// Re-exports
pub use error::{Error, Result};
pub use matcher::{MatchResult, Matcher};
