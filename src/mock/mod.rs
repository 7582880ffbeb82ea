//! Utilities for observing matchers in tests.
//!
//! - [`Spy`] - matcher wrapper recording every evaluation
//! - [`CallRecord`] - one recorded evaluation
//!
//! # Example
//!
//! ```rust
//! use testkit_match::matcher::{anything, Matcher};
//! use testkit_match::mock::spy;
//!
//! let s = spy(anything::<i32>());
//! assert!(s.test(&1).passed());
//! assert_eq!(s.call_count(), 1);
//! ```

mod spy;

pub use spy::{spy, CallRecord, Spy};
