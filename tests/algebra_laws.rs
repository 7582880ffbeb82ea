//! Algebraic laws of the matcher combinators, checked over generated inputs.

use proptest::prelude::*;
use testkit_match::matcher::{all_of, any_of, anything, not, satisfies, Matcher};
use testkit_match::MatchResult;

/// A base matcher whose verdict is `value > threshold`, with messages that
/// identify it.
fn above(threshold: i64, tag: &str) -> impl Matcher<i64> + Clone {
    satisfies(
        move |v: &i64| *v > threshold,
        format!("{tag}: expected > {threshold}"),
        format!("{tag}: expected <= {threshold}"),
    )
}

proptest! {
    #[test]
    fn and_short_circuits_on_failure(a in any::<i64>(), b in any::<i64>(), v in any::<i64>()) {
        let left = above(a, "left");
        let right = above(b, "right");
        let expected = if left.test(&v).passed() { right.test(&v) } else { left.test(&v) };
        prop_assert_eq!(left.clone().and(right.clone()).test(&v), expected);
    }

    #[test]
    fn or_short_circuits_on_pass(a in any::<i64>(), b in any::<i64>(), v in any::<i64>()) {
        let left = above(a, "left");
        let right = above(b, "right");
        let expected = if left.test(&v).passed() { left.test(&v) } else { right.test(&v) };
        prop_assert_eq!(left.clone().or(right.clone()).test(&v), expected);
    }

    #[test]
    fn double_negation_is_identity(a in any::<i64>(), v in any::<i64>()) {
        let m = above(a, "m");
        prop_assert_eq!(m.clone().invert().invert().test(&v), m.test(&v));
    }

    #[test]
    fn negation_swaps_messages(a in any::<i64>(), v in any::<i64>()) {
        let m = above(a, "m");
        let original = m.test(&v);
        let negated = not(m).test(&v);
        prop_assert_eq!(negated.passed(), !original.passed());
        prop_assert_eq!(negated.failure_message(), original.negated_failure_message());
        prop_assert_eq!(negated.negated_failure_message(), original.failure_message());
    }

    #[test]
    fn compose_equals_test_of_transform(a in any::<i64>(), s in ".{0,32}") {
        let m = above(a, "len");
        let len = |s: &String| i64::try_from(s.chars().count()).unwrap_or(i64::MAX);
        prop_assert_eq!(m.clone().compose(len).test(&s), m.test(&len(&s)));
    }

    #[test]
    fn de_morgan_holds_for_verdicts(a in any::<i64>(), b in any::<i64>(), v in any::<i64>()) {
        let lhs = above(a, "a").and(above(b, "b")).invert();
        let rhs = above(a, "a").invert().or(above(b, "b").invert());
        prop_assert_eq!(lhs.test(&v).passed(), rhs.test(&v).passed());
    }

    #[test]
    fn anything_is_left_identity_of_and(a in any::<i64>(), v in any::<i64>()) {
        let m = above(a, "m");
        prop_assert_eq!(anything::<i64>().and(m.clone()).test(&v), m.test(&v));
    }

    #[test]
    fn all_of_matches_nested_and(a in any::<i64>(), b in any::<i64>(), c in any::<i64>(), v in any::<i64>()) {
        let folded = all_of(vec![above(a, "x"), above(b, "x"), above(c, "x")]);
        let nested = above(a, "x").and(above(b, "x")).and(above(c, "x"));
        prop_assert_eq!(folded.test(&v), nested.test(&v));
    }

    #[test]
    fn any_of_matches_nested_or(a in any::<i64>(), b in any::<i64>(), c in any::<i64>(), v in any::<i64>()) {
        let folded = any_of(vec![above(a, "x"), above(b, "x"), above(c, "x")]);
        let nested = above(a, "x").or(above(b, "x")).or(above(c, "x"));
        prop_assert_eq!(folded.test(&v), nested.test(&v));
    }
}

#[test]
fn is_positive_and_is_even_on_three() {
    let is_positive = satisfies(|x: &i64| *x > 0, "expected positive", "expected non-positive");
    let is_even = satisfies(|x: &i64| x % 2 == 0, "expected even", "expected odd");

    assert_eq!(
        (&is_positive).and(&is_even).test(&3),
        MatchResult::new(false, "expected even", "expected odd")
    );
}
