//! Sharing matchers across threads and panic propagation.

use std::sync::Arc;
use std::thread;

use testkit_match::matcher::{anything, satisfies, Matcher};
use testkit_match::mock::spy;
use testkit_match::{assert_that, MatchResult};

#[derive(Debug)]
struct Account {
    owner: String,
    balance: i64,
}

fn is_positive() -> impl Matcher<i64> + Send + Sync {
    satisfies(|x: &i64| *x > 0, "expected positive", "expected non-positive")
}

#[test]
fn one_matcher_many_threads() {
    let solvent = is_positive()
        .compose(|a: &Account| a.balance)
        .and(satisfies(|a: &Account| !a.owner.is_empty(), "expected an owner", "expected no owner"));

    let accounts: Vec<Account> = (-50..50)
        .map(|balance| Account {
            owner: format!("owner-{balance}"),
            balance,
        })
        .collect();

    thread::scope(|scope| {
        for chunk in accounts.chunks(10) {
            let solvent = &solvent;
            scope.spawn(move || {
                for account in chunk {
                    let result = solvent.test(account);
                    assert_eq!(result.passed(), account.balance > 0);
                }
            });
        }
    });
}

#[test]
fn arc_shared_spy_counts_every_thread() {
    let shared = Arc::new(spy(is_positive()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let m = Arc::clone(&shared);
            thread::spawn(move || {
                for v in 0..25 {
                    let _ = m.test(&(i * 25 + v));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(shared.call_count(), 100);
    let passed = shared.calls().iter().filter(|c| c.result.passed()).count();
    assert_eq!(passed, 99);
}

#[test]
fn repeated_evaluation_is_consistent() {
    let m = is_positive().invert();
    let first = m.test(&-1);
    for _ in 0..10 {
        assert_eq!(m.test(&-1), first);
    }
    assert_eq!(first, MatchResult::new(true, "expected non-positive", "expected positive"));
}

#[test]
#[should_panic(expected = "no balance on file")]
fn transform_panic_propagates() {
    let m = is_positive().compose(|_: &Account| -> i64 { panic!("no balance on file") });
    let _ = m.test(&Account {
        owner: "ada".into(),
        balance: 1,
    });
}

#[test]
fn failed_first_operand_skips_panicking_transform() {
    let m = is_positive()
        .and(is_positive().compose(|_: &i64| -> i64 { panic!("must not run") }));
    assert_eq!(m.test(&-5), is_positive().test(&-5));
}

#[test]
fn assert_that_on_composed_matcher() {
    let rich = is_positive().compose(|a: &Account| a.balance);
    assert_that!(
        Account {
            owner: "grace".into(),
            balance: 10,
        },
        rich
    );
}

#[test]
fn spy_count_matches_history_under_concurrent_reset() {
    let shared = Arc::new(spy(anything::<i32>()));

    thread::scope(|scope| {
        for _ in 0..4 {
            let s = Arc::clone(&shared);
            scope.spawn(move || {
                for v in 0..500 {
                    let _ = s.test(&v);
                }
            });
        }
        let s = Arc::clone(&shared);
        scope.spawn(move || {
            for _ in 0..200 {
                s.reset();
            }
        });
    });

    assert_eq!(shared.call_count(), shared.calls().len());
}
