//! Property-based tests for first-match evaluation.
//!
//! Cases are literal integer conditions whose outcome is the case's
//! insertion index, so the expected result of any input can be computed
//! by a linear search over the generated keys.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::cast_possible_wrap,
    reason = "Proptest macros generate code with these patterns"
)]

use casematch::{Condition, Matcher, Outcome, PatternId, Value, DEFAULT_KEY};
use proptest::prelude::*;

// -- Strategies --

/// Small key space so that inputs hit cases often.
fn keys_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..8, 0..12)
}

fn indexed_matcher(keys: &[i64]) -> Matcher {
    Matcher::new(
        keys.iter()
            .enumerate()
            .map(|(i, k)| (Condition::from(*k), Outcome::from(i as i64))),
        "default",
    )
}

fn expected(keys: &[i64], input: i64) -> Value {
    keys.iter()
        .position(|k| *k == input)
        .map_or(Value::string("default"), |i| Value::int(i as i64))
}

proptest! {
    #[test]
    fn eval_returns_first_accepting_case(keys in keys_strategy(), input in 0i64..10) {
        let m = indexed_matcher(&keys);
        prop_assert_eq!(m.eval(&Value::int(input)).unwrap(), expected(&keys, input));
    }

    #[test]
    fn append_keeps_earlier_outcomes(keys in keys_strategy(), extra in 0i64..8, input in 0i64..10) {
        let mut m = indexed_matcher(&keys);
        let before = m.eval(&Value::int(input)).unwrap();
        m.case(extra, "appended");
        let after = m.eval(&Value::int(input)).unwrap();
        if keys.contains(&input) {
            prop_assert_eq!(after, before);
        } else if input == extra {
            prop_assert_eq!(after, Value::string("appended"));
        } else {
            prop_assert_eq!(after, before);
        }
    }

    #[test]
    fn ids_track_appends_minus_removals(
        keys in keys_strategy(),
        removals in prop::collection::vec(any::<prop::sample::Index>(), 0..6),
    ) {
        let mut m = indexed_matcher(&keys);
        let mut survivors: Vec<PatternId> = m.ids().collect();
        for pick in removals {
            if survivors.is_empty() {
                break;
            }
            let id = survivors.remove(pick.index(survivors.len()));
            m.remove(id);
            prop_assert!(m.get_pattern(id).is_none());
            // A second removal of the same id changes nothing.
            m.remove(id);
        }
        prop_assert_eq!(m.ids().collect::<Vec<_>>(), survivors.clone());
        prop_assert_eq!(m.len(), survivors.len());
    }

    #[test]
    fn removal_exposes_the_next_accepting_case(keys in keys_strategy(), input in 0i64..8) {
        let mut m = indexed_matcher(&keys);
        let ids: Vec<PatternId> = m.ids().collect();
        if let Some(first) = keys.iter().position(|k| *k == input) {
            m.remove(ids[first]);
            let next = keys
                .iter()
                .enumerate()
                .skip(first + 1)
                .find(|(_, k)| **k == input)
                .map_or(Value::string("default"), |(i, _)| Value::int(i as i64));
            prop_assert_eq!(m.eval(&Value::int(input)).unwrap(), next);
        }
    }

    #[test]
    fn eval_is_idempotent(keys in keys_strategy(), input in 0i64..10) {
        let m = indexed_matcher(&keys);
        let first = m.eval(&Value::int(input)).unwrap();
        let second = m.eval(&Value::int(input)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn from_mapping_sentinel_sets_default(
        names in prop::collection::vec("[a-z]{1,4}", 0..6),
        with_default in any::<bool>(),
    ) {
        let mut pairs: Vec<(Value, Value)> =
            names.iter().map(|n| (Value::string(n.as_str()), Value::string(n.to_uppercase()))).collect();
        if with_default {
            pairs.push((Value::from(DEFAULT_KEY), Value::string("fallback")));
        }
        let m = Matcher::from_mapping(pairs);
        prop_assert_eq!(m.len(), names.len());

        // Digits never appear among the generated keys.
        let miss = m.eval(&Value::string("0")).unwrap();
        if with_default {
            prop_assert_eq!(miss, Value::string("fallback"));
        } else {
            prop_assert_eq!(miss, Value::None);
        }
        for name in &names {
            prop_assert_eq!(
                m.eval(&Value::string(name.as_str())).unwrap(),
                Value::string(name.to_uppercase())
            );
        }
    }
}
