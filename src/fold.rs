//! Reducing sequences to a single value.
use crate::error::Halted;
use crate::seq::Seq;

/// Left fold over a sequence.
///
/// Combines each element with the accumulator, starting from `init`, and always consumes the
/// whole sequence.
pub fn fold<S, B, F>(seq: S, init: B, mut f: F) -> B
where
    S: Seq,
    F: FnMut(S::Item, B) -> B,
{
    let mut acc = init;
    for item in seq.pull() {
        acc = f(item, acc);
    }
    acc
}

/// Whether every element of a sequence of booleans is `true`.
///
/// Stops at the first `false`, without resuming the sequence again. An empty sequence is
/// vacuously all `true`.
pub fn all<S>(seq: S) -> bool
where
    S: Seq<Item = bool>,
{
    // Same as folding with `&&`, but stops early.
    for b in seq.pull() {
        if !b {
            return false;
        }
    }
    true
}

/// Collect the values of a sequence of `(value, error)` pairs, up to the first error.
///
/// When an element carries an error, collection stops immediately and the values collected so far
/// are returned along with that error. The value paired with the error is dropped: producers
/// provide either a usable value or an error, never both.
pub fn collect_err<S, A, E>(seq: S) -> Result<Vec<A>, Halted<A, E>>
where
    S: Seq<Item = (A, Option<E>)>,
{
    let mut values = vec![];
    for (value, error) in seq.pull() {
        if let Some(error) = error {
            return Err(Halted::new(values, error));
        }
        values.push(value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;
    use std::error::Error as _;

    use proptest::prelude::*;
    use rstest::rstest;
    use thiserror::Error;

    use crate::source::{from_fn, values};

    #[derive(Debug, Error, PartialEq)]
    #[error("bad element {0}")]
    struct BadElement(u32);

    #[test]
    fn fold_appends_in_order() {
        let got = fold(values(vec![1, 2, 3, 4]), vec![], |a, mut acc: Vec<i32>| {
            acc.push(a);
            acc
        });
        assert_eq!(got, vec![1, 2, 3, 4]);
    }

    #[test]
    fn fold_sum() {
        assert_eq!(fold(values(1..=10), 0, |a, b| a + b), 55);
        assert_eq!(fold(values(0..0), 7, |a, b| a + b), 7);
    }

    #[rstest]
    #[case::three_true(vec![true, true, true], true)]
    #[case::first_false(vec![false, true, true], false)]
    #[case::middle_false(vec![true, false, true], false)]
    #[case::last_false(vec![true, true, false], false)]
    #[case::all_false(vec![false, false, false], false)]
    #[case::empty(vec![], true)]
    fn all_cases(#[case] input: Vec<bool>, #[case] want: bool) {
        assert_eq!(all(values(input)), want);
    }

    #[test]
    fn all_stops_at_first_false() {
        let resumed = Cell::new(0);
        let mut items = vec![true, false, true, true].into_iter();
        let seq = from_fn(|| {
            resumed.set(resumed.get() + 1);
            items.next()
        });
        assert!(!all(seq));
        assert_eq!(resumed.get(), 2);
    }

    #[test]
    fn collect_err_without_error() {
        let seq = values(vec![(1, None::<BadElement>), (2, None)]);
        assert_eq!(collect_err(seq).unwrap(), vec![1, 2]);
        let empty = values(Vec::<(u32, Option<BadElement>)>::new());
        assert!(collect_err(empty).unwrap().is_empty());
    }

    #[test]
    fn collect_err_halts() {
        let resumed = Cell::new(0);
        let mut items = vec![
            (1, None),
            (2, None),
            (0, Some(BadElement(3))),
            (4, None),
        ]
        .into_iter();
        let seq = from_fn(|| {
            resumed.set(resumed.get() + 1);
            items.next()
        });

        let halted = collect_err(seq).unwrap_err();
        assert_eq!(resumed.get(), 3);
        assert_eq!(halted.collected(), &[1, 2]);
        assert_eq!(halted.error(), &BadElement(3));
        assert_eq!(halted.to_string(), "collection halted after 2 values");
        assert_eq!(
            halted.source().map(|e| e.to_string()),
            Some("bad element 3".to_string())
        );

        let (collected, error) = halted.into_parts();
        assert_eq!(collected, vec![1, 2]);
        assert_eq!(error, BadElement(3));
    }

    #[test]
    fn collect_err_first_element_fails() {
        let seq = values(vec![(9, Some(BadElement(0))), (1, None)]);
        let halted = collect_err(seq).unwrap_err();
        assert!(halted.collected().is_empty());
    }

    proptest! {
        #[test]
        fn fold_reproduces_sequence(v in prop::collection::vec(any::<i64>(), 0..100)) {
            let got = fold(values(v.clone()), Vec::new(), |a, mut acc| {
                acc.push(a);
                acc
            });
            prop_assert_eq!(got, v);
        }

        #[test]
        fn all_matches_iterator(v in prop::collection::vec(any::<bool>(), 0..20)) {
            prop_assert_eq!(all(values(v.clone())), v.iter().all(|&b| b));
        }
    }
}
