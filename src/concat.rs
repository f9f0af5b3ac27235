//! Concatenation of sequences.
use crate::seq::{Pull, Seq};
use crate::source::{values, Values};

/// Sequence of the elements of each inner sequence in turn.
///
/// An inner sequence is only started once the previous one is exhausted, and is released as soon
/// as it is exhausted. Releasing the concatenation releases the current inner sequence and the
/// outer one, without starting any later inner sequence.
pub struct Concat<S>
where
    S: Seq,
    S::Item: Seq,
{
    outer: S,
    current: Option<Pull<S::Item>>,
    done: bool,
}

impl<S> Concat<S>
where
    S: Seq,
    S::Item: Seq,
{
    pub(crate) fn new(outer: S) -> Concat<S> {
        Concat {
            outer,
            current: None,
            done: false,
        }
    }
}

/// Concatenate a sequence of sequences.
pub fn concat<S>(seqs: S) -> Concat<S>
where
    S: Seq,
    S::Item: Seq,
{
    Concat::new(seqs)
}

/// Concatenate a fixed list of sequences, starting with the first.
pub fn chain<I>(seqs: I) -> Concat<Values<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: Seq,
{
    Concat::new(values(seqs))
}

impl<S> Seq for Concat<S>
where
    S: Seq,
    S::Item: Seq,
{
    type Item = <S::Item as Seq>::Item;

    fn resume(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = &mut self.current {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.current = None;
            }
            if self.done {
                return None;
            }
            match self.outer.resume() {
                Some(inner) => self.current = Some(inner.pull()),
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
    }

    fn release(&mut self) {
        if let Some(mut inner) = self.current.take() {
            inner.release();
        }
        self.outer.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use proptest::prelude::*;

    use crate::source::on_release;
    use crate::{CONTINUE, STOP};

    #[test]
    fn chain_copies() {
        let items = vec![1, 2, 3, 4, 5];
        for copies in 0..10 {
            let seqs: Vec<_> = (0..copies).map(|_| values(items.clone())).collect();
            let got = chain(seqs).to_vec();
            assert_eq!(got, items.repeat(copies));
        }
    }

    #[test]
    fn skips_empty_inner() {
        let seqs = vec![values(vec![]), values(vec![1]), values(vec![]), values(vec![2, 3])];
        assert_eq!(chain(seqs).to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn nested() {
        let seqs = values(1..4).map(|n| values(0..n));
        assert_eq!(concat(seqs).to_vec(), vec![0, 0, 1, 0, 1, 2]);
        assert_eq!(
            values(1..3).map(|n| values(0..n)).flatten().to_vec(),
            vec![0, 0, 1]
        );
    }

    #[test]
    fn stop_does_not_start_later_inner() {
        let started = &Cell::new(0);
        let released = &Cell::new(0);
        let seqs = values(0..3).map(move |k| {
            started.set(started.get() + 1);
            on_release(values(k * 10..k * 10 + 3), move || {
                released.set(released.get() + 1)
            })
        });

        let mut seen = vec![];
        let flow = concat(seqs).drive(|x| {
            seen.push(x);
            if x == 11 {
                STOP
            } else {
                CONTINUE
            }
        });
        assert_eq!(flow, STOP);
        assert_eq!(seen, vec![0, 1, 2, 10, 11]);
        assert_eq!(started.get(), 2);
        assert_eq!(released.get(), 2);
    }

    #[test]
    fn inner_released_on_exhaustion() {
        let released = &Cell::new(0);
        let seqs = values(0..2)
            .map(move |_| on_release(values(0..1), move || released.set(released.get() + 1)));
        let mut all = concat(seqs).pull();
        assert_eq!(all.next(), Some(0));
        assert_eq!(released.get(), 0);
        assert_eq!(all.next(), Some(0));
        assert_eq!(released.get(), 1);
        assert_eq!(all.next(), None);
        assert_eq!(released.get(), 2);
    }

    proptest! {
        #[test]
        fn concatenation_preserves_order(
            parts in prop::collection::vec(prop::collection::vec(any::<i32>(), 0..10), 0..10)
        ) {
            let got = chain(parts.iter().cloned().map(values)).to_vec();
            prop_assert_eq!(got, parts.concat());
        }
    }
}
