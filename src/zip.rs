//! Pairing two sequences element-wise.
use crate::seq::{Pull, Seq};

/// Sequence of pairs taken from two sequences in lockstep.
///
/// The right-hand sequence drives the pairing and the left-hand sequence is pulled on demand:
/// each step first resumes the right side, then pulls one element from the left side. The pairing
/// stops as soon as either side is exhausted, even if the other has elements left. Releasing the
/// pairing releases both sides.
pub struct Zip<A, B>
where
    A: Seq,
{
    a: Pull<A>,
    b: B,
    done: bool,
}

impl<A, B> Zip<A, B>
where
    A: Seq,
{
    pub(crate) fn new(a: A, b: B) -> Zip<A, B> {
        Zip {
            a: a.pull(),
            b,
            done: false,
        }
    }
}

/// Pair up the elements of `a` and `b`.
///
/// The `k`-th pair holds the `k`-th elements of both. The result has as many pairs as the shorter
/// of the two sequences has elements.
pub fn zip<A, B>(a: A, b: B) -> Zip<A, B>
where
    A: Seq,
    B: Seq,
{
    Zip::new(a, b)
}

impl<A, B> Seq for Zip<A, B>
where
    A: Seq,
    B: Seq,
{
    type Item = (A::Item, B::Item);

    fn resume(&mut self) -> Option<(A::Item, B::Item)> {
        if self.done {
            return None;
        }
        let pair = match self.b.resume() {
            Some(b) => self.a.next().map(|a| (a, b)),
            None => None,
        };
        if pair.is_none() {
            self.done = true;
        }
        pair
    }

    fn release(&mut self) {
        self.a.release();
        self.b.release();
    }
}
