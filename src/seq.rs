//! The lazy sequence abstraction.
use num_traits::PrimInt;

use crate::concat::Concat;
use crate::ops::{Batch, Enumerate, Filter, Map, Map2, Take, TakeWhile};
use crate::zip::Zip;
use crate::Flow;

/// A lazy sequence.
///
/// A sequence is a resumable producer. Each call to [`Seq::resume`] produces at most one element
/// and nothing is produced ahead of demand. Once `resume` returns `None` the sequence is exhausted
/// and must not be resumed again.
///
/// Consumers either drive a sequence push-style with [`Seq::drive`], or pull from it one element
/// at a time with [`Seq::pull`]. Both guarantee that [`Seq::release`] runs exactly once when
/// consumption ends, whether the sequence was exhausted or the consumer stopped early.
pub trait Seq {
    type Item;

    /// Produce the next element, or `None` when exhausted.
    fn resume(&mut self) -> Option<Self::Item>;

    /// Release anything held by the sequence.
    ///
    /// Adapters forward this to the sequences they wrap. Consumers should not call this directly,
    /// but go through [`Pull`], which makes sure it runs exactly once.
    fn release(&mut self) {}

    /// Turn this sequence into an imperatively driven source.
    fn pull(self) -> Pull<Self>
    where
        Self: Sized,
    {
        Pull::new(self)
    }

    /// Drive a callback over the elements of this sequence.
    ///
    /// Stops when the sequence is exhausted, returning `Flow::Continue`, or when the callback
    /// returns `Flow::Break`, which is then passed on. The sequence is released in both cases.
    fn drive<F>(self, mut f: F) -> Flow
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Flow,
    {
        let mut source = self.pull();
        for item in &mut source {
            if f(item).is_break() {
                return Flow::Break(());
            }
        }
        Flow::Continue(())
    }

    /// Collect all elements into a vector.
    fn to_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.pull().collect()
    }

    /// Pair each element with its zero-based position.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Transform each element.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    /// Transform each element into a pair.
    fn split_map<A, B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> (A, B),
    {
        Map::new(self, f)
    }

    /// Keep only the elements satisfying `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Produce at most the first `n` elements.
    ///
    /// A non-positive `n` produces nothing.
    fn take<N>(self, n: N) -> Take<Self>
    where
        Self: Sized,
        N: PrimInt,
    {
        Take::new(self, count(n))
    }

    /// Produce elements while `predicate` holds, stopping at the first one for which it fails.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Group consecutive elements into batches of `n`.
    ///
    /// A non-positive `n` produces nothing.
    fn batch<N>(self, n: N) -> Batch<Self>
    where
        Self: Sized,
        N: PrimInt,
    {
        Batch::new(self, count(n))
    }

    /// Pair the elements of this sequence with those of `other`, in lockstep.
    ///
    /// See [`Zip`] for the order in which both sides are resumed.
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        Self: Sized,
        B: Seq,
    {
        Zip::new(self, other)
    }

    /// Produce the elements of each inner sequence in turn.
    fn flatten(self) -> Concat<Self>
    where
        Self: Sized,
        Self::Item: Seq,
    {
        Concat::new(self)
    }
}

impl<S> Seq for Box<S>
where
    S: Seq + ?Sized,
{
    type Item = S::Item;

    fn resume(&mut self) -> Option<S::Item> {
        (**self).resume()
    }

    fn release(&mut self) {
        (**self).release()
    }
}

/// A sequence of pairs.
///
/// Every [`Seq`] producing tuples `(A, B)` is a paired sequence. This adds the operations that
/// take the two halves of a pair as separate arguments.
pub trait Seq2<A, B>: Seq<Item = (A, B)> {
    /// Drive a two-argument callback over the pairs of this sequence.
    fn drive2<F>(self, mut f: F) -> Flow
    where
        Self: Sized,
        F: FnMut(A, B) -> Flow,
    {
        self.drive(move |(a, b)| f(a, b))
    }

    /// Transform each pair into a pair.
    fn map2<C, D, F>(self, f: F) -> Map2<Self, F>
    where
        Self: Sized,
        F: FnMut(A, B) -> (C, D),
    {
        Map2::new(self, f)
    }

    /// Transform each pair into a single value.
    fn merge_map<U, F>(self, f: F) -> Map2<Self, F>
    where
        Self: Sized,
        F: FnMut(A, B) -> U,
    {
        Map2::new(self, f)
    }
}

impl<S, A, B> Seq2<A, B> for S where S: Seq<Item = (A, B)> {}

/// Pull adapter for a sequence.
///
/// Produces elements one at a time through its [`Iterator`] implementation. The wrapped sequence
/// is released exactly once: when it is exhausted, when [`Pull::release`] is called, or when the
/// adapter is dropped, whichever happens first. After that, no more elements are produced.
pub struct Pull<S>
where
    S: Seq,
{
    seq: S,
    released: bool,
}

impl<S> Pull<S>
where
    S: Seq,
{
    pub fn new(seq: S) -> Pull<S> {
        Pull {
            seq,
            released: false,
        }
    }

    /// Stop the source and release it.
    ///
    /// Calling this more than once, or after the source was exhausted, does nothing.
    pub fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.seq.release();
        }
    }

    /// Whether the source has been released.
    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl<S> Iterator for Pull<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.released {
            return None;
        }
        let item = self.seq.resume();
        if item.is_none() {
            self.release();
        }
        item
    }
}

impl<S> Drop for Pull<S>
where
    S: Seq,
{
    fn drop(&mut self) {
        self.release();
    }
}

/// Clamp a count argument to `usize`.
///
/// Negative counts become zero, counts too large for `usize` are as good as unbounded.
fn count<N>(n: N) -> usize
where
    N: PrimInt,
{
    match n.to_usize() {
        Some(n) => n,
        None if n < N::zero() => 0,
        None => usize::MAX,
    }
}
