//! One-pass sequence adapters.
//!
//! Each adapter resumes its source only as far as needed to produce its own next element, and
//! forwards [`Seq::release`] to the source.
use crate::seq::Seq;
use crate::view::View;

/// Sequence adapter transforming each element, see [`Seq::map`] and [`Seq::split_map`].
#[derive(Clone)]
pub struct Map<S, F> {
    seq: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(seq: S, f: F) -> Map<S, F> {
        Map { seq, f }
    }
}

impl<S, U, F> Seq for Map<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn resume(&mut self) -> Option<U> {
        self.seq.resume().map(&mut self.f)
    }

    fn release(&mut self) {
        self.seq.release()
    }
}

/// Sequence adapter transforming each pair, see [`Seq2::map2`][crate::seq::Seq2::map2] and
/// [`Seq2::merge_map`][crate::seq::Seq2::merge_map].
#[derive(Clone)]
pub struct Map2<S, F> {
    seq: S,
    f: F,
}

impl<S, F> Map2<S, F> {
    pub(crate) fn new(seq: S, f: F) -> Map2<S, F> {
        Map2 { seq, f }
    }
}

impl<S, A, B, U, F> Seq for Map2<S, F>
where
    S: Seq<Item = (A, B)>,
    F: FnMut(A, B) -> U,
{
    type Item = U;

    fn resume(&mut self) -> Option<U> {
        let (a, b) = self.seq.resume()?;
        Some((self.f)(a, b))
    }

    fn release(&mut self) {
        self.seq.release()
    }
}

/// Sequence adapter pairing elements with their index, see [`Seq::enumerate`].
#[derive(Clone, Debug)]
pub struct Enumerate<S> {
    seq: S,
    index: usize,
}

impl<S> Enumerate<S> {
    pub(crate) fn new(seq: S) -> Enumerate<S> {
        Enumerate { seq, index: 0 }
    }
}

impl<S> Seq for Enumerate<S>
where
    S: Seq,
{
    type Item = (usize, S::Item);

    fn resume(&mut self) -> Option<(usize, S::Item)> {
        let item = self.seq.resume()?;
        let index = self.index;
        self.index += 1;
        Some((index, item))
    }

    fn release(&mut self) {
        self.seq.release()
    }
}

/// Sequence adapter skipping elements, see [`Seq::filter`].
#[derive(Clone)]
pub struct Filter<S, P> {
    seq: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(seq: S, predicate: P) -> Filter<S, P> {
        Filter { seq, predicate }
    }
}

impl<S, P> Seq for Filter<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn resume(&mut self) -> Option<S::Item> {
        loop {
            let item = self.seq.resume()?;
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
    }

    fn release(&mut self) {
        self.seq.release()
    }
}

/// Sequence adapter bounding the number of elements, see [`Seq::take`].
#[derive(Clone, Debug)]
pub struct Take<S> {
    seq: S,
    remaining: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(seq: S, n: usize) -> Take<S> {
        Take { seq, remaining: n }
    }
}

impl<S> Seq for Take<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn resume(&mut self) -> Option<S::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.seq.resume() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn release(&mut self) {
        self.seq.release()
    }
}

/// Sequence adapter producing the prefix satisfying a predicate, see [`Seq::take_while`].
#[derive(Clone)]
pub struct TakeWhile<S, P> {
    seq: S,
    predicate: P,
    done: bool,
}

impl<S, P> TakeWhile<S, P> {
    pub(crate) fn new(seq: S, predicate: P) -> TakeWhile<S, P> {
        TakeWhile {
            seq,
            predicate,
            done: false,
        }
    }
}

impl<S, P> Seq for TakeWhile<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn resume(&mut self) -> Option<S::Item> {
        if self.done {
            return None;
        }
        match self.seq.resume() {
            Some(item) if (self.predicate)(&item) => Some(item),
            _ => {
                self.done = true;
                None
            }
        }
    }

    fn release(&mut self) {
        self.seq.release()
    }
}

/// Sequence adapter grouping elements into batches, see [`Seq::batch`].
///
/// Every batch is delivered as a [`View`] onto the same buffer. The buffer is only overwritten
/// once the first element of the next batch is available, so after the last delivery all views
/// show the last batch.
pub struct Batch<S>
where
    S: Seq,
{
    seq: S,
    size: usize,
    view: View<S::Item>,
    done: bool,
}

impl<S> Batch<S>
where
    S: Seq,
{
    pub(crate) fn new(seq: S, size: usize) -> Batch<S> {
        Batch {
            seq,
            size,
            // A huge size only bounds the batch, it shouldn't be preallocated.
            view: View::with_capacity(size.min(1024)),
            done: size == 0,
        }
    }
}

impl<S> Seq for Batch<S>
where
    S: Seq,
{
    type Item = View<S::Item>;

    fn resume(&mut self) -> Option<View<S::Item>> {
        if self.done {
            return None;
        }
        let first = match self.seq.resume() {
            Some(item) => item,
            None => {
                self.done = true;
                return None;
            }
        };
        {
            let mut buf = self.view.borrow_mut();
            buf.clear();
            buf.push(first);
            while buf.len() < self.size {
                match self.seq.resume() {
                    Some(item) => buf.push(item),
                    None => {
                        self.done = true;
                        break;
                    }
                }
            }
        }
        Some(self.view.clone())
    }

    fn release(&mut self) {
        self.seq.release()
    }
}
