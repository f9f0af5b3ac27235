//! Sequences that produce elements from outside the combinator layer.
use crate::seq::Seq;

/// Sequence over the elements of an iterator.
#[derive(Clone, Debug)]
pub struct Values<I> {
    iter: I,
}

/// A sequence over the elements of anything iterable.
pub fn values<I>(iterable: I) -> Values<I::IntoIter>
where
    I: IntoIterator,
{
    Values {
        iter: iterable.into_iter(),
    }
}

impl<I> Seq for Values<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn resume(&mut self) -> Option<I::Item> {
        self.iter.next()
    }
}

/// Sequence produced by a closure.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

/// A sequence producing `f()` on each resume, until `f` returns `None`.
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn { f }
}

impl<T, F> Seq for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn resume(&mut self) -> Option<T> {
        (self.f)()
    }
}

/// Infinite sequence of a single value.
#[derive(Clone, Debug)]
pub struct Constant<T> {
    value: T,
}

/// An infinite sequence that always produces `value`.
///
/// Combine with [`Seq::take`] or [`Seq::take_while`]; driving this to exhaustion never ends.
pub fn constant<T>(value: T) -> Constant<T>
where
    T: Clone,
{
    Constant { value }
}

impl<T> Seq for Constant<T>
where
    T: Clone,
{
    type Item = T;

    fn resume(&mut self) -> Option<T> {
        Some(self.value.clone())
    }
}

/// Sequence with a release hook.
pub struct OnRelease<S, F> {
    seq: S,
    on_release: Option<F>,
}

/// Wrap `seq` so that `f` runs when it is released.
///
/// This models a source backed by a resource, such as an open handle, that must be closed once
/// the consumer is done with it.
pub fn on_release<S, F>(seq: S, f: F) -> OnRelease<S, F>
where
    S: Seq,
    F: FnOnce(),
{
    OnRelease {
        seq,
        on_release: Some(f),
    }
}

impl<S, F> Seq for OnRelease<S, F>
where
    S: Seq,
    F: FnOnce(),
{
    type Item = S::Item;

    fn resume(&mut self) -> Option<S::Item> {
        if self.on_release.is_none() {
            return None;
        }
        self.seq.resume()
    }

    fn release(&mut self) {
        self.seq.release();
        if let Some(f) = self.on_release.take() {
            f();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    #[test]
    fn values_of_containers() {
        assert_eq!(values(vec![1, 2, 3]).to_vec(), vec![1, 2, 3]);
        assert_eq!(values(&[1, 2][..]).to_vec(), vec![&1, &2]);
        assert_eq!(values(0..0).to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn from_fn_counts() {
        let mut n = 0;
        let seq = from_fn(move || {
            n += 1;
            if n <= 3 {
                Some(n)
            } else {
                None
            }
        });
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn constant_is_bounded_by_take() {
        assert_eq!(constant('x').take(4).to_vec(), vec!['x'; 4]);
        assert_eq!(constant(1).take(0).to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn release_hook_runs_once() {
        let calls = Cell::new(0);
        let mut seq = on_release(values(0..3), || calls.set(calls.get() + 1));
        assert_eq!(seq.resume(), Some(0));
        seq.release();
        seq.release();
        assert_eq!(calls.get(), 1);
        assert_eq!(seq.resume(), None);
    }
}
