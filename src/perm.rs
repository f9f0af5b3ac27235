//! Enumeration of all orderings of a slice.
use num_integer::Integer;

use crate::seq::Seq;
use crate::view::View;
use crate::{Flow, CONTINUE, STOP};

/// Sequence of all permutations of a slice.
///
/// The permutations are generated by Heap's algorithm in its non-recursive form (see Sedgewick,
/// "Permutation Generation Methods"): every permutation after the first is obtained from the
/// previous one by swapping two elements of the slice in place.
///
/// After each swap the slice is copied into a single output buffer, which is delivered as a
/// [`View`]. Every delivery is a view onto that same buffer, so a permutation is only valid until
/// the sequence is resumed. Use [`View::to_vec`] to keep it.
///
/// A slice of length n ≥ 1 has n! permutations, the first one being the slice as given. An empty
/// slice has no permutations.
///
/// When the sequence stops early the slice is left as it was at the last delivery. After all
/// permutations are produced it holds the last permutation.
pub struct Permutations<'a, T> {
    data: &'a mut [T],
    // Heap's algorithm's counters, one per position of the slice.
    counters: Vec<usize>,
    pos: usize,
    started: bool,
    delivered: usize,
    view: View<T>,
}

/// All permutations of `data`, mutating it in place.
///
/// See [`Permutations`].
pub fn permutations<T>(data: &mut [T]) -> Permutations<'_, T>
where
    T: Clone,
{
    Permutations::new(data)
}

impl<'a, T> Permutations<'a, T>
where
    T: Clone,
{
    pub fn new(data: &'a mut [T]) -> Permutations<'a, T> {
        let len = data.len();
        Permutations {
            data,
            counters: vec![0; len],
            pos: 0,
            started: false,
            delivered: 0,
            view: View::with_capacity(len),
        }
    }

    /// The number of permutations still to come.
    ///
    /// Returns None if the total number doesn't fit into `usize`.
    pub fn remaining(&self) -> Option<usize> {
        permutation_count(self.data.len()).map(|total| total - self.delivered)
    }

    fn deliver(&mut self) -> View<T> {
        self.delivered += 1;
        self.view.assign_from(self.data);
        self.view.clone()
    }
}

impl<'a, T> Seq for Permutations<'a, T>
where
    T: Clone,
{
    type Item = View<T>;

    fn resume(&mut self) -> Option<View<T>> {
        if !self.started {
            self.started = true;
            if self.data.is_empty() {
                return None;
            }
            return Some(self.deliver());
        }

        while self.pos < self.data.len() {
            let i = self.pos;
            let c = self.counters[i];
            if c < i {
                if i.is_even() {
                    self.data.swap(0, i);
                } else {
                    self.data.swap(c, i);
                }
                self.counters[i] += 1;
                self.pos = 1;
                return Some(self.deliver());
            }
            self.counters[i] = 0;
            self.pos += 1;
        }
        None
    }
}

/// The number of permutations delivered for a slice of length `len`.
///
/// This is `len!` for a non-empty slice and zero for an empty one. Returns None on overflow.
pub fn permutation_count(len: usize) -> Option<usize> {
    if len == 0 {
        return Some(0);
    }
    (2..=len).try_fold(1usize, |acc, k| acc.checked_mul(k))
}

/// Call `f` on every permutation of `data`, using the recursive form of Heap's algorithm.
///
/// Performs the same swaps in the same order as [`Permutations`], so `f` sees the same sequence of
/// permutations. Each one is copied into an output buffer before `f` sees it. Stops as soon as `f`
/// returns `Flow::Break`, which is then passed on.
pub fn for_each_permutation<T, F>(data: &mut [T], mut f: F) -> Flow
where
    T: Clone,
    F: FnMut(&[T]) -> Flow,
{
    if data.is_empty() {
        return CONTINUE;
    }
    let mut out = data.to_vec();
    heap(data.len(), data, &mut out, &mut f)
}

/// Permute the first `k` elements of `data`.
fn heap<T, F>(k: usize, data: &mut [T], out: &mut [T], f: &mut F) -> Flow
where
    T: Clone,
    F: FnMut(&[T]) -> Flow,
{
    if k == 1 {
        out.clone_from_slice(data);
        return f(out);
    }
    if heap(k - 1, data, out, f).is_break() {
        return STOP;
    }
    for i in 0..k - 1 {
        if k.is_even() {
            data.swap(i, k - 1);
        } else {
            data.swap(0, k - 1);
        }
        if heap(k - 1, data, out, f).is_break() {
            return STOP;
        }
    }
    CONTINUE
}
