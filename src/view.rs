//! Shared views onto reusable output buffers.
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// A handle to a buffer that its producer overwrites on every delivery.
///
/// Producers like [`Permutations`][crate::perm::Permutations] and [`Batch`][crate::ops::Batch]
/// allocate a single buffer per run and hand out clones of the same handle for each delivery. All
/// handles observe the latest contents, so a delivered view is only meaningful until its producer
/// resumes. Use [`View::to_vec`] to keep a delivery around.
pub struct View<T> {
    buf: Rc<RefCell<Vec<T>>>,
}

impl<T> View<T> {
    pub(crate) fn with_capacity(capacity: usize) -> View<T> {
        View {
            buf: Rc::new(RefCell::new(Vec::with_capacity(capacity))),
        }
    }

    /// Borrow the current contents.
    ///
    /// # Panics
    ///
    /// The producer panics if it resumes while the returned borrow is alive.
    pub fn borrow(&self) -> Ref<'_, [T]> {
        Ref::map(self.buf.borrow(), |buf| &buf[..])
    }

    pub(crate) fn borrow_mut(&self) -> RefMut<'_, Vec<T>> {
        self.buf.borrow_mut()
    }

    pub fn len(&self) -> usize {
        self.buf.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.borrow().is_empty()
    }

    /// Copy the current contents into a new vector.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.buf.borrow().clone()
    }

    /// Overwrite the contents with a copy of `src`.
    ///
    /// Reuses the existing allocation, and when the lengths agree, the existing elements.
    pub(crate) fn assign_from(&self, src: &[T])
    where
        T: Clone,
    {
        let mut buf = self.buf.borrow_mut();
        if buf.len() == src.len() {
            buf.clone_from_slice(src);
        } else {
            buf.clear();
            buf.extend_from_slice(src);
        }
    }

    /// Whether both views refer to the same buffer.
    pub fn ptr_eq(&self, other: &View<T>) -> bool {
        Rc::ptr_eq(&self.buf, &other.buf)
    }
}

impl<T> Clone for View<T> {
    fn clone(&self) -> View<T> {
        View {
            buf: self.buf.clone(),
        }
    }
}

impl<T> fmt::Debug for View<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.borrow().iter()).finish()
    }
}

impl<T> PartialEq<[T]> for View<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        *self.borrow() == *other
    }
}

impl<T> PartialEq<Vec<T>> for View<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Vec<T>) -> bool {
        *self.borrow() == other[..]
    }
}
