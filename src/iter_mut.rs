use core::iter::{Flatten, FusedIterator};
use core::slice;

/// A mutable iterator over the elements of an ArrayList.
///
/// This struct is created by ArrayList::iter_mut().
pub struct IterMut<'a, T> {
    delegate: Flatten<slice::IterMut<'a, Option<T>>>,
    len: usize,
}

impl<T> Default for IterMut<'_, T> {
    fn default() -> Self {
        Self::from_slots(Default::default())
    }
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn from_slots(slots: &'a mut [Option<T>]) -> Self {
        let len = slots.len();
        Self {
            delegate: slots.iter_mut().flatten(),
            len,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.delegate.next()?;
        self.len -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.len
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let value = self.delegate.next_back()?;
        self.len -= 1;
        Some(value)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> core::fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IterMut").field("len", &self.len).finish()
    }
}
