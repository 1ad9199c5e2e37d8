use core::iter::{Flatten, FusedIterator};
use std::vec;

/// An owning iterator over the elements of an ArrayList.
///
/// This struct is created by ArrayList::into_iter().
#[derive(Clone)]
pub struct IntoIter<T> {
    delegate: Flatten<vec::IntoIter<Option<T>>>,
    len: usize,
}

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        Self::from_slots(Vec::new())
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn from_slots(slots: Vec<Option<T>>) -> Self {
        let len = slots.len();
        Self {
            delegate: slots.into_iter().flatten(),
            len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

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

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        self.delegate.fold(init, f)
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let value = self.delegate.next_back()?;
        self.len -= 1;
        Some(value)
    }

    fn rfold<B, F>(self, init: B, f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        self.delegate.rfold(init, f)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> core::fmt::Debug for IntoIter<T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self.delegate)
    }
}
