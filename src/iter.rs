use core::iter::{Flatten, FusedIterator};
use core::slice;

/// An iterator over the elements of an ArrayList.
///
/// This struct is created by ArrayList::iter().
pub struct Iter<'a, T> {
    delegate: Flatten<slice::Iter<'a, Option<T>>>,
    len: usize,
}

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Self::from_slots(Default::default())
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn from_slots(slots: &'a [Option<T>]) -> Self {
        Self {
            delegate: slots.iter().flatten(),
            len: slots.len(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            delegate: self.delegate.clone(),
            len: self.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

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

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let value = self.delegate.next_back()?;
        self.len -= 1;
        Some(value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> core::fmt::Debug for Iter<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use quickcheck_macros::quickcheck;

    use crate::FixedList;

    use super::Iter;

    fn list_of(values: &[usize]) -> FixedList<usize> {
        let mut list = FixedList::new(values.len() + 2);
        list.try_extend(values.iter().copied()).unwrap();
        list
    }

    #[test]
    fn test_default_iterator_yields_nothing() {
        let mut sut: Iter<'_, i32> = Default::default();
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.next(), None);
        assert_eq!(sut.next_back(), None);
    }

    #[test]
    fn test_iter_forward() {
        let seed = [];
        let list = list_of(&seed);
        assert!(seed.iter().eq(list.iter()));

        let seed = [0, 1, 2, 3, 4];
        let list = list_of(&seed);
        assert!(seed.iter().eq(list.iter()));
    }

    #[test]
    fn test_iter_backward() {
        let seed = [];
        let list = list_of(&seed);
        assert!(seed.iter().rev().eq(list.iter().rev()));

        let seed = [0, 1, 2, 3, 4];
        let list = list_of(&seed);
        assert!(seed.iter().rev().eq(list.iter().rev()));
    }

    #[test]
    fn test_double_ended_iterator_works_correctly() {
        let list = list_of(&[0, 1, 2, 3, 4]);

        let mut sut = list.iter();
        assert_eq!(sut.len(), 5);
        assert_eq!(sut.next(), Some(&0));
        assert_eq!(sut.next_back(), Some(&4));
        assert_eq!(sut.next(), Some(&1));
        assert_eq!(sut.next_back(), Some(&3));
        assert_eq!(sut.len(), 1);
        assert_eq!(sut.next(), Some(&2));
        assert_eq!(sut.next_back(), None);
        assert_eq!(sut.next(), None);
        assert_eq!(sut.len(), 0);
    }

    #[test]
    fn test_iter_skips_stale_slots() {
        let mut list = list_of(&[0, 1, 2, 3]);
        assert_eq!(list.remove(1), Some(1));
        assert_eq!(list.pop(), Some(3));

        assert_eq!(list.iter().collect::<Vec<_>>(), [&0, &2]);
        assert_eq!(list.iter().count(), 2);

        list.clear();
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    fn test_last_works_correctly() {
        let list = list_of(&[0, 1, 2, 3, 4]);
        assert_eq!(list.iter().last(), Some(&4));
    }

    #[test]
    fn test_clone_works_correctly() {
        let list = list_of(&[0, 1, 2, 3, 4]);

        let mut base = list.iter();

        let sut = base.clone();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[0, 1, 2, 3, 4]);

        base.next();

        let sut = base.clone();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[1, 2, 3, 4]);

        base.next_back();

        let sut = base.clone();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[1, 2, 3]);
    }

    #[test]
    fn test_debug_lists_remaining_elements() {
        let list = list_of(&[7, 8]);
        let mut sut = list.iter();
        sut.next();
        assert_eq!(format!("{sut:?}"), "Iter([8])");
    }

    #[quickcheck]
    fn test_iter_behavioural(seed: Vec<i32>) {
        let mut actual = FixedList::new(seed.len());
        actual.try_extend(seed.iter().copied()).unwrap();

        assert!(actual.iter().eq(seed.iter()));
        assert!(actual.iter().rev().eq(seed.iter().rev()));
        assert_eq!(actual.iter().partial_cmp(seed.iter()), Some(Ordering::Equal));
        assert_eq!(actual.iter().len(), seed.len());
        assert_eq!(actual.iter().max(), seed.iter().max());
        assert_eq!(actual.iter().min(), seed.iter().min());
        assert_eq!(actual.iter().is_sorted(), seed.iter().is_sorted());
    }
}
