//! # fixed_array_list
//!
//! `fixed_array_list` implements a generic list backed by a single block of slots
//! whose size is chosen when the list is created.
//!
//! ## Features
//! - Ordered sequence with index based access, search, replace and swap.
//! - Positional insertion and removal that shift the tail of the list.
//! - Strict capacity: a full list rejects insertions instead of growing.
//! - Every failing operation is a no-op and hands rejected values back to the caller.
//!
//! ## Use Cases
//! `fixed_array_list` is ideal for scenarios where:
//! - The maximum number of elements is known up front.
//! - Running out of room must be observable rather than silently reallocating.
//!
//! ## Example
//! ```rust
//! use fixed_array_list::FixedList;
//!
//! let mut list: FixedList<i64> = FixedList::new(3);
//! assert_eq!(list.insert(0, 2), Ok(()));
//! assert_eq!(list.insert(0, 0), Ok(()));
//! assert_eq!(list.insert(1, 1), Ok(()));
//! assert_eq!(list.insert(3, 3), Err(3));
//!
//! assert_eq!(list.get(1), Some(&1));
//! assert_eq!(list.find(&2), Some(2));
//! assert_eq!(list.to_string(), "[0, 1, 2]");
//!
//! assert_eq!(list.remove(1), Some(1));
//! assert_eq!(list.len(), 2);
//! ```

mod fixed;
mod into_iter;
mod iter;
mod iter_mut;
mod sailed;

pub use fixed::{Fixed, FixedList};
pub use into_iter::IntoIter;
pub use iter::Iter;
pub use iter_mut::IterMut;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// The storage discipline of an [`ArrayList`].
///
/// A discipline decides how elements are shifted around when inserting or removing
/// at a position, and whether the backing block may ever change size.
/// All the other list operations are shared across disciplines.
pub trait Discipline: Sized + sailed::Sailed {
    /// Inserts `value` at `position`, handing it back if that is not possible.
    ///
    /// On failure the list must be left untouched.
    fn insert<T>(list: &mut ArrayList<T, Self>, position: usize, value: T) -> Result<(), T>;

    /// Removes and returns the element at `position`, if any.
    ///
    /// On failure the list must be left untouched.
    fn remove<T>(list: &mut ArrayList<T, Self>, position: usize) -> Option<T>;
}

/// A list of elements stored contiguously in a block of slots.
///
/// # Type Parameters
/// - `T`: The type of elements stored in the list.
/// - `D`: The [`Discipline`] that implements insertion and removal.
///
/// # Example
/// ```rust
/// use fixed_array_list::FixedList;
///
/// let mut list: FixedList<&str> = FixedList::new(4);
/// list.push("A").unwrap();
/// list.push("B").unwrap();
/// list.push("C").unwrap();
///
/// assert_eq!(list.replace(1, "D"), Ok("B"));
/// assert!(list.swap(0, 2));
/// assert_eq!(list.to_string(), "[C, D, A]");
/// ```
pub struct ArrayList<T, D = Fixed>
where
    D: Discipline,
{
    slots: Box<[Option<T>]>,
    len: usize,
    marker: PhantomData<D>,
}

impl<T, D> Default for ArrayList<T, D>
where
    D: Discipline,
{
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T, D> ArrayList<T, D>
where
    D: Discipline,
{
    /// Creates a new, empty `ArrayList` able to hold up to `capacity` elements.
    ///
    /// A capacity of zero is allowed, such a list stays empty forever.
    ///
    /// # Example
    /// ```rust
    /// use fixed_array_list::FixedList;
    ///
    /// let list: FixedList<i64> = FixedList::new(8);
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 8);
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            len: 0,
            marker: PhantomData,
        }
    }

    /// Inserts an element at `position`, shifting subsequent elements to the right.
    ///
    /// Fails if `position` is past the end of the list or if the discipline has no
    /// room left; the rejected value is returned and the list is unchanged.
    ///
    /// # Examples
    /// ```
    /// use fixed_array_list::FixedList;
    ///
    /// let mut list: FixedList<i64> = FixedList::new(3);
    /// list.insert(0, 10).unwrap();
    /// list.insert(1, 30).unwrap();
    /// list.insert(1, 20).unwrap();
    ///
    /// assert_eq!(list, [10, 20, 30]);
    /// assert_eq!(list.insert(0, 0), Err(0));
    /// ```
    #[inline]
    pub fn insert(&mut self, position: usize, value: T) -> Result<(), T> {
        D::insert(self, position, value)
    }

    /// Removes and returns the element at `position`, shifting subsequent elements left.
    ///
    /// # Examples
    /// ```
    /// use fixed_array_list::FixedList;
    ///
    /// let mut list: FixedList<i64> = FixedList::new(3);
    /// list.try_extend([10, 20, 30]).unwrap();
    ///
    /// assert_eq!(list.remove(1), Some(20));
    /// assert_eq!(list.get(1), Some(&30));
    /// assert_eq!(list.remove(2), None);
    /// ```
    #[inline]
    pub fn remove(&mut self, position: usize) -> Option<T> {
        D::remove(self, position)
    }

    /// Appends an element to the back of the list.
    ///
    /// # Example
    /// ```rust
    /// use fixed_array_list::FixedList;
    ///
    /// let mut list: FixedList<i64> = FixedList::new(1);
    ///
    /// assert_eq!(list.push(1), Ok(()));
    /// assert_eq!(list.push(2), Err(2));
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), T> {
        self.insert(self.len, value)
    }

    /// Removes and returns the last element of the list, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.remove(self.len.checked_sub(1)?)
    }

    /// Appends every element of `iter` until the first one that does not fit.
    ///
    /// The element that could not be inserted is returned; the ones after it are
    /// left in the iterator and dropped.
    ///
    /// # Example
    /// ```rust
    /// use fixed_array_list::FixedList;
    ///
    /// let mut list: FixedList<i64> = FixedList::new(2);
    ///
    /// assert_eq!(list.try_extend([1, 2, 3, 4]), Err(3));
    /// assert_eq!(list, [1, 2]);
    /// ```
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), T> {
        iter.into_iter().try_for_each(|value| self.push(value))
    }

    /// Replaces the element at `position`, returning the previous one.
    ///
    /// # Examples
    /// ```
    /// use fixed_array_list::FixedList;
    ///
    /// let mut list: FixedList<&str> = FixedList::new(3);
    /// list.try_extend(["A", "B", "C"]).unwrap();
    ///
    /// assert_eq!(list.replace(1, "D"), Ok("B"));
    /// assert_eq!(list.replace(4, "D"), Err("D"));
    /// assert_eq!(list, ["A", "D", "C"]);
    /// ```
    pub fn replace(&mut self, position: usize, value: T) -> Result<T, T> {
        match self.get_mut(position) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(value),
        }
    }

    /// Swaps the elements at `a` and `b`.
    ///
    /// Returns `false`, leaving the list untouched, if either position is out of bounds.
    ///
    /// # Examples
    /// ```
    /// use fixed_array_list::FixedList;
    ///
    /// let mut list: FixedList<i64> = FixedList::new(3);
    /// list.try_extend([1, 2, 3]).unwrap();
    ///
    /// assert!(list.swap(0, 1));
    /// assert!(list.swap(1, 2));
    /// assert!(!list.swap(4, 0));
    /// assert_eq!(list, [2, 3, 1]);
    /// ```
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a >= self.len || b >= self.len {
            return false;
        }

        self.slots.swap(a, b);
        true
    }

    /// Removes all elements from the list.
    ///
    /// Neither the capacity nor the backing block change; the slots are reused by
    /// subsequent insertions.
    ///
    /// # Example
    /// ```rust
    /// use fixed_array_list::FixedList;
    ///
    /// let mut list: FixedList<i32> = FixedList::new(4);
    /// list.try_extend([1, 2, 3]).unwrap();
    ///
    /// list.clear();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 4);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Returns a reference to the element at `position`, if any.
    ///
    /// # Examples
    /// ```
    /// use fixed_array_list::FixedList;
    ///
    /// let mut list: FixedList<i64> = FixedList::new(4);
    /// list.try_extend([10, 20]).unwrap();
    ///
    /// assert_eq!(list.get(0), Some(&10));
    /// assert_eq!(list.get(1), Some(&20));
    /// assert_eq!(list.get(2), None); // Out of bounds
    /// ```
    pub fn get(&self, position: usize) -> Option<&T> {
        if position >= self.len {
            return None;
        }

        self.slots[position].as_ref()
    }

    /// Returns a mutable reference to the element at `position`, if any.
    pub fn get_mut(&mut self, position: usize) -> Option<&mut T> {
        if position >= self.len {
            return None;
        }

        self.slots[position].as_mut()
    }

    /// Returns the position of the first element equal to `value`, if any.
    ///
    /// # Examples
    /// ```
    /// use fixed_array_list::FixedList;
    ///
    /// let mut list: FixedList<&str> = FixedList::new(4);
    /// list.try_extend(["a", "b", "a"]).unwrap();
    ///
    /// assert_eq!(list.find(&"a"), Some(0));
    /// assert_eq!(list.find(&"z"), None);
    /// ```
    #[inline]
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.find_from(value, 0)
    }

    /// Returns the position of the first element equal to `value` at or after `start`.
    ///
    /// # Examples
    /// ```
    /// use fixed_array_list::FixedList;
    ///
    /// let mut list: FixedList<&str> = FixedList::new(4);
    /// list.try_extend(["a", "b", "a"]).unwrap();
    ///
    /// assert_eq!(list.find_from(&"a", 1), Some(2));
    /// assert_eq!(list.find_from(&"a", 3), None);
    /// ```
    pub fn find_from(&self, value: &T, start: usize) -> Option<usize>
    where
        T: PartialEq,
    {
        self.slots
            .get(start..self.len)?
            .iter()
            .position(|slot| slot.as_ref() == Some(value))
            .map(|offset| start + offset)
    }

    /// Returns the number of elements currently stored in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the maximum number of elements the list can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Checks if every slot of the list is taken.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Checks that the length of the list does not exceed its capacity.
    ///
    /// This is an auditing hook; no operation relies on it.
    #[inline]
    pub fn check_consistency(&self) -> bool {
        self.len <= self.slots.len()
    }

    /// Provides an iterator over list's elements.
    ///
    /// # Examples
    /// ```
    /// use fixed_array_list::FixedList;
    ///
    /// let mut list: FixedList<_> = FixedList::new(3);
    /// list.try_extend([0, 1, 2]).unwrap();
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_slots(&self.slots[..self.len])
    }

    /// Provides a mutable iterator over list's elements.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::from_slots(&mut self.slots[..self.len])
    }
}

impl<T, D> Clone for ArrayList<T, D>
where
    T: Clone,
    D: Discipline,
{
    fn clone(&self) -> Self {
        Self {
            slots: self
                .iter()
                .cloned()
                .map(Some)
                .chain(std::iter::repeat_with(|| None))
                .take(self.capacity())
                .collect(),
            len: self.len,
            marker: PhantomData,
        }
    }

    /// Replaces the whole backing block of `self` with a copy of `source`'s.
    ///
    /// The new block is built before the old one is dropped, so `self` ends up either
    /// untouched or an exact copy.
    fn clone_from(&mut self, source: &Self) {
        *self = source.clone();
    }
}

impl<T, D, const M: usize> PartialEq<[T; M]> for ArrayList<T, D>
where
    T: PartialEq,
    D: Discipline,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T, D> PartialEq<&[T]> for ArrayList<T, D>
where
    T: PartialEq,
    D: Discipline,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, D> PartialEq<[T]> for ArrayList<T, D>
where
    T: PartialEq,
    D: Discipline,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T, D> PartialEq for ArrayList<T, D>
where
    T: PartialEq,
    D: Discipline,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T, D> Eq for ArrayList<T, D>
where
    T: Eq,
    D: Discipline,
{
}

impl<T, D> Hash for ArrayList<T, D>
where
    T: Hash,
    D: Discipline,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T, D> fmt::Debug for ArrayList<T, D>
where
    T: fmt::Debug,
    D: Discipline,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the list as `[v0, v1, ..., vn]`, or `[]` when empty.
impl<T, D> fmt::Display for ArrayList<T, D>
where
    T: fmt::Display,
    D: Discipline,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (position, value) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        f.write_str("]")
    }
}

impl<T, D> IntoIterator for ArrayList<T, D>
where
    D: Discipline,
{
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut slots = self.slots.into_vec();
        slots.truncate(self.len);
        IntoIter::from_slots(slots)
    }
}

impl<'a, T, D> IntoIterator for &'a ArrayList<T, D>
where
    D: Discipline,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, D> IntoIterator for &'a mut ArrayList<T, D>
where
    D: Discipline,
{
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
