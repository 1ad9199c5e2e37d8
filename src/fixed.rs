use crate::{ArrayList, Discipline};

/// Storage discipline of a list whose capacity never changes after construction.
///
/// Insertions shift the tail of the list one slot to the right and fail once
/// every slot is taken; removals close the gap by shifting the tail left.
///
/// # Example
/// ```rust
/// use fixed_array_list::FixedList;
///
/// let mut list: FixedList<&str> = FixedList::new(2);
/// assert_eq!(list.insert(0, "b"), Ok(()));
/// assert_eq!(list.insert(0, "a"), Ok(()));
/// assert_eq!(list.insert(2, "c"), Err("c"));
///
/// assert_eq!(list.to_string(), "[a, b]");
/// ```
pub enum Fixed {}

impl Discipline for Fixed {
    fn insert<T>(list: &mut ArrayList<T, Self>, position: usize, value: T) -> Result<(), T> {
        if position > list.len || list.len == list.slots.len() {
            return Err(value);
        }

        // the slot at `len` is free, rotating brings it to `position`
        list.slots[position..=list.len].rotate_right(1);
        list.slots[position] = Some(value);
        list.len += 1;

        debug_assert!(list.check_consistency());
        Ok(())
    }

    fn remove<T>(list: &mut ArrayList<T, Self>, position: usize) -> Option<T> {
        if position >= list.len {
            return None;
        }

        let value = list.slots[position].take()?;
        list.slots[position..list.len].rotate_left(1);
        list.len -= 1;

        debug_assert!(list.check_consistency());
        Some(value)
    }
}

/// A list backed by a block of `capacity` slots that never grows.
pub type FixedList<T> = ArrayList<T, Fixed>;
