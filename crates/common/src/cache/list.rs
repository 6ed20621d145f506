// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Arena-backed doubly linked list ordering values from front to back.
//!
//! Nodes live in a `Vec` of slots and link to each other by slot index, so a [`SlotId`]
//! stays valid for as long as its value is in the list regardless of other insertions
//! and removals. Removed slots go on a free list and are reused by later insertions.

/// Sentinel index for a missing link.
const NIL: usize = usize::MAX;

/// A stable handle to a value stored in a [`RecencyList`].
///
/// A handle is only meaningful while its value remains in the list. Once the value is
/// removed the slot may be reused, so callers must drop handles along with the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

#[derive(Debug)]
struct Slot<T> {
    value: Option<T>,
    prev: usize,
    next: usize,
}

/// A doubly linked list with O(1) push to front, move to front and removal by handle.
#[derive(Debug)]
pub struct RecencyList<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> RecencyList<T> {
    /// Creates a new empty [`RecencyList`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    /// Creates a new empty [`RecencyList`] with space for `capacity` values.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Returns the number of values in the list.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the handle of the back value.
    #[must_use]
    pub fn back(&self) -> Option<SlotId> {
        (self.tail != NIL).then_some(SlotId(self.tail))
    }

    /// Returns a reference to the value for the given handle.
    #[must_use]
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.0).and_then(|slot| slot.value.as_ref())
    }

    /// Returns a mutable reference to the value for the given handle.
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots.get_mut(id.0).and_then(|slot| slot.value.as_mut())
    }

    /// Inserts a value at the front of the list and returns its handle.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let slot = Slot {
            value: Some(value),
            prev: NIL,
            next: NIL,
        };

        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = slot;
                idx
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        };

        self.attach_front(idx);
        self.len += 1;
        SlotId(idx)
    }

    /// Moves the value for the given handle to the front of the list.
    ///
    /// Returns `false` if the handle does not refer to a value in the list.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.is_occupied(id.0) {
            return false;
        }

        if self.head != id.0 {
            self.detach(id.0);
            self.attach_front(id.0);
        }
        true
    }

    /// Removes and returns the value for the given handle.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        if !self.is_occupied(id.0) {
            return None;
        }

        self.detach(id.0);
        self.free.push(id.0);
        self.len -= 1;
        self.slots[id.0].value.take()
    }

    /// Removes all values and returns them from front to back.
    ///
    /// Slot storage keeps its allocation, every previously issued handle becomes invalid.
    pub fn clear(&mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len);
        let mut cursor = self.head;
        while cursor != NIL {
            let slot = &mut self.slots[cursor];
            cursor = slot.next;
            values.extend(slot.value.take());
        }

        self.slots.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
        values
    }

    /// Returns an iterator over the values from front to back.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    fn is_occupied(&self, idx: usize) -> bool {
        self.slots.get(idx).is_some_and(|slot| slot.value.is_some())
    }

    fn attach_front(&mut self, idx: usize) {
        let old_head = self.head;
        let slot = &mut self.slots[idx];
        slot.prev = NIL;
        slot.next = old_head;

        if old_head == NIL {
            self.tail = idx;
        } else {
            self.slots[old_head].prev = idx;
        }
        self.head = idx;
    }

    fn detach(&mut self, idx: usize) {
        let prev = self.slots[idx].prev;
        let next = self.slots[idx].next;

        if prev == NIL {
            self.head = next;
        } else {
            self.slots[prev].next = next;
        }

        if next == NIL {
            self.tail = prev;
        } else {
            self.slots[next].prev = prev;
        }

        let slot = &mut self.slots[idx];
        slot.prev = NIL;
        slot.next = NIL;
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the values of a [`RecencyList`] from front to back.
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    cursor: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NIL {
            return None;
        }

        let slot = &self.list.slots[self.cursor];
        self.cursor = slot.next;
        self.remaining = self.remaining.saturating_sub(1);
        slot.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> IntoIterator for &'a RecencyList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn collect<T: Clone>(list: &RecencyList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[rstest]
    fn test_new_is_empty() {
        let list: RecencyList<u32> = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.back(), None);
        assert_eq!(list.iter().next(), None);
    }

    #[rstest]
    fn test_push_front_orders_newest_first() {
        let mut list = RecencyList::with_capacity(4);
        let a = list.push_front('a');
        list.push_front('b');
        let c = list.push_front('c');

        assert_eq!(collect(&list), vec!['c', 'b', 'a']);
        assert_eq!(list.get(c), Some(&'c'));
        assert_eq!(list.back(), Some(a));
        assert_eq!(list.len(), 3);
    }

    #[rstest]
    fn test_move_to_front_from_back_and_middle() {
        let mut list = RecencyList::new();
        let a = list.push_front('a');
        let b = list.push_front('b');
        list.push_front('c');

        assert!(list.move_to_front(a));
        assert_eq!(collect(&list), vec!['a', 'c', 'b']);
        assert_eq!(list.back(), Some(b));

        assert!(list.move_to_front(b));
        assert_eq!(collect(&list), vec!['b', 'a', 'c']);
    }

    #[rstest]
    fn test_move_to_front_of_head_is_noop() {
        let mut list = RecencyList::new();
        list.push_front(1);
        let head = list.push_front(2);

        assert!(list.move_to_front(head));
        assert_eq!(collect(&list), vec![2, 1]);
    }

    #[rstest]
    fn test_remove_relinks_neighbours() {
        let mut list = RecencyList::new();
        let a = list.push_front('a');
        let b = list.push_front('b');
        let c = list.push_front('c');

        assert_eq!(list.remove(b), Some('b'));
        assert_eq!(collect(&list), vec!['c', 'a']);

        assert_eq!(list.remove(c), Some('c'));
        assert_eq!(collect(&list), vec!['a']);
        assert_eq!(list.back(), Some(a));

        assert_eq!(list.remove(a), Some('a'));
        assert!(list.is_empty());
        assert_eq!(list.back(), None);
        assert_eq!(list.iter().next(), None);
    }

    #[rstest]
    fn test_removed_handle_is_rejected() {
        let mut list = RecencyList::new();
        let a = list.push_front('a');
        list.push_front('b');

        assert_eq!(list.remove(a), Some('a'));
        assert_eq!(list.remove(a), None);
        assert_eq!(list.get(a), None);
        assert!(!list.move_to_front(a));
        assert_eq!(list.len(), 1);
    }

    #[rstest]
    fn test_removed_slot_is_reused() {
        let mut list = RecencyList::new();
        let a = list.push_front('a');
        list.push_front('b');
        list.remove(a);

        let c = list.push_front('c');
        assert_eq!(c, a);
        assert_eq!(list.get(c), Some(&'c'));
        assert_eq!(collect(&list), vec!['c', 'b']);
    }

    #[rstest]
    fn test_remove_back_until_empty() {
        let mut list = RecencyList::new();
        list.push_front(1);
        list.push_front(2);

        let mut drained = Vec::new();
        while let Some(id) = list.back() {
            drained.extend(list.remove(id));
        }
        assert_eq!(drained, vec![1, 2]);
        assert!(list.is_empty());
    }

    #[rstest]
    fn test_get_mut_updates_in_place() {
        let mut list = RecencyList::new();
        let id = list.push_front(String::from("one"));
        if let Some(value) = list.get_mut(id) {
            value.push_str("_modified");
        }
        assert_eq!(list.get(id).map(String::as_str), Some("one_modified"));
    }

    #[rstest]
    fn test_clear() {
        let mut list = RecencyList::new();
        let id = list.push_front(1);
        let removed = list.push_front(2);
        list.push_front(3);
        list.remove(removed);

        assert_eq!(list.clear(), vec![3, 1]);
        assert!(list.is_empty());
        assert_eq!(list.get(id), None);
        assert_eq!(list.iter().count(), 0);

        list.push_front(4);
        assert_eq!(collect(&list), vec![4]);
    }

    #[rstest]
    fn test_iter_size_hint_tracks_remaining() {
        let mut list = RecencyList::new();
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);

        let mut iter = list.iter();
        assert_eq!(iter.size_hint(), (3, Some(3)));
        iter.next();
        assert_eq!(iter.size_hint(), (2, Some(2)));
    }
}
