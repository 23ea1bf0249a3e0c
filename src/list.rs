//! Mutable singly-linked list backed by an index arena.
//!
//! This module provides [`LinkedList`], a singly-linked list that keeps
//! its nodes in a slab owned by the list itself. The `head`, `tail`, and
//! per-node `next` links are optional indices into the slab rather than
//! pointers, so the tail link never needs to share ownership with the
//! chain and the whole structure stays in safe code.
//!
//! # Overview
//!
//! `LinkedList` provides:
//!
//! - O(1) append (`push_back`) and prepend (`push_front`)
//! - O(n) removal of the first item equal to a given value
//! - O(n) predicate search (`find`)
//! - Front-to-back iteration
//!
//! Slots vacated by a removal are recycled through a free-index stack,
//! so a long-lived list that churns does not grow its slab unboundedly.
//!
//! # Examples
//!
//! ```rust
//! use slink::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.push_back(2);
//! list.push_back(3);
//! list.push_front(1);
//! assert_eq!(list.to_vec(), vec![1, 2, 3]);
//!
//! let removed = list.remove(&2).unwrap();
//! assert_eq!(removed, 2);
//! assert_eq!(list.to_vec(), vec![1, 3]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::error::NotFoundError;

/// Index of a node slot within the list's slab.
type Index = usize;

/// Internal node structure for the linked list.
///
/// Each node holds one element and the slab index of its successor,
/// if any. Nodes are never handed out to callers; the list exposes
/// element references only.
#[derive(Clone)]
struct Node<T> {
    /// The element stored in this node.
    data: T,
    /// Slab index of the next node (if any).
    next: Option<Index>,
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Node").field(&self.data).finish()
    }
}

/// A mutable singly-linked list with O(1) append and prepend.
///
/// The list exclusively owns its node chain. Elements are kept in
/// insertion order; there is no random access and no ordering
/// comparison between elements (removal uses equality only).
///
/// # Time Complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | `new`        | O(1)       |
/// | `push_back`  | O(1)       |
/// | `push_front` | O(1)       |
/// | `pop_front`  | O(1)       |
/// | `len`        | O(1)       |
/// | `remove`     | O(n)       |
/// | `find`       | O(n)       |
/// | `to_vec`     | O(n)       |
///
/// # Examples
///
/// ```rust
/// use slink::LinkedList;
///
/// let mut list: LinkedList<&str> = LinkedList::new();
/// list.push_back("a");
/// assert_eq!(list.front(), Some(&"a"));
/// ```
#[derive(Clone)]
pub struct LinkedList<T> {
    /// Node storage; vacant slots are `None`.
    slots: Vec<Option<Node<T>>>,
    /// Indices of vacant slots available for reuse.
    free: Vec<Index>,
    /// Slab index of the first node (if any).
    head: Option<Index>,
    /// Slab index of the last node (if any).
    tail: Option<Index>,
    /// Cached element count, kept consistent with every mutation.
    length: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slink::LinkedList;
    ///
    /// let list: LinkedList<i32> = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Returns `true` if the list contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slink::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert!(list.is_empty());
    /// list.push_back(1);
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(1) - the count is cached and updated on every mutation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slink::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=3).collect();
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns a reference to the first element, or `None` if the list
    /// is empty.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|index| &self.node(index).data)
    }

    /// Returns a reference to the last element, or `None` if the list
    /// is empty.
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|index| &self.node(index).data)
    }

    /// Appends an element at the back of the list.
    ///
    /// Returns a reference to the element in its new home, so a caller
    /// can confirm or keep reading the stored value without a lookup.
    ///
    /// # Panics
    ///
    /// Debug builds panic if the head and tail links disagree about
    /// emptiness. That state indicates internal corruption from a bug,
    /// never bad input, so it is a fatal check rather than an error.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slink::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// let stored = list.push_back(42);
    /// assert_eq!(*stored, 42);
    /// assert_eq!(list.back(), Some(&42));
    /// ```
    pub fn push_back(&mut self, item: T) -> &T {
        debug_assert!(
            self.head.is_none() == self.tail.is_none(),
            "head and tail must agree on emptiness"
        );
        let index = self.allocate(item, None);
        match self.tail {
            Some(tail_index) => self.node_mut(tail_index).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.length += 1;
        &self.node(index).data
    }

    /// Prepends an element at the front of the list.
    ///
    /// The tail is unchanged unless the list was empty, in which case
    /// the new element becomes both head and tail.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slink::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.push_front('b');
    /// list.push_front('a');
    /// assert_eq!(list.to_vec(), vec!['a', 'b']);
    /// ```
    pub fn push_front(&mut self, item: T) {
        let index = self.allocate(item, self.head);
        if self.tail.is_none() {
            self.tail = Some(index);
        }
        self.head = Some(index);
        self.length += 1;
    }

    /// Removes and returns the first element, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slink::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = (1..=2).collect();
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(2));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let head_index = self.head?;
        let node = self.vacate(head_index);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.length -= 1;
        Some(node.data)
    }

    /// Removes the first element equal to `item`, in chain order, and
    /// returns it.
    ///
    /// Elements beyond the first match are untouched; duplicates stay
    /// in the list. Equality is the element type's own [`PartialEq`];
    /// no ordering is assumed.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if no element equals `item`. The list
    /// is left unmodified in that case.
    ///
    /// # Complexity
    ///
    /// O(1) best case (match at the head), O(n) worst case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slink::LinkedList;
    ///
    /// let mut list: LinkedList<char> = ['a', 'b', 'a'].into_iter().collect();
    /// list.remove(&'a').unwrap();
    /// assert_eq!(list.to_vec(), vec!['b', 'a']);
    ///
    /// assert!(list.remove(&'z').is_err());
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T, NotFoundError>
    where
        T: PartialEq,
    {
        let Some(head_index) = self.head else {
            return Err(NotFoundError);
        };
        if self.node(head_index).data == *item {
            return self.pop_front().ok_or(NotFoundError);
        }

        // Walk with the predecessor in hand so the splice is local.
        let mut current = head_index;
        while let Some(successor) = self.node(current).next {
            if self.node(successor).data == *item {
                let node = self.vacate(successor);
                self.node_mut(current).next = node.next;
                if node.next.is_none() {
                    self.tail = Some(current);
                }
                self.length -= 1;
                return Ok(node.data);
            }
            current = successor;
        }
        Err(NotFoundError)
    }

    /// Returns a reference to the first element satisfying the
    /// predicate, in chain order.
    ///
    /// Returns `None` if no element matches. The list is not mutated.
    ///
    /// # Arguments
    ///
    /// * `predicate` - A function that returns `true` for the target
    ///   element
    ///
    /// # Complexity
    ///
    /// O(1) best case, O(n) worst case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slink::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=4).collect();
    /// assert_eq!(list.find(|x| x % 2 == 0), Some(&2));
    /// assert_eq!(list.find(|x| *x > 10), None);
    /// ```
    #[must_use]
    pub fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        let mut current = self.head;
        while let Some(index) = current {
            let node = self.node(index);
            if predicate(&node.data) {
                return Some(&node.data);
            }
            current = node.next;
        }
        None
    }

    /// Returns `true` if some element equals `item`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slink::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=3).collect();
    /// assert!(list.contains(&2));
    /// assert!(!list.contains(&9));
    /// ```
    #[must_use]
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(|element| element == item).is_some()
    }

    /// Removes all elements, returning the list to the empty state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slink::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = (1..=3).collect();
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.len(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.length = 0;
    }

    /// Returns an iterator over references to the elements, front to
    /// back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slink::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=3).collect();
    /// let collected: Vec<&i32> = list.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> LinkedListIterator<'_, T> {
        LinkedListIterator {
            list: self,
            current: self.head,
        }
    }

    /// Allocates a slot for a new node, reusing a vacant one if
    /// available.
    fn allocate(&mut self, data: T, next: Option<Index>) -> Index {
        let node = Node { data, next };
        if let Some(index) = self.free.pop() {
            self.slots[index] = Some(node);
            index
        } else {
            self.slots.push(Some(node));
            self.slots.len() - 1
        }
    }

    /// Moves the node out of an occupied slot and recycles the slot.
    fn vacate(&mut self, index: Index) -> Node<T> {
        let Some(node) = self.slots[index].take() else {
            unreachable!("chain index {index} refers to a vacant slot");
        };
        self.free.push(index);
        node
    }

    /// Looks up an occupied slot by chain index.
    fn node(&self, index: Index) -> &Node<T> {
        match self.slots[index].as_ref() {
            Some(node) => node,
            None => unreachable!("chain index {index} refers to a vacant slot"),
        }
    }

    fn node_mut(&mut self, index: Index) -> &mut Node<T> {
        match self.slots[index].as_mut() {
            Some(node) => node,
            None => unreachable!("chain index {index} refers to a vacant slot"),
        }
    }
}

impl<T: Clone> LinkedList<T> {
    /// Creates a list from a slice.
    ///
    /// The first element of the slice becomes the front of the list.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `slice.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slink::LinkedList;
    ///
    /// let list = LinkedList::from_slice(&[1, 2, 3]);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        slice.iter().cloned().collect()
    }

    /// Collects the elements into a freshly allocated `Vec`, front to
    /// back.
    ///
    /// The result is a new sequence; it does not alias the list's own
    /// storage.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slink::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=3).collect();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An iterator over references to elements of a [`LinkedList`].
pub struct LinkedListIterator<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<Index>,
}

impl<'a, T> Iterator for LinkedListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|index| {
            let node = self.list.node(index);
            self.current = node.next;
            &node.data
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Remaining length is not tracked; the list length bounds it.
        (0, Some(self.list.length))
    }
}

/// An owning iterator over elements of a [`LinkedList`].
pub struct LinkedListIntoIterator<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for LinkedListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T> ExactSizeIterator for LinkedListIntoIterator<T> {
    fn len(&self) -> usize {
        self.list.length
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for LinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = LinkedListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        LinkedListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = LinkedListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the length first to distinguish lists of different lengths
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("LinkedList(")?;
        formatter.debug_list().entries(self.iter()).finish()?;
        formatter.write_str(")")
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for LinkedList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct LinkedListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> LinkedListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for LinkedListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = LinkedList<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut list = LinkedList::new();
        while let Some(element) = seq.next_element()? {
            list.push_back(element);
        }
        Ok(list)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for LinkedList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(LinkedListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
