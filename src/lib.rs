//! # slink
//!
//! A mutable singly linked list with O(1) append and prepend, backed by
//! an index arena.
//!
//! ## Overview
//!
//! [`LinkedList`] maintains an ordered collection of items without random
//! access. Nodes live in a slab owned by the list and are addressed by
//! index, so the tail link is a plain index rather than an owning
//! pointer; no unsafe code is needed anywhere.
//!
//! - O(1) `push_back` and `push_front`
//! - O(n) removal by value (first match in chain order)
//! - O(n) predicate search via [`LinkedList::find`]
//!
//! ## Example
//!
//! ```rust
//! use slink::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.push_back('A');
//! list.push_back('B');
//! list.push_back('C');
//! assert_eq!(list.to_vec(), vec!['A', 'B', 'C']);
//!
//! list.remove(&'A').unwrap();
//! assert_eq!(list.to_vec(), vec!['B', 'C']);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` implementations rendering the
//!   list as a sequence

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;
mod list;

pub use error::NotFoundError;
pub use list::LinkedList;
pub use list::LinkedListIntoIterator;
pub use list::LinkedListIterator;
