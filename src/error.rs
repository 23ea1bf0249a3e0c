//! Error types for list operations.
//!
//! Removal by value is the only fallible operation; everything else
//! either cannot fail or reports absence through `Option`.

use std::fmt;

/// Returned by [`LinkedList::remove`] when no node's data equals the
/// requested item.
///
/// The list is left unmodified when this error is returned.
///
/// # Examples
///
/// ```rust
/// use slink::{LinkedList, NotFoundError};
///
/// let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
/// assert_eq!(list.remove(&9), Err(NotFoundError));
/// assert_eq!(list.to_vec(), vec![1, 2, 3]);
/// ```
///
/// [`LinkedList::remove`]: crate::LinkedList::remove
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFoundError;

impl fmt::Display for NotFoundError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("item not found in list")
    }
}

impl std::error::Error for NotFoundError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error_display() {
        assert_eq!(format!("{NotFoundError}"), "item not found in list");
    }

    #[test]
    fn test_not_found_error_is_std_error() {
        let error: &dyn std::error::Error = &NotFoundError;
        assert!(error.source().is_none());
    }
}
