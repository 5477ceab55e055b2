//! Immutable singly-linked list cells.
//!
//! A [`Node`] never changes after construction. Stacks grow by allocating a
//! new node that points at the old top and shrink by moving their top to
//! `next`, so a chain that has been handed to an iterator stays valid no
//! matter what the stack does afterwards.

use std::sync::Arc;

/// Shared link to the next node, `None` at the bottom of a chain.
pub type Link<T> = Option<Arc<Node<T>>>;

/// One cell of a linked stack.
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Create a node holding `value` in front of `next`.
    #[must_use]
    pub fn new(value: T, next: Link<T>) -> Self {
        Self { value, next }
    }

    /// The value carried by this node.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The node below this one, if any.
    #[must_use]
    pub fn next(&self) -> Option<&Arc<Node<T>>> {
        self.next.as_ref()
    }

    /// Split a uniquely owned node into its value and link.
    #[must_use]
    pub fn into_parts(self) -> (T, Link<T>) {
        (self.value, self.next)
    }
}

/// Release a chain without recursing once per node.
///
/// Dropping `Option<Arc<Node<T>>>` naively recurses through `next`, which
/// overflows the thread stack on long histories. Unlinking stops at the first
/// node that is still referenced elsewhere (a live iterator owns the rest).
pub(crate) fn unlink<T>(mut link: Link<T>) {
    while let Some(node) = link {
        match Arc::try_unwrap(node) {
            Ok(node) => link = node.next,
            Err(_) => break,
        }
    }
}
