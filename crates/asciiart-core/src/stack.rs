//! LIFO history stack built from linked [`Node`]s.
//!
//! # Invariants
//!
//! 1. Top-to-bottom order is reverse push order (strict LIFO)
//! 2. Nodes are never mutated; push allocates, pop relinks
//! 3. `len()` is derived by traversal, there is no cached counter
//!
//! # Snapshot iteration
//!
//! [`HistoryStack::iter`] clones the top link, so the iterator walks the
//! chain exactly as it was when the iterator was created. Later pushes put
//! new nodes above the snapshot and later pops only move the stack's own
//! top, so neither is observed and the iterator always terminates.
//!
//! ```text
//! let it = stack.iter();   it ──┐
//!                               ▼
//! stack.push(d)   top ─► d ─► c ─► b ─► a ─► ∅
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::{CanvasError, Result};
use crate::node::{Link, Node, unlink};

/// Singly-linked LIFO stack.
///
/// Used twice by [`Canvas`](crate::Canvas): once for undo and once for redo.
pub struct HistoryStack<T> {
    top: Link<T>,
}

impl<T> HistoryStack<T> {
    /// Create an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { top: None }
    }

    /// Push `value` as the new top. O(1).
    pub fn push(&mut self, value: T) {
        let next = self.top.take();
        self.top = Some(Arc::new(Node::new(value, next)));
    }

    /// Push a value that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidArgument`] when `value` is `None`; the
    /// stack is left unchanged.
    pub fn try_push(&mut self, value: Option<T>) -> Result<()> {
        let value =
            value.ok_or_else(|| CanvasError::invalid("cannot push an absent value onto the stack"))?;
        self.push(value);
        Ok(())
    }

    /// Borrow the top value without removing it. O(1).
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.top.as_deref().map(Node::value)
    }

    /// True iff there is no top node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Number of values, counted by walking the whole chain. O(n).
    ///
    /// Cache the result when it is needed repeatedly.
    #[must_use]
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.top.as_deref();
        while let Some(node) = cursor {
            count += 1;
            cursor = node.next().map(Arc::as_ref);
        }
        count
    }

    /// Drop every value.
    pub fn clear(&mut self) {
        unlink(self.top.take());
    }
}

impl<T: Clone> HistoryStack<T> {
    /// Remove and return the top value. O(1).
    ///
    /// A node still held by a live iterator is left intact for that iterator
    /// and its value is cloned out instead of moved.
    pub fn pop(&mut self) -> Option<T> {
        let node = self.top.take()?;
        let (value, next) = match Arc::try_unwrap(node) {
            Ok(node) => node.into_parts(),
            Err(shared) => (shared.value().clone(), shared.next().cloned()),
        };
        self.top = next;
        Some(value)
    }

    /// Iterate values from top (most recent) to bottom.
    ///
    /// The iterator is a snapshot: it is unaffected by later pushes or pops
    /// on this stack.
    #[must_use]
    pub fn iter(&self) -> Iter<T> {
        Iter {
            next: self.top.clone(),
        }
    }
}

impl<T> Default for HistoryStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for HistoryStack<T> {
    fn drop(&mut self) {
        unlink(self.top.take());
    }
}

impl<T: fmt::Debug> fmt::Debug for HistoryStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryStack")
            .field("len", &self.len())
            .field("top", &self.peek())
            .finish()
    }
}

impl<'a, T: Clone> IntoIterator for &'a HistoryStack<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward-only, non-restartable walk over a stack snapshot.
///
/// Created by [`HistoryStack::iter`].
pub struct Iter<T> {
    next: Link<T>,
}

impl<T: Clone> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = self.next.take()?;
        let value = node.value().clone();
        self.next = node.next().cloned();
        Some(value)
    }
}

impl<T: Clone> std::iter::FusedIterator for Iter<T> {}

impl<T> Drop for Iter<T> {
    fn drop(&mut self) {
        unlink(self.next.take());
    }
}

impl<T> fmt::Debug for Iter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("exhausted", &self.next.is_none())
            .finish()
    }
}
