//! Fixed-size character grid with linear undo/redo.
//!
//! # Invariants
//!
//! 1. Each cell holds the `new_char` of the most recent change applied at
//!    that position and not undone, or [`FILL_CHAR`] if there is none
//! 2. The redo stack is empty immediately after every [`Canvas::draw`]
//! 3. A rejected operation leaves the grid and both stacks untouched
//!
//! # State Machine
//!
//! ```text
//!   empty ──draw──► has-undo ──undo──► has-both ──undo──► has-redo
//!                      ▲                  │                  │
//!                      └──── draw (redo discarded) ◄─────────┘
//! ```
//!
//! `redo` walks the same arrows backwards.

use std::fmt;

use tracing::{debug, trace};

use crate::change::Change;
use crate::error::{CanvasError, NON_POSITIVE_SIZE, Result};
use crate::stack::HistoryStack;

/// Character every cell starts with.
pub const FILL_CHAR: char = ' ';

/// A character grid plus the history of every write made to it.
pub struct Canvas {
    width: usize,
    height: usize,
    /// Row-major, `height * width` cells.
    cells: Vec<char>,
    undo_stack: HistoryStack<Change>,
    redo_stack: HistoryStack<Change>,
}

impl Canvas {
    /// Create a `width` x `height` canvas filled with [`FILL_CHAR`].
    ///
    /// # Errors
    ///
    /// [`CanvasError::InvalidArgument`] when either dimension is zero or
    /// negative, or when the grid cannot be allocated.
    pub fn new(width: i64, height: i64) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(CanvasError::invalid(NON_POSITIVE_SIZE));
        }
        let too_large = || CanvasError::invalid("canvas dimensions are too large");
        let (width, height) = match (usize::try_from(width), usize::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => return Err(too_large()),
        };
        let cell_count = width.checked_mul(height).ok_or_else(too_large)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(cell_count).map_err(|err| {
            debug!(width, height, error = %err, "canvas allocation refused");
            too_large()
        })?;
        cells.resize(cell_count, FILL_CHAR);

        debug!(width, height, "canvas created");
        Ok(Self {
            width,
            height,
            cells,
            undo_stack: HistoryStack::new(),
            redo_stack: HistoryStack::new(),
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Character at (`row`, `col`), or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        if row < self.height && col < self.width {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Iterate the rows of the grid from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.cells.chunks(self.width)
    }

    // ========================================================================
    // Editing
    // ========================================================================

    /// Write `ch` at (`row`, `col`) and record it for undo.
    ///
    /// Every call records a change, including one that writes the character
    /// already present, and every call discards the redo history.
    ///
    /// # Errors
    ///
    /// [`CanvasError::OutOfBounds`] when the position is outside the grid.
    /// Nothing is modified in that case.
    pub fn draw(&mut self, row: i64, col: i64, ch: char) -> Result<()> {
        let (r, c) = self.checked_position(row, col)?;
        let index = self.index(r, c);
        let change = Change::new(r, c, self.cells[index], ch);

        self.undo_stack.push(change);
        self.redo_stack.clear();
        trace!("redo history cleared");
        self.cells[index] = ch;

        debug!(row = r, col = c, prev = %change.prev_char(), new = %ch, "draw");
        Ok(())
    }

    /// Revert the most recent change that has not been undone.
    ///
    /// Returns `false` when there is nothing to undo; the canvas is unchanged.
    #[must_use = "undo reports whether anything was reverted"]
    pub fn undo(&mut self) -> bool {
        let Some(change) = self.undo_stack.pop() else {
            debug!("undo with empty history");
            return false;
        };
        self.redo_stack.push(change);
        self.set(change.row(), change.col(), change.prev_char());
        debug!(row = change.row(), col = change.col(), restored = %change.prev_char(), "undo");
        true
    }

    /// Reapply the most recently undone change.
    ///
    /// Returns `false` when there is nothing to redo; the canvas is unchanged.
    #[must_use = "redo reports whether anything was reapplied"]
    pub fn redo(&mut self) -> bool {
        let Some(change) = self.redo_stack.pop() else {
            debug!("redo with empty history");
            return false;
        };
        self.undo_stack.push(change);
        self.set(change.row(), change.col(), change.new_char());
        debug!(row = change.row(), col = change.col(), applied = %change.new_char(), "redo");
        true
    }

    // ========================================================================
    // Info
    // ========================================================================

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of undoable changes. O(n).
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of redoable changes. O(n).
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// The grid as `height` lines of `width` characters, each ending in `\n`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.height * (self.width + 1));
        for row in self.rows() {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }

    /// Numbered drawing history, most recent first.
    ///
    /// With `N` undoable changes the first line is labelled `N` and the last
    /// `1`, e.g. `3. draw 'Z' on (0,0)`. Returns `None` when there is no
    /// history.
    #[must_use]
    pub fn list_history(&self) -> Option<Vec<String>> {
        if self.undo_stack.is_empty() {
            return None;
        }
        let size = self.undo_stack.len();
        let lines = (1..=size)
            .rev()
            .zip(self.undo_stack.iter())
            .map(|(number, change)| format!("{number}. {change}"))
            .collect();
        Some(lines)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn checked_position(&self, row: i64, col: i64) -> Result<(usize, usize)> {
        let out_of_bounds = || CanvasError::OutOfBounds {
            row,
            col,
            width: self.width,
            height: self.height,
        };
        let r = usize::try_from(row).map_err(|_| out_of_bounds())?;
        let c = usize::try_from(col).map_err(|_| out_of_bounds())?;
        if r >= self.height || c >= self.width {
            return Err(out_of_bounds());
        }
        Ok((r, c))
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    fn set(&mut self, row: usize, col: usize, ch: char) {
        let index = self.index(row, col);
        self.cells[index] = ch;
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("undo_depth", &self.undo_depth())
            .field("redo_depth", &self.redo_depth())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn at(canvas: &Canvas, row: usize, col: usize) -> char {
        canvas.cell(row, col).expect("cell inside canvas")
    }

    #[test]
    fn new_canvas_is_filled_with_spaces() {
        let canvas = Canvas::new(3, 2).unwrap();
        assert_eq!(canvas.width(), 3);
        assert_eq!(canvas.height(), 2);
        assert_eq!(canvas.render(), "   \n   \n");
        assert!(!canvas.can_undo());
        assert!(!canvas.can_redo());
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        for (w, h) in [(0, 4), (4, 0), (-1, 4), (4, -3), (0, 0)] {
            let err = Canvas::new(w, h).expect_err("non-positive size must fail");
            assert!(err.is_non_positive_size(), "{w}x{h}");
        }
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let err = Canvas::new(i64::MAX, i64::MAX).expect_err("overflow must fail");
        assert!(matches!(err, CanvasError::InvalidArgument { .. }));
        assert!(!err.is_non_positive_size());
    }

    #[test]
    fn unallocatable_dimensions_are_rejected() {
        let err = Canvas::new(i32::MAX.into(), i32::MAX.into()).expect_err("grid too large");
        assert_eq!(err, CanvasError::invalid("canvas dimensions are too large"));
    }

    #[test]
    fn draw_sets_cell_and_records_change() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.draw(1, 2, '#').unwrap();
        assert_eq!(at(&canvas, 1, 2), '#');
        assert_eq!(canvas.undo_depth(), 1);
        assert_eq!(canvas.redo_depth(), 0);
    }

    #[test]
    fn draw_outside_grid_is_rejected_without_mutation() {
        let mut canvas = Canvas::new(4, 3).unwrap();
        canvas.draw(0, 0, 'a').unwrap();
        assert!(canvas.undo());
        let before = canvas.render();

        for (row, col) in [(-1, 0), (0, -1), (3, 0), (0, 4), (i64::MIN, i64::MAX)] {
            let err = canvas.draw(row, col, 'x').expect_err("outside grid");
            assert_eq!(
                err,
                CanvasError::OutOfBounds {
                    row,
                    col,
                    width: 4,
                    height: 3
                }
            );
        }

        assert_eq!(canvas.render(), before);
        assert_eq!(canvas.undo_depth(), 0);
        assert_eq!(canvas.redo_depth(), 1);
    }

    #[test]
    fn corners_are_inside_the_grid() {
        let mut canvas = Canvas::new(2, 3).unwrap();
        canvas.draw(0, 0, 'a').unwrap();
        canvas.draw(2, 1, 'b').unwrap();
        assert_eq!(canvas.render(), "a \n  \n b\n");
    }

    #[test]
    fn undo_and_redo_on_fresh_canvas_fail() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        assert!(!canvas.undo());
        assert!(!canvas.redo());
        assert_eq!(canvas.render(), "  \n  \n");
    }

    #[test]
    fn undo_restores_previous_char_and_redo_reapplies() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.draw(2, 3, 'Q').unwrap();
        assert!(canvas.undo());
        assert_eq!(at(&canvas, 2, 3), FILL_CHAR);
        assert!(canvas.can_redo());
        assert!(canvas.redo());
        assert_eq!(at(&canvas, 2, 3), 'Q');
        assert!(!canvas.can_redo());
    }

    #[test]
    fn redo_fails_after_fresh_draw() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.draw(0, 0, 'a').unwrap();
        assert!(!canvas.redo());
        assert_eq!(at(&canvas, 0, 0), 'a');
    }

    #[test]
    fn draw_after_undo_discards_redo_history() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.draw(0, 0, 'a').unwrap();
        canvas.draw(1, 1, 'b').unwrap();
        assert!(canvas.undo());
        assert!(canvas.undo());
        assert_eq!(canvas.redo_depth(), 2);

        canvas.draw(3, 3, 'c').unwrap();
        assert_eq!(canvas.redo_depth(), 0);
        assert!(!canvas.redo());
        assert_eq!(canvas.render(), "    \n    \n    \n   c\n");
    }

    #[test]
    fn same_char_draw_still_records_and_clears_redo() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.draw(0, 0, 'x').unwrap();
        canvas.draw(1, 1, 'y').unwrap();
        assert!(canvas.undo());

        canvas.draw(0, 0, 'x').unwrap();
        assert_eq!(canvas.undo_depth(), 2);
        assert!(!canvas.can_redo());

        assert!(canvas.undo());
        assert_eq!(at(&canvas, 0, 0), 'x');
        assert!(canvas.undo());
        assert_eq!(at(&canvas, 0, 0), FILL_CHAR);
    }

    #[test]
    fn reference_scenario_on_single_cell() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.draw(0, 0, 'X').unwrap();
        canvas.draw(0, 0, 'Y').unwrap();
        canvas.draw(0, 0, 'Z').unwrap();
        assert_eq!(at(&canvas, 0, 0), 'Z');

        assert!(canvas.undo());
        assert!(canvas.undo());
        assert_eq!(at(&canvas, 0, 0), 'X');

        assert!(canvas.redo());
        assert_eq!(at(&canvas, 0, 0), 'Y');
        assert!(canvas.redo());
        assert_eq!(at(&canvas, 0, 0), 'Z');
        assert!(!canvas.redo());
        assert_eq!(at(&canvas, 0, 0), 'Z');

        assert!(canvas.undo());
        assert!(canvas.undo());
        assert_eq!(at(&canvas, 0, 0), 'X');

        canvas.draw(0, 0, 'T').unwrap();
        assert_eq!(at(&canvas, 0, 0), 'T');
        assert!(!canvas.redo());
        assert_eq!(at(&canvas, 0, 0), 'T');

        assert!(canvas.undo());
        assert_eq!(at(&canvas, 0, 0), 'X');
    }

    #[test]
    fn list_history_is_none_without_changes() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        assert_eq!(canvas.list_history(), None);
        canvas.draw(0, 0, 'a').unwrap();
        assert!(canvas.undo());
        assert_eq!(canvas.list_history(), None);
    }

    #[test]
    fn list_history_numbers_most_recent_highest() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.draw(0, 0, 'X').unwrap();
        canvas.draw(1, 2, 'Y').unwrap();
        canvas.draw(3, 0, 'Z').unwrap();

        assert_eq!(
            canvas.list_history().unwrap(),
            vec![
                "3. draw 'Z' on (3,0)".to_string(),
                "2. draw 'Y' on (1,2)".to_string(),
                "1. draw 'X' on (0,0)".to_string(),
            ]
        );
    }

    #[test]
    fn list_history_reflects_undone_changes() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.draw(0, 0, 'X').unwrap();
        canvas.draw(0, 1, 'Y').unwrap();
        assert!(canvas.undo());
        assert_eq!(
            canvas.list_history().unwrap(),
            vec!["1. draw 'X' on (0,0)".to_string()]
        );
    }

    #[test]
    fn rows_and_display_agree_with_render() {
        let mut canvas = Canvas::new(3, 2).unwrap();
        canvas.draw(1, 0, 'o').unwrap();
        let rows: Vec<String> = canvas.rows().map(|r| r.iter().collect()).collect();
        assert_eq!(rows, vec!["   ".to_string(), "o  ".to_string()]);
        assert_eq!(canvas.to_string(), canvas.render());
    }

    #[test]
    fn cell_outside_grid_is_none() {
        let canvas = Canvas::new(2, 2).unwrap();
        assert_eq!(canvas.cell(2, 0), None);
        assert_eq!(canvas.cell(0, 2), None);
    }

    #[test]
    fn debug_reports_dimensions_and_depths() {
        let mut canvas = Canvas::new(5, 1).unwrap();
        canvas.draw(0, 4, '!').unwrap();
        let debug = format!("{canvas:?}");
        assert!(debug.contains("width: 5"));
        assert!(debug.contains("undo_depth: 1"));
    }

    #[test]
    fn canvas_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Canvas>();
    }

    #[traced_test]
    #[test]
    fn draw_and_undo_are_logged() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.draw(1, 0, 'k').unwrap();
        assert!(canvas.undo());
        assert!(!canvas.undo());
        assert!(logs_contain("draw"));
        assert!(logs_contain("undo with empty history"));
    }
}
