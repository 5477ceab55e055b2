use std::fmt;

/// One recorded cell write: at (`row`, `col`) the character went from
/// `prev_char` to `new_char`.
///
/// Positions are already validated against the canvas that created the
/// change, so they are stored unsigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Change {
    row: usize,
    col: usize,
    prev_char: char,
    new_char: char,
}

impl Change {
    #[must_use]
    pub const fn new(row: usize, col: usize, prev_char: char, new_char: char) -> Self {
        Self {
            row,
            col,
            prev_char,
            new_char,
        }
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Character the cell held before the write.
    #[must_use]
    pub const fn prev_char(&self) -> char {
        self.prev_char
    }

    /// Character the write put into the cell.
    #[must_use]
    pub const fn new_char(&self) -> char {
        self.new_char
    }
}

/// Formats as it appears in the drawing history, e.g. `draw 'X' on (0,2)`.
impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "draw '{}' on ({},{})", self.new_char, self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::Change;

    #[test]
    fn accessors_return_constructor_values() {
        let change = Change::new(1, 2, 'X', 'Y');
        assert_eq!(change.row(), 1);
        assert_eq!(change.col(), 2);
        assert_eq!(change.prev_char(), 'X');
        assert_eq!(change.new_char(), 'Y');
    }

    #[test]
    fn display_matches_history_line_format() {
        assert_eq!(Change::new(3, 0, ' ', '#').to_string(), "draw '#' on (3,0)");
    }
}
