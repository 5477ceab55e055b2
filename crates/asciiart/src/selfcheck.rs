//! Built-in self-check suite.
//!
//! Exercises the canvas and history stack through their public operations so
//! a shipped binary can verify itself with `asciiart self-check`.

use std::io::Write;

use asciiart_core::{Canvas, CanvasError, Change, HistoryStack};
use tracing::{debug, warn};

pub const ALL_PASSED: &str = "All tests passed!";

/// A named check returning `true` on success.
pub struct Check {
    pub name: &'static str,
    pub run: fn() -> bool,
}

/// Every check in execution order.
pub const CHECKS: &[Check] = &[
    Check {
        name: "stack_push_peek",
        run: stack_push_peek,
    },
    Check {
        name: "undo_redo_scenario",
        run: undo_redo_scenario,
    },
    Check {
        name: "out_of_bounds_draw",
        run: out_of_bounds_draw,
    },
];

/// Result of running one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub name: &'static str,
    pub passed: bool,
}

/// Run `checks` in order.
#[must_use]
pub fn run_checks(checks: &[Check]) -> Vec<Outcome> {
    checks
        .iter()
        .map(|check| {
            let passed = (check.run)();
            if passed {
                debug!(check = check.name, "self-check passed");
            } else {
                warn!(check = check.name, "self-check failed");
            }
            Outcome {
                name: check.name,
                passed,
            }
        })
        .collect()
}

/// Print `<name> failed` for each failing check, or [`ALL_PASSED`].
///
/// Returns the number of failures.
pub fn report<W: Write>(out: &mut W, outcomes: &[Outcome]) -> std::io::Result<usize> {
    let mut fails = 0;
    for outcome in outcomes.iter().filter(|o| !o.passed) {
        writeln!(out, "{} failed", outcome.name)?;
        fails += 1;
    }
    if fails == 0 {
        writeln!(out, "{ALL_PASSED}")?;
    }
    Ok(fails)
}

/// Push a change and confirm it is what `peek` sees.
pub fn stack_push_peek() -> bool {
    let mut stack = HistoryStack::new();
    let change = Change::new(1, 2, 'X', 'Y');
    stack.push(change);
    stack.peek() == Some(&change) && stack.len() == 1
}

/// Three writes to one cell followed by interleaved undo/redo and a branch.
pub fn undo_redo_scenario() -> bool {
    let Ok(mut canvas) = Canvas::new(4, 4) else {
        return false;
    };
    let at = |canvas: &Canvas| canvas.cell(0, 0);

    for ch in ['X', 'Y', 'Z'] {
        if canvas.draw(0, 0, ch).is_err() {
            return false;
        }
    }
    if at(&canvas) != Some('Z') {
        return false;
    }

    let undone = canvas.undo() && canvas.undo();
    if !undone || at(&canvas) != Some('X') {
        return false;
    }
    if !canvas.redo() || at(&canvas) != Some('Y') {
        return false;
    }
    if !canvas.redo() || at(&canvas) != Some('Z') {
        return false;
    }
    if canvas.redo() || at(&canvas) != Some('Z') {
        return false;
    }

    let undone = canvas.undo() && canvas.undo();
    if !undone || at(&canvas) != Some('X') {
        return false;
    }

    if canvas.draw(0, 0, 'T').is_err() || at(&canvas) != Some('T') {
        return false;
    }
    if canvas.redo() || at(&canvas) != Some('T') {
        return false;
    }
    canvas.undo() && at(&canvas) == Some('X')
}

/// A rejected draw reports `OutOfBounds` and changes nothing.
pub fn out_of_bounds_draw() -> bool {
    let Ok(mut canvas) = Canvas::new(4, 4) else {
        return false;
    };
    if canvas.draw(1, 1, 'a').is_err() {
        return false;
    }
    let before = canvas.render();
    let rejected = [(4, 0), (0, 4), (-1, 0), (0, -1)]
        .into_iter()
        .all(|(row, col)| matches!(canvas.draw(row, col, 'b'), Err(CanvasError::OutOfBounds { .. })));
    rejected && canvas.render() == before && canvas.undo_depth() == 1 && !canvas.can_redo()
}
