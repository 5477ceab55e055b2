#![forbid(unsafe_code)]

//! Character canvas with linear undo/redo.
//!
//! The crate is built around two pieces:
//!
//! - [`HistoryStack`] - a LIFO stack made of immutable, singly-linked
//!   [`Node`](node::Node)s
//! - [`Canvas`] - a fixed-size grid of characters that records every write as
//!   a [`Change`] and moves changes between an undo and a redo stack
//!
//! ```text
//! draw(0,0,'Z')
//! ┌──────────────────────────────────────────────┐
//! │ Undo: Z ─► Y ─► X ─► ∅                       │
//! │ Redo: ∅                                      │
//! └──────────────────────────────────────────────┘
//!
//! undo() x2
//! ┌──────────────────────────────────────────────┐
//! │ Undo: X ─► ∅                                 │
//! │ Redo: Y ─► Z ─► ∅                            │
//! └──────────────────────────────────────────────┘
//!
//! draw(0,0,'T')  <-- linear history, redo discarded
//! ┌──────────────────────────────────────────────┐
//! │ Undo: T ─► X ─► ∅                            │
//! │ Redo: ∅                                      │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use asciiart_core::Canvas;
//!
//! let mut canvas = Canvas::new(3, 2)?;
//! canvas.draw(0, 1, '*')?;
//! assert_eq!(canvas.render(), " * \n   \n");
//!
//! assert!(canvas.undo());
//! assert_eq!(canvas.cell(0, 1), Some(' '));
//! assert!(canvas.redo());
//! assert_eq!(canvas.cell(0, 1), Some('*'));
//! # Ok::<(), asciiart_core::CanvasError>(())
//! ```

pub mod canvas;
pub mod change;
pub mod error;
pub mod node;
pub mod stack;

pub use canvas::{Canvas, FILL_CHAR};
pub use change::Change;
pub use error::{CanvasError, Result};
pub use stack::{HistoryStack, Iter};
