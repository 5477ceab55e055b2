#![forbid(unsafe_code)]

//! Interactive ASCII art editor.
//!
//! Wraps [`asciiart_core::Canvas`] in a numbered text menu: create a canvas,
//! draw characters, undo/redo, show the canvas and list the drawing history.
//! The binary also ships a `self-check` subcommand that runs the built-in
//! checks in [`selfcheck`].

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod selfcheck;
pub mod session;

pub use cli::run_from_env;
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use session::{Flow, Session};
