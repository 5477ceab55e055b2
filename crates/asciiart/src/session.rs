//! Menu-driven editing session.
//!
//! A [`Session`] owns the (optional) current canvas and the console it talks
//! to. It is generic over the reader and writer so the whole loop can run
//! against in-memory buffers.
//!
//! ```text
//!   ┌──────────┐  line   ┌─────────┐  Canvas ops  ┌────────┐
//!   │  reader  │ ──────► │ Session │ ───────────► │ Canvas │
//!   └──────────┘         └─────────┘              └────────┘
//!                             │ messages
//!                             ▼
//!                        ┌──────────┐
//!                        │  writer  │
//!                        └──────────┘
//! ```

use std::io::{BufRead, Write};

use asciiart_core::Canvas;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::input::{self, Command, InputError};

pub const MENU: &str = "======== MENU ========\n\
[1] Create a new canvas\n\
[2] Draw a character\n\
[3] Undo drawing\n\
[4] Redo drawing\n\
[5] Show current canvas\n\
[6] Show drawing history\n\
[7] Exit\n\
> ";

pub const MSG_INVALID_COMMAND: &str = "Invalid command!";
pub const MSG_NO_CANVAS: &str = "Please create a canvas first!";
pub const MSG_NON_POSITIVE_SIZE: &str = "Width or height of the canvas cannot be 0 or less!";
pub const MSG_OUTSIDE_CANVAS: &str = "This point is outside of the canvas area!";
pub const MSG_UNDO_FAILED: &str = "Undo failed!";
pub const MSG_REDO_FAILED: &str = "Redo failed!";
pub const MSG_NO_HISTORY: &str = "No Print History!";
pub const MSG_BYE: &str = "Bye!";

/// Whether the loop should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive editor state: at most one canvas, replaced on every create.
pub struct Session<R, W> {
    console: Console<R, W>,
    canvas: Option<Canvas>,
    show_menu: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self {
            console: Console { input, output },
            canvas: None,
            show_menu: true,
        }
    }

    /// Toggle the menu banner printed before each command.
    #[must_use]
    pub fn with_menu(mut self, show_menu: bool) -> Self {
        self.show_menu = show_menu;
        self
    }

    /// The current canvas, if one has been created.
    #[must_use]
    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    /// Consume the session and hand back its writer.
    pub fn into_output(self) -> W {
        self.console.output
    }

    /// Read and execute commands until `Exit` or end of input.
    ///
    /// # Errors
    ///
    /// Only I/O failures on the reader or writer end the loop with an error.
    pub fn run(&mut self) -> Result<()> {
        loop {
            if self.show_menu {
                self.console.write(MENU)?;
            }
            let Some(line) = self.console.read_line()? else {
                debug!("input closed");
                return Ok(());
            };
            if self.process_command(&line)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Execute one menu selection, prompting for its arguments.
    pub fn process_command(&mut self, line: &str) -> Result<Flow> {
        let Some(command) = Command::parse(line) else {
            debug!(line, "unknown menu selection");
            self.console.say(MSG_INVALID_COMMAND)?;
            return Ok(Flow::Continue);
        };
        debug!(?command, "menu command");

        match command {
            Command::Create => self.create_canvas(),
            Command::Draw => self.with_canvas(draw::<R, W>),
            Command::Undo => self.with_canvas(|canvas, console| {
                if !canvas.undo() {
                    console.say(MSG_UNDO_FAILED)?;
                }
                Ok(Flow::Continue)
            }),
            Command::Redo => self.with_canvas(|canvas, console| {
                if !canvas.redo() {
                    console.say(MSG_REDO_FAILED)?;
                }
                Ok(Flow::Continue)
            }),
            Command::Show => self.with_canvas(|canvas, console| {
                console.say(&canvas.render())?;
                Ok(Flow::Continue)
            }),
            Command::History => self.with_canvas(|canvas, console| {
                match canvas.list_history() {
                    None => console.say(MSG_NO_HISTORY)?,
                    Some(lines) => {
                        for line in &lines {
                            console.say(line)?;
                        }
                    }
                }
                Ok(Flow::Continue)
            }),
            Command::Exit => {
                self.console.say(MSG_BYE)?;
                Ok(Flow::Quit)
            }
        }
    }

    fn create_canvas(&mut self) -> Result<Flow> {
        let width = match self.console.ask("Width > ", input::parse_int)?.settle() {
            Ok(value) => value,
            Err(flow) => return Ok(flow),
        };
        let height = match self.console.ask("Height > ", input::parse_int)?.settle() {
            Ok(value) => value,
            Err(flow) => return Ok(flow),
        };

        match Canvas::new(width.into(), height.into()) {
            Ok(canvas) => {
                info!(width, height, "new canvas");
                self.canvas = Some(canvas);
            }
            Err(err) => {
                warn!(width, height, error = %err, "canvas rejected");
                if err.is_non_positive_size() {
                    self.console.say(MSG_NON_POSITIVE_SIZE)?;
                } else {
                    self.console.say(&err.to_string())?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn with_canvas<F>(&mut self, action: F) -> Result<Flow>
    where
        F: FnOnce(&mut Canvas, &mut Console<R, W>) -> Result<Flow>,
    {
        let Some(canvas) = self.canvas.as_mut() else {
            self.console.say(MSG_NO_CANVAS)?;
            return Ok(Flow::Continue);
        };
        action(canvas, &mut self.console)
    }
}

fn draw<R: BufRead, W: Write>(canvas: &mut Canvas, console: &mut Console<R, W>) -> Result<Flow> {
    let row = match console.ask("Row > ", input::parse_int)?.settle() {
        Ok(value) => value,
        Err(flow) => return Ok(flow),
    };
    let col = match console.ask("Col > ", input::parse_int)?.settle() {
        Ok(value) => value,
        Err(flow) => return Ok(flow),
    };
    let ch = match console.ask("Character > ", input::parse_char)?.settle() {
        Ok(value) => value,
        Err(flow) => return Ok(flow),
    };

    if let Err(err) = canvas.draw(row.into(), col.into(), ch) {
        warn!(row, col, error = %err, "draw rejected");
        if err.is_out_of_bounds() {
            console.say(MSG_OUTSIDE_CANVAS)?;
        } else {
            console.say(&err.to_string())?;
        }
    }
    Ok(Flow::Continue)
}

/// Outcome of a single prompt.
enum Answer<T> {
    Value(T),
    /// The token was rejected and the message already printed.
    Rejected,
    EndOfInput,
}

impl<T> Answer<T> {
    /// The value, or the flow the current command should end with.
    fn settle(self) -> std::result::Result<T, Flow> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Rejected => Err(Flow::Continue),
            Self::EndOfInput => Err(Flow::Quit),
        }
    }
}

struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Next line without its terminator, `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;
        Ok(())
    }

    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: fn(&str) -> std::result::Result<T, InputError>,
    ) -> Result<Answer<T>> {
        self.write(prompt)?;
        let Some(line) = self.read_line()? else {
            return Ok(Answer::EndOfInput);
        };
        match parse(&line) {
            Ok(value) => Ok(Answer::Value(value)),
            Err(err) => {
                debug!(prompt, error = ?err, "prompt rejected input");
                self.say(&err.to_string())?;
                Ok(Answer::Rejected)
            }
        }
    }
}
