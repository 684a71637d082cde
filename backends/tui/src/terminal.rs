use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{MoveTo, Show},
    execute, queue,
    style::PrintStyledContent,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::{
    error::TuiError,
    renderer::{RenderFrame, RenderLine},
};

/// Width reported by buffered terminals.
const BUFFERED_WIDTH: u16 = 80;
/// Height reported by buffered terminals.
const BUFFERED_HEIGHT: u16 = 24;

/// Represents the concrete output target the terminal backend writes to.
#[derive(Debug)]
enum TerminalTarget {
    Stdout {
        handle: Stdout,
        raw_mode: bool,
        alternate_screen: bool,
    },
    Buffer(Vec<u8>),
}

impl TerminalTarget {
    fn stdout() -> Result<Self, TuiError> {
        let mut handle = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(handle, EnterAlternateScreen, Show)?;
        Ok(Self::Stdout {
            handle,
            raw_mode: true,
            alternate_screen: true,
        })
    }

    const fn buffered() -> Self {
        Self::Buffer(Vec::new())
    }

    fn write_frame(&mut self, frame: &RenderFrame) -> Result<(), TuiError> {
        match self {
            Self::Stdout { handle, .. } => {
                queue!(handle, MoveTo(0, 0), Clear(ClearType::All))?;
                for (row, line) in frame.lines().iter().enumerate() {
                    let row = u16::try_from(row).unwrap_or(u16::MAX);
                    queue!(handle, MoveTo(0, row))?;
                    write_line_stdout(handle, line)?;
                }
                let (column, row) = frame.cursor();
                queue!(handle, MoveTo(column, row))?;
                handle.flush()?;
                Ok(())
            }
            Self::Buffer(buffer) => {
                buffer.clear();
                buffer.extend_from_slice(frame.to_plain_text().as_bytes());
                Ok(())
            }
        }
    }
}

impl Drop for TerminalTarget {
    fn drop(&mut self) {
        if let Self::Stdout {
            handle,
            raw_mode,
            alternate_screen,
        } = self
        {
            if *alternate_screen {
                let _ = execute!(handle, LeaveAlternateScreen);
            }
            if *raw_mode {
                let _ = terminal::disable_raw_mode();
            }
        }
    }
}

fn write_line_stdout(handle: &mut Stdout, line: &RenderLine) -> Result<(), TuiError> {
    for segment in line.segments() {
        queue!(handle, PrintStyledContent(segment.as_styled_content()))?;
    }
    Ok(())
}

/// Thin wrapper around the concrete terminal output target.
#[derive(Debug)]
pub struct Terminal {
    target: TerminalTarget,
}

impl Terminal {
    /// Creates a terminal bound to the process `stdout` handle, enabling raw mode
    /// and entering the alternate screen buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or the alternate screen cannot be enabled.
    pub fn stdout() -> Result<Self, TuiError> {
        Ok(Self {
            target: TerminalTarget::stdout()?,
        })
    }

    /// Creates a buffered terminal useful for tests.
    #[must_use]
    pub const fn buffered() -> Self {
        Self {
            target: TerminalTarget::buffered(),
        }
    }

    /// Returns the current terminal size as `(columns, rows)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the size of a real terminal cannot be queried.
    pub fn size(&self) -> Result<(u16, u16), TuiError> {
        match self.target {
            TerminalTarget::Stdout { .. } => Ok(terminal::size()?),
            TerminalTarget::Buffer(_) => Ok((BUFFERED_WIDTH, BUFFERED_HEIGHT)),
        }
    }

    /// Renders a frame to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn render(&mut self, frame: &RenderFrame) -> Result<(), TuiError> {
        self.target.write_frame(frame)
    }

    /// Returns the buffered contents when the terminal was created via [`Self::buffered`].
    #[must_use]
    pub fn snapshot(&self) -> Option<&[u8]> {
        match &self.target {
            TerminalTarget::Buffer(buffer) => Some(buffer.as_slice()),
            TerminalTarget::Stdout { .. } => None,
        }
    }
}
