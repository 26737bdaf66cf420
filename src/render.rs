//! Rendering backend - buffered terminal output and cursor management
//!
//! Output is batched in a write buffer; call `flush()` (or `end_frame()`)
//! after a batch of drawing operations. A headless renderer writes into
//! memory instead of stdout, which is what tests render against.

use crate::terminal::{TerminalCapabilities, TerminalGeometry};
use anyhow::Result;
use std::io::{self, BufWriter, Write};

/// Default buffer capacity for write batching (16KB)
const WRITE_BUFFER_CAPACITY: usize = 16 * 1024;

enum Output {
    Terminal(BufWriter<io::Stdout>),
    Buffer(Vec<u8>),
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Terminal(writer) => writer.write(buf),
            Output::Buffer(bytes) => bytes.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Terminal(writer) => writer.flush(),
            Output::Buffer(_) => Ok(()),
        }
    }
}

/// Terminal renderer issuing immediate-mode drawing commands
pub struct Renderer {
    writer: Output,
    geometry: TerminalGeometry,
    capabilities: TerminalCapabilities,
    in_alt_screen: bool,
}

impl Renderer {
    /// Create a renderer for the controlling terminal
    pub fn new() -> Result<Self> {
        let geometry = TerminalGeometry::detect()?;
        let capabilities = TerminalCapabilities::detect();
        log::debug!(
            "terminal renderer {}x{} (truecolor: {})",
            geometry.cols,
            geometry.rows,
            capabilities.truecolor
        );

        Ok(Renderer {
            writer: Output::Terminal(BufWriter::with_capacity(
                WRITE_BUFFER_CAPACITY,
                io::stdout(),
            )),
            geometry,
            capabilities,
            in_alt_screen: false,
        })
    }

    /// Create an 80x24 renderer that records output in memory
    pub fn headless() -> Self {
        Self::headless_with_size(80, 24)
    }

    /// Create an in-memory renderer with explicit dimensions
    pub fn headless_with_size(cols: u16, rows: u16) -> Self {
        Renderer {
            writer: Output::Buffer(Vec::new()),
            geometry: TerminalGeometry::fixed(cols, rows),
            capabilities: TerminalCapabilities::basic(),
            in_alt_screen: false,
        }
    }

    /// Everything written so far by a headless renderer, lossily decoded
    ///
    /// Returns `None` for terminal renderers.
    pub fn output(&self) -> Option<String> {
        match &self.writer {
            Output::Buffer(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
            Output::Terminal(_) => None,
        }
    }

    /// Discard recorded headless output
    pub fn clear_output(&mut self) {
        if let Output::Buffer(bytes) = &mut self.writer {
            bytes.clear();
        }
    }

    /// Enter alternative screen buffer (flushes immediately)
    pub fn enter_alt_screen(&mut self) -> Result<()> {
        if !self.in_alt_screen {
            write!(self.writer, "\x1b[?1049h")?;
            self.writer.flush()?;
            self.in_alt_screen = true;
        }
        Ok(())
    }

    /// Exit alternative screen buffer (flushes immediately)
    pub fn exit_alt_screen(&mut self) -> Result<()> {
        if self.in_alt_screen {
            write!(self.writer, "\x1b[?1049l")?;
            self.writer.flush()?;
            self.in_alt_screen = false;
        }
        Ok(())
    }

    /// Clear the screen
    pub fn clear(&mut self) -> Result<()> {
        write!(self.writer, "\x1b[2J")?;
        Ok(())
    }

    /// Move cursor to position (0-indexed)
    #[inline]
    pub fn move_cursor(&mut self, col: u16, row: u16) -> Result<()> {
        write!(self.writer, "\x1b[{};{}H", row + 1, col + 1)?;
        Ok(())
    }

    pub fn hide_cursor(&mut self) -> Result<()> {
        write!(self.writer, "\x1b[?25l")?;
        Ok(())
    }

    pub fn show_cursor(&mut self) -> Result<()> {
        write!(self.writer, "\x1b[?25h")?;
        Ok(())
    }

    /// Write text at current cursor position
    #[inline]
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        write!(self.writer, "{}", text)?;
        Ok(())
    }

    /// Write text wrapped in ANSI style codes, resetting afterwards
    #[inline]
    pub fn write_styled(&mut self, text: &str, style: &str) -> Result<()> {
        if style.is_empty() {
            return self.write_text(text);
        }
        write!(self.writer, "{}{}\x1b[0m", style, text)?;
        Ok(())
    }

    /// Flush output buffer to terminal
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Begin a render frame - hides cursor
    pub fn begin_frame(&mut self) -> Result<()> {
        self.hide_cursor()
    }

    /// End a render frame - shows cursor and flushes output
    pub fn end_frame(&mut self) -> Result<()> {
        self.show_cursor()?;
        self.flush()
    }

    pub fn geometry(&self) -> TerminalGeometry {
        self.geometry
    }

    pub fn capabilities(&self) -> TerminalCapabilities {
        self.capabilities
    }

    /// Refresh terminal geometry (call after resize)
    pub fn refresh_geometry(&mut self) -> Result<()> {
        if matches!(self.writer, Output::Terminal(_)) {
            self.geometry = TerminalGeometry::detect()?;
        }
        Ok(())
    }

    pub fn in_alt_screen(&self) -> bool {
        self.in_alt_screen
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        // Restore terminal state even when unwinding
        let _ = self.exit_alt_screen();
        if matches!(self.writer, Output::Terminal(_)) {
            let _ = self.show_cursor();
        }
        let _ = self.writer.flush();
    }
}
