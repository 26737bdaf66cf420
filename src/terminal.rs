//! Terminal abstraction - geometry and capabilities

use anyhow::Result;

/// Terminal geometry in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalGeometry {
    /// Terminal width in columns
    pub cols: u16,
    /// Terminal height in rows
    pub rows: u16,
}

impl TerminalGeometry {
    /// Get current terminal geometry
    #[cfg(feature = "tui")]
    pub fn detect() -> Result<Self> {
        use anyhow::Context;

        let (cols, rows) = crossterm::terminal::size().context("Failed to get terminal size")?;
        Ok(TerminalGeometry { cols, rows })
    }

    /// Fallback when no terminal backend is compiled in
    #[cfg(not(feature = "tui"))]
    pub fn detect() -> Result<Self> {
        Ok(Self::fixed(80, 24))
    }

    /// Geometry with explicit dimensions (headless rendering, tests)
    pub fn fixed(cols: u16, rows: u16) -> Self {
        TerminalGeometry { cols, rows }
    }
}

/// Terminal capability detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// Supports 24-bit true color
    pub truecolor: bool,
    /// Supports 256 colors
    pub colors_256: bool,
}

impl TerminalCapabilities {
    /// Detect terminal capabilities from the environment
    pub fn detect() -> Self {
        let term = std::env::var("TERM").unwrap_or_default();
        let colorterm = std::env::var("COLORTERM").unwrap_or_default();
        let kitty_window = std::env::var("KITTY_WINDOW_ID").is_ok();

        let truecolor =
            colorterm.contains("truecolor") || colorterm.contains("24bit") || kitty_window;

        TerminalCapabilities {
            truecolor,
            colors_256: term.contains("256") || truecolor,
        }
    }

    /// 8-color only. Deterministic output for headless rendering.
    pub fn basic() -> Self {
        TerminalCapabilities {
            truecolor: false,
            colors_256: false,
        }
    }
}
