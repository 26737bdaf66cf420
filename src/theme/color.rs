//! Color types with automatic degradation support

use crate::terminal::TerminalCapabilities;

/// Color that degrades to whatever the terminal supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// True color RGB
    Rgb(u8, u8, u8),
    /// 256-color palette index
    Palette256(u8),
}

/// The eight base ANSI colors, in SGR order
const BASIC_PALETTE: [(u8, u8, u8); 8] = [
    (0, 0, 0),
    (170, 0, 0),
    (0, 170, 0),
    (170, 85, 0),
    (0, 0, 170),
    (170, 0, 170),
    (0, 170, 170),
    (170, 170, 170),
];

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    pub fn white() -> Self {
        Color::Rgb(255, 255, 255)
    }

    pub fn black() -> Self {
        Color::Rgb(0, 0, 0)
    }

    pub fn dark_gray() -> Self {
        Color::Rgb(128, 128, 128)
    }

    /// Foreground escape sequence for the given capabilities
    pub fn degrade(&self, caps: &TerminalCapabilities) -> String {
        self.sgr(caps, 38, 30)
    }

    /// Background escape sequence for the given capabilities
    pub fn bg(&self, caps: &TerminalCapabilities) -> String {
        self.sgr(caps, 48, 40)
    }

    fn sgr(&self, caps: &TerminalCapabilities, extended: u8, basic_base: u8) -> String {
        if caps.truecolor {
            let (r, g, b) = self.to_rgb();
            format!("\x1b[{};2;{};{};{}m", extended, r, g, b)
        } else if caps.colors_256 {
            let idx = match *self {
                Color::Palette256(idx) => idx,
                Color::Rgb(r, g, b) => rgb_to_256(r, g, b),
            };
            format!("\x1b[{};5;{}m", extended, idx)
        } else {
            let (r, g, b) = self.to_rgb();
            format!("\x1b[{}m", basic_base + nearest_basic(r, g, b))
        }
    }

    fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Rgb(r, g, b) => (r, g, b),
            Color::Palette256(idx) => palette256_to_rgb(idx),
        }
    }
}

/// Convert RGB to 256-color palette index
pub(crate) fn rgb_to_256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        return match r {
            0..=7 => 16,
            249..=255 => 231,
            _ => ((r - 8) / 10) + 232,
        };
    }

    let level = |c: u8| (c as u16 * 5 / 255) as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

fn palette256_to_rgb(idx: u8) -> (u8, u8, u8) {
    match idx {
        0..=7 => BASIC_PALETTE[idx as usize],
        8..=15 => {
            let (r, g, b) = BASIC_PALETTE[(idx - 8) as usize];
            (r.saturating_add(85), g.saturating_add(85), b.saturating_add(85))
        }
        232..=255 => {
            let gray = 8 + (idx - 232) * 10;
            (gray, gray, gray)
        }
        _ => {
            let idx = idx - 16;
            ((idx / 36) * 51, ((idx % 36) / 6) * 51, (idx % 6) * 51)
        }
    }
}

/// Index into `BASIC_PALETTE` closest to the given color
fn nearest_basic(r: u8, g: u8, b: u8) -> u8 {
    let distance = |&(pr, pg, pb): &(u8, u8, u8)| {
        let dr = r as i32 - pr as i32;
        let dg = g as i32 - pg as i32;
        let db = b as i32 - pb as i32;
        dr * dr + dg * dg + db * db
    };

    BASIC_PALETTE
        .iter()
        .enumerate()
        .min_by_key(|(_, rgb)| distance(rgb))
        .map(|(idx, _)| idx as u8)
        .unwrap_or(7)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_256() {
        assert_eq!(rgb_to_256(255, 255, 255), 231);
        assert_eq!(rgb_to_256(0, 0, 0), 16);

        let gray_idx = rgb_to_256(128, 128, 128);
        assert!((232..=255).contains(&gray_idx));
    }

    #[test]
    fn test_truecolor_degradation() {
        let caps = TerminalCapabilities {
            truecolor: true,
            colors_256: true,
        };

        assert!(Color::white().degrade(&caps).contains("38;2;255;255;255"));
        assert!(Color::black().bg(&caps).contains("48;2;0;0;0"));
    }

    #[test]
    fn test_basic_degradation() {
        let caps = TerminalCapabilities::basic();

        assert_eq!(Color::rgb(200, 20, 20).degrade(&caps), "\x1b[31m");
        assert_eq!(Color::rgb(10, 160, 30).bg(&caps), "\x1b[42m");
        assert_eq!(Color::white().degrade(&caps), "\x1b[37m");
    }
}
