//! Text component for displaying styled, word-wrapped text

use crate::component::Component;
use crate::context::{RenderContext, UseTheme};
use crate::event::EventHandler;
use crate::layout::Rect;
use crate::render::Renderer;
use anyhow::Result;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Text component
///
/// Content wraps at word boundaries to the width it is rendered into;
/// explicit newlines start a new line. Lines beyond the height are dropped.
pub struct Text {
    content: String,
    style: Option<String>,
    align: TextAlign,
    dirty: bool,
}

impl Text {
    /// Create new text component
    pub fn new(content: impl Into<String>) -> Self {
        Text {
            content: content.into(),
            style: None,
            align: TextAlign::Left,
            dirty: true,
        }
    }

    /// Override the theme's text style (ANSI codes)
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self.dirty = true;
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self.dirty = true;
        self
    }

    /// Update text content
    pub fn set_text(&mut self, content: impl Into<String>) {
        let content = content.into();
        if content != self.content {
            self.content = content;
            self.dirty = true;
        }
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn align(&self) -> TextAlign {
        self.align
    }
}

/// Break `text` into lines no wider than `width` display cells
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let needed = if line.is_empty() {
                word_width
            } else {
                line_width + 1 + word_width
            };

            if needed <= width {
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(word);
                line_width = needed;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            // Words wider than a full line are split by character
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if line_width + ch_width > width && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(ch);
                line_width += ch_width;
            }
        }

        lines.push(line);
    }

    lines
}

/// Longest prefix of `text` that fits in `width` display cells
pub(crate) fn truncate(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        used += ch.width().unwrap_or(0);
        if used > width {
            return &text[..idx];
        }
    }
    text
}

impl EventHandler for Text {}

impl Component for Text {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()> {
        if self.content.is_empty() || bounds.is_empty() {
            self.dirty = false;
            return Ok(());
        }

        let style = match &self.style {
            Some(style) => style.clone(),
            None => self.use_theme(ctx).text_style(),
        };

        let lines = wrap(&self.content, bounds.width as usize);
        for (i, line) in lines.iter().enumerate().take(bounds.height as usize) {
            let line_width = line.width() as u16;
            let x = match self.align {
                TextAlign::Left => bounds.x,
                TextAlign::Center => bounds.x + bounds.width.saturating_sub(line_width) / 2,
                TextAlign::Right => bounds.x + bounds.width.saturating_sub(line_width),
            };

            renderer.move_cursor(x, bounds.y + i as u16)?;
            renderer.write_styled(line, &style)?;
        }

        self.dirty = false;
        Ok(())
    }

    fn min_size(&self) -> (u16, u16) {
        let width = self.content.lines().map(|l| l.width()).max().unwrap_or(0);
        let height = self.content.lines().count().max(1);
        (width as u16, height as u16)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn name(&self) -> &str {
        "Text"
    }
}
