//! Button component - a focusable, tappable label

use crate::component::Component;
use crate::components::text::truncate;
use crate::context::{RenderContext, UseTheme};
use crate::event::{Event, EventHandler, Key, MouseButton, MouseEvent};
use crate::layout::Rect;
use crate::render::Renderer;
use crate::theme::ButtonVariant;
use anyhow::Result;
use unicode_width::UnicodeWidthStr;

/// Horizontal padding on each side of the label
const LABEL_PADDING: u16 = 2;

/// Single-line push button
///
/// The button remembers where it was last drawn so taps can be hit-tested
/// against it. Hidden buttons are skipped by rendering and hit-testing.
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    variant: ButtonVariant,
    showing: bool,
    focused: bool,
    bounds: Option<Rect>,
    pressed: bool,
    dirty: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Button {
            label: label.into(),
            variant: ButtonVariant::Plain,
            showing: true,
            focused: false,
            bounds: None,
            pressed: false,
            dirty: true,
        }
    }

    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        let label = label.into();
        if label != self.label {
            self.label = label;
            self.dirty = true;
        }
    }

    pub fn variant(&self) -> ButtonVariant {
        self.variant
    }

    pub fn is_showing(&self) -> bool {
        self.showing
    }

    pub fn set_showing(&mut self, showing: bool) {
        if showing != self.showing {
            self.showing = showing;
            if !showing {
                self.bounds = None;
                self.focused = false;
            }
            self.dirty = true;
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Where the button was last drawn
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// True if a visible, rendered button covers the cell
    pub fn hit_test(&self, col: u16, row: u16) -> bool {
        self.showing && self.bounds.is_some_and(|b| b.contains(col, row))
    }

    /// Returns and clears the pressed flag set by `handle_event`
    pub fn take_pressed(&mut self) -> bool {
        std::mem::take(&mut self.pressed)
    }
}

impl EventHandler for Button {
    fn handle_event(&mut self, event: &Event) -> bool {
        if !self.showing {
            return false;
        }

        let pressed = match event {
            Event::Key(Key::Enter | Key::Char(' ')) => self.focused,
            Event::Mouse(MouseEvent::Press(MouseButton::Left, col, row)) => {
                self.hit_test(*col, *row)
            }
            _ => false,
        };

        if pressed {
            self.pressed = true;
        }
        pressed
    }

    fn on_focus(&mut self) {
        if self.showing && !self.focused {
            self.focused = true;
            self.dirty = true;
        }
    }

    fn on_blur(&mut self) {
        if self.focused {
            self.focused = false;
            self.dirty = true;
        }
    }
}

impl Component for Button {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()> {
        if !self.showing || bounds.is_empty() {
            self.bounds = None;
            self.dirty = false;
            return Ok(());
        }

        let style = self.use_theme(ctx).button_style(self.variant, self.focused);
        let width = bounds.width as usize;

        // Focus is also marked with brackets for terminals without underline
        let face = if self.focused {
            format!("[ {} ]", self.label)
        } else {
            self.label.clone()
        };
        let face = truncate(&face, width);
        let left = width.saturating_sub(face.width()) / 2;
        let right = width.saturating_sub(left + face.width());

        let row = bounds.y + bounds.height / 2;
        renderer.move_cursor(bounds.x, row)?;
        renderer.write_styled(
            &format!("{}{}{}", " ".repeat(left), face, " ".repeat(right)),
            &style,
        )?;

        self.bounds = Some(Rect::new(bounds.x, row, bounds.width, 1));
        self.dirty = false;
        Ok(())
    }

    fn min_size(&self) -> (u16, u16) {
        (self.label.width() as u16 + LABEL_PADDING * 2, 1)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn name(&self) -> &str {
        "Button"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::TerminalCapabilities;
    use crate::theme::Theme;

    fn render(button: &mut Button, bounds: Rect) -> String {
        let theme = Theme::new(TerminalCapabilities::basic());
        let ctx = RenderContext::new(&theme);
        let mut renderer = Renderer::headless();
        button.render(&mut renderer, bounds, &ctx).unwrap();
        renderer.output().unwrap()
    }

    #[test]
    fn test_render_records_bounds() {
        let mut button = Button::new("OK").with_variant(ButtonVariant::Affirmative);
        let out = render(&mut button, Rect::new(10, 5, 8, 1));

        assert!(out.contains("   OK   "));
        assert_eq!(button.bounds(), Some(Rect::new(10, 5, 8, 1)));
        assert!(button.hit_test(10, 5));
        assert!(button.hit_test(17, 5));
        assert!(!button.hit_test(18, 5));
    }

    #[test]
    fn test_hidden_button_ignores_taps() {
        let mut button = Button::new("CANCEL");
        render(&mut button, Rect::new(0, 0, 10, 1));
        assert!(button.hit_test(1, 0));

        button.set_showing(false);
        assert!(!button.hit_test(1, 0));
        assert!(!button.handle_event(&Event::tap(1, 0)));
        assert!(render(&mut button, Rect::new(0, 0, 10, 1)).is_empty());
    }

    #[test]
    fn test_enter_presses_only_when_focused() {
        let mut button = Button::new("Yes");
        assert!(!button.handle_event(&Event::Key(Key::Enter)));

        button.on_focus();
        assert!(button.handle_event(&Event::Key(Key::Enter)));
        assert!(button.take_pressed());
        assert!(!button.take_pressed());
    }

    #[test]
    fn test_focused_face_is_bracketed() {
        let mut button = Button::new("No");
        button.on_focus();
        let out = render(&mut button, Rect::new(0, 0, 12, 1));
        assert!(out.contains("[ No ]"));
    }

    #[test]
    fn test_wide_label_stays_inside_bounds() {
        let mut button = Button::new("警告".repeat(10));
        let out = render(&mut button, Rect::new(0, 0, 9, 1));

        // Four double-width characters fit in nine cells, plus one space
        assert!(out.contains(&format!("{} ", "警告".repeat(2))));
        assert!(!out.contains(&"警告".repeat(3)));
        assert_eq!(button.bounds(), Some(Rect::new(0, 0, 9, 1)));
    }

    #[test]
    fn test_min_size_pads_label() {
        assert_eq!(Button::new("CONTINUE").min_size(), (12, 1));
    }
}
