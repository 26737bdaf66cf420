//! Popup/Modal frame for overlays
//!
//! Provides modal dialogs with:
//! - Centered positioning
//! - Border/chrome styling with an optional title
//! - Focus trapping
//! - ESC to cancel, Enter to confirm

pub mod alert;

pub use alert::{Alert, AlertAction, AlertState, Callback};

use crate::component::Component;
use crate::components::text::truncate;
use crate::context::{RenderContext, UseTheme};
use crate::event::{Event, EventHandler, Key};
use crate::layout::Rect;
use crate::render::Renderer;
use crate::theme::BorderStyle;
use anyhow::Result;
use unicode_width::UnicodeWidthStr;

/// Popup position on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupPosition {
    #[default]
    Center,
    Top,
    Bottom,
}

/// Result from popup interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupResult {
    #[default]
    Open,
    Cancelled,
    Confirmed,
}

/// Modal popup frame around a content component
pub struct Popup<C> {
    content: C,
    title: Option<String>,
    visible: bool,
    size: Option<(u16, u16)>,
    position: PopupPosition,
    border_style: BorderStyle,
    close_on_escape: bool,
    result: PopupResult,
    dirty: bool,
}

impl<C> std::fmt::Debug for Popup<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Popup")
            .field("title", &self.title)
            .field("visible", &self.visible)
            .field("size", &self.size)
            .field("position", &self.position)
            .field("border_style", &self.border_style)
            .field("result", &self.result)
            .finish()
    }
}

impl<C: Component> Popup<C> {
    pub fn new(content: C) -> Self {
        Self {
            content,
            title: None,
            visible: false,
            size: None,
            position: PopupPosition::Center,
            border_style: BorderStyle::Rounded,
            close_on_escape: true,
            result: PopupResult::Open,
            dirty: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.size = Some((width, height));
        self
    }

    pub fn with_position(mut self, position: PopupPosition) -> Self {
        self.position = position;
        self
    }

    pub fn with_border(mut self, style: BorderStyle) -> Self {
        self.border_style = style;
        self
    }

    pub fn with_close_on_escape(mut self, close: bool) -> Self {
        self.close_on_escape = close;
        self
    }

    pub fn show(&mut self) {
        self.visible = true;
        self.result = PopupResult::Open;
        self.dirty = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.dirty = true;
    }

    pub fn cancel(&mut self) {
        self.result = PopupResult::Cancelled;
        self.close();
    }

    pub fn confirm(&mut self) {
        self.result = PopupResult::Confirmed;
        self.close();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn result(&self) -> PopupResult {
        self.result
    }

    pub fn take_result(&mut self) -> PopupResult {
        std::mem::take(&mut self.result)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
        self.dirty = true;
    }

    /// Fixed frame size, or `None` to size from content
    pub fn set_size(&mut self, size: Option<(u16, u16)>) {
        self.size = size;
        self.dirty = true;
    }

    pub fn set_close_on_escape(&mut self, close: bool) {
        self.close_on_escape = close;
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// Frame size before clamping to the parent
    fn frame_size(&self) -> (u16, u16) {
        self.size.unwrap_or_else(|| {
            let (min_w, min_h) = self.content.min_size();
            let border = self.border_style.thickness();
            let title_w = self
                .title
                .as_deref()
                .map_or(0, |t| (t.width().min(u16::MAX as usize) as u16).saturating_add(4));
            (
                min_w.saturating_add(border).max(title_w),
                min_h.saturating_add(border),
            )
        })
    }

    fn calculate_bounds(&self, parent: Rect) -> Rect {
        let (width, height) = self.frame_size();
        let centered = parent.centered(width, height);

        match self.position {
            PopupPosition::Center => centered,
            PopupPosition::Top => Rect {
                y: parent.y + 1u16.min(parent.height - centered.height),
                ..centered
            },
            PopupPosition::Bottom => Rect {
                y: parent.bottom().saturating_sub(centered.height + 1).max(parent.y),
                ..centered
            },
        }
    }

    fn content_bounds(&self, popup_bounds: Rect) -> Rect {
        if self.border_style == BorderStyle::None {
            popup_bounds
        } else {
            popup_bounds.inner(1)
        }
    }

    fn render_frame(&self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()> {
        let theme = self.use_theme(ctx);
        let width = bounds.width as usize;

        let chars = match self.border_style.chars() {
            Some(chars) if bounds.width >= 2 && bounds.height >= 2 => chars,
            _ => {
                // Borderless: just clear the area underneath
                for y in bounds.y..bounds.bottom() {
                    renderer.move_cursor(bounds.x, y)?;
                    renderer.write_styled(&" ".repeat(width), &theme.surface_style())?;
                }
                return Ok(());
            }
        };
        let border = theme.border_color_style();
        let inner_width = width - 2;

        // Top edge, with the title centered in it
        renderer.move_cursor(bounds.x, bounds.y)?;
        renderer.write_styled(&chars.top_left.to_string(), &border)?;
        match &self.title {
            Some(title) if inner_width >= 4 => {
                let label = format!(" {} ", truncate(title, inner_width - 2));
                let left = inner_width.saturating_sub(label.width()) / 2;
                let right = inner_width.saturating_sub(label.width() + left);

                renderer.write_styled(&chars.horizontal.to_string().repeat(left), &border)?;
                renderer.write_styled(&label, &theme.title_style())?;
                renderer.write_styled(&chars.horizontal.to_string().repeat(right), &border)?;
            }
            _ => {
                renderer.write_styled(&chars.horizontal.to_string().repeat(inner_width), &border)?;
            }
        }
        renderer.write_styled(&chars.top_right.to_string(), &border)?;

        // Sides, clearing the interior
        for y in (bounds.y + 1)..(bounds.bottom() - 1) {
            renderer.move_cursor(bounds.x, y)?;
            renderer.write_styled(&chars.vertical.to_string(), &border)?;
            renderer.write_styled(&" ".repeat(inner_width), &theme.surface_style())?;
            renderer.write_styled(&chars.vertical.to_string(), &border)?;
        }

        renderer.move_cursor(bounds.x, bounds.bottom() - 1)?;
        renderer.write_styled(
            &format!(
                "{}{}{}",
                chars.bottom_left,
                chars.horizontal.to_string().repeat(inner_width),
                chars.bottom_right
            ),
            &border,
        )?;

        Ok(())
    }
}

impl<C: Component> EventHandler for Popup<C> {
    fn handle_event(&mut self, event: &Event) -> bool {
        if !self.visible {
            return false;
        }

        match event {
            Event::Key(Key::Esc) if self.close_on_escape => {
                self.cancel();
                return true;
            }
            Event::Key(Key::Enter) => {
                self.confirm();
                return true;
            }
            _ => {}
        }

        // Modal: whatever the content ignores is swallowed too
        self.content.handle_event(event);
        true
    }
}

impl<C: Component> Component for Popup<C> {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()> {
        if !self.visible {
            return Ok(());
        }

        let popup_bounds = self.calculate_bounds(bounds);
        if popup_bounds.is_empty() {
            return Ok(());
        }

        self.render_frame(renderer, popup_bounds, ctx)?;
        let content_bounds = self.content_bounds(popup_bounds);
        self.content.render(renderer, content_bounds, ctx)?;

        self.dirty = false;
        Ok(())
    }

    fn min_size(&self) -> (u16, u16) {
        self.frame_size()
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
        self.content.mark_dirty();
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.content.is_dirty()
    }

    fn name(&self) -> &str {
        "Popup"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Text;
    use crate::terminal::TerminalCapabilities;
    use crate::theme::Theme;

    struct TestContent;

    impl EventHandler for TestContent {}

    impl Component for TestContent {
        fn render(
            &mut self,
            _renderer: &mut Renderer,
            _bounds: Rect,
            _ctx: &RenderContext,
        ) -> Result<()> {
            Ok(())
        }

        fn min_size(&self) -> (u16, u16) {
            (20, 10)
        }

        fn name(&self) -> &str {
            "TestContent"
        }
    }

    #[test]
    fn test_popup_visibility() {
        let mut popup = Popup::new(TestContent);

        assert!(!popup.is_visible());

        popup.show();
        assert!(popup.is_visible());

        popup.close();
        assert!(!popup.is_visible());
    }

    #[test]
    fn test_popup_results() {
        let mut popup = Popup::new(TestContent);
        popup.show();

        popup.confirm();
        assert_eq!(popup.result(), PopupResult::Confirmed);
        assert!(!popup.is_visible());

        popup.show();
        popup.cancel();
        assert_eq!(popup.take_result(), PopupResult::Cancelled);
        assert_eq!(popup.result(), PopupResult::Open);
    }

    #[test]
    fn test_bounds_calculation() {
        let popup = Popup::new(TestContent).with_size(40, 20);

        let bounds = popup.calculate_bounds(Rect::new(0, 0, 80, 24));
        assert_eq!(bounds, Rect::new(20, 2, 40, 20));

        // Content-sized: 20x10 plus border
        let popup = Popup::new(TestContent);
        let bounds = popup.calculate_bounds(Rect::new(0, 0, 80, 24));
        assert_eq!(bounds, Rect::new(29, 6, 22, 12));

        let popup = Popup::new(TestContent).with_position(PopupPosition::Bottom);
        let bounds = popup.calculate_bounds(Rect::new(0, 0, 80, 24));
        assert_eq!(bounds.y, 11);
    }

    #[test]
    fn test_escape_handling() {
        let mut popup = Popup::new(TestContent).with_close_on_escape(true);
        popup.show();

        assert!(popup.handle_event(&Event::Key(Key::Esc)));
        assert!(!popup.is_visible());
        assert_eq!(popup.result(), PopupResult::Cancelled);

        let mut popup = Popup::new(TestContent).with_close_on_escape(false);
        popup.show();
        // Still swallowed because focus is trapped
        assert!(popup.handle_event(&Event::Key(Key::Esc)));
        assert!(popup.is_visible());
    }

    #[test]
    fn test_render_frame_with_title() {
        let theme = Theme::new(TerminalCapabilities::basic());
        let ctx = RenderContext::new(&theme);
        let mut renderer = Renderer::headless();

        let mut popup = Popup::new(Text::new("inside"))
            .with_title("Warning")
            .with_border(BorderStyle::Ascii);
        popup.show();
        popup
            .render(&mut renderer, Rect::new(0, 0, 80, 24), &ctx)
            .unwrap();

        let out = renderer.output().unwrap();
        assert!(out.contains(" Warning "));
        assert!(out.contains("inside"));
        assert!(out.contains('+'));
        assert!(!popup.is_dirty());
    }

    #[test]
    fn test_wide_title_is_cut_to_frame() {
        let theme = Theme::new(TerminalCapabilities::basic());
        let ctx = RenderContext::new(&theme);
        let mut renderer = Renderer::headless();

        let mut popup = Popup::new(TestContent)
            .with_title("警告".repeat(15))
            .with_size(24, 6)
            .with_border(BorderStyle::Ascii);
        popup.show();
        popup
            .render(&mut renderer, Rect::new(0, 0, 80, 24), &ctx)
            .unwrap();

        // 22 inner cells: a space on each side leaves room for ten wide chars
        let out = renderer.output().unwrap();
        assert!(out.contains(&format!(" {} ", "警告".repeat(5))));
        assert!(!out.contains(&"警告".repeat(6)));
    }
}
