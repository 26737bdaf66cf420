//! Component system - trait and lifecycle for UI elements

use crate::context::RenderContext;
use crate::event::EventHandler;
use crate::layout::Rect;
use crate::render::Renderer;
use anyhow::Result;

/// Core component trait for all UI elements
///
/// Components use a hybrid approach:
/// - Retained: Component tree structure and state
/// - Immediate: Rendering happens fresh each frame via render() callback
pub trait Component: EventHandler {
    /// Render the component to the given rectangle
    ///
    /// The context provides access to the theme.
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()>;

    /// Minimum size needed for this component (width, height)
    fn min_size(&self) -> (u16, u16) {
        (0, 0)
    }

    /// Called when component is first mounted
    fn on_mount(&mut self) {}

    /// Called before component is unmounted
    fn on_unmount(&mut self) {}

    /// Mark component as needing redraw
    fn mark_dirty(&mut self) {}

    /// Check if component needs redraw
    fn is_dirty(&self) -> bool {
        true
    }

    /// Get component name for debugging
    fn name(&self) -> &str {
        "Component"
    }
}
