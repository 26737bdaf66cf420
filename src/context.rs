//! Rendering context - provides the theme to components

use crate::theme::Theme;

/// Context passed down the component tree during rendering
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Current theme
    pub theme: &'a Theme,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        RenderContext { theme }
    }
}

/// Hook trait for accessing theme from context
pub trait UseTheme {
    fn use_theme<'a>(&self, ctx: &'a RenderContext) -> &'a Theme {
        ctx.theme
    }
}

impl<T> UseTheme for T {}
