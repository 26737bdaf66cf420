//! mkui-alert - a modal alert/confirmation dialog for terminal UIs
//!
//! Built on a small retained-tree, immediate-render component layer:
//! - [`Alert`]: centered modal with a message, a confirm button and an
//!   optional cancel button, answered exactly once
//! - [`alert()`]: creates, configures and shows an alert inside a [`Host`]
//! - [`Host`]: owning context whose state is handed to alert callbacks

pub mod alert;
pub mod component;
pub mod components;
pub mod context;
pub mod error;
pub mod event;
pub mod host;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod theme;

// Re-export commonly used types
pub use alert::{alert, AlertOptions};
pub use component::Component;
pub use components::popup::alert::{DEFAULT_CANCEL_TEXT, DEFAULT_CONFIRM_TEXT};
pub use components::{
    Alert, AlertAction, AlertState, Button, Callback, Popup, PopupPosition, PopupResult, Text,
    TextAlign,
};
pub use context::{RenderContext, UseTheme};
pub use error::AlertError;
#[cfg(feature = "tui")]
pub use event::EventPoller;
pub use event::{Event, EventHandler, Key, MouseButton, MouseEvent};
pub use host::{Host, Slot, SlotId};
pub use layout::Rect;
pub use render::Renderer;
pub use terminal::{TerminalCapabilities, TerminalGeometry};
pub use theme::{BorderStyle, ButtonVariant, Color, Theme};
